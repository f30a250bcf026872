use std::sync::Arc;

use crate::brand_health::service::BrandHealthService;
use crate::config::Config;
use crate::store::BrandStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BrandStore>,
    pub health: BrandHealthService,
}

impl AppState {
    pub fn new(store: Arc<dyn BrandStore>, config: &Config) -> Self {
        let health = BrandHealthService::new(store.clone(), config.compliance_check_window);
        Self { store, health }
    }
}
