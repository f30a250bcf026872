pub mod brands;
pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::brand_health::handlers as brand_health;
use crate::state::AppState;
use crate::strategy::handlers as strategy;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/brands/:id",
            get(brands::handle_get_brand).patch(brands::handle_update_brand),
        )
        .route(
            "/api/v1/brands/:id/strategy/:section",
            put(strategy::handle_upsert_section),
        )
        .route(
            "/api/v1/brands/:id/health",
            get(brand_health::handle_get_health).post(brand_health::handle_record_health),
        )
        .route(
            "/api/v1/brands/:id/health/snapshot",
            get(brand_health::handle_get_snapshot),
        )
        .route("/api/v1/strategy/classify", post(strategy::handle_classify))
        .with_state(state)
}
