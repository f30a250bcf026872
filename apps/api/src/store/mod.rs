//! Brand store — the read/write seam between brand health and persistence.
//!
//! `AppState` holds an `Arc<dyn BrandStore>`; production uses `PgBrandStore`.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::brand_health::models::BrandHealth;
use crate::models::brand::{
    BrandGuidelinesRow, BrandHealthSnapshotRow, BrandRow, BrandUpdate, BrandVoiceRow,
    ComplianceCheckRow, SectionType, StrategySectionRow, VisualAssetRow,
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgBrandStore;

#[async_trait]
pub trait BrandStore: Send + Sync {
    async fn fetch_brand(&self, brand_id: Uuid) -> Result<Option<BrandRow>>;
    async fn fetch_strategy_sections(&self, brand_id: Uuid) -> Result<Vec<StrategySectionRow>>;
    async fn fetch_visual_assets(&self, brand_id: Uuid) -> Result<Vec<VisualAssetRow>>;
    async fn fetch_voice(&self, brand_id: Uuid) -> Result<Option<BrandVoiceRow>>;
    async fn fetch_guidelines(&self, brand_id: Uuid) -> Result<Option<BrandGuidelinesRow>>;

    /// The `limit` most recent checks, newest first. Ties on `created_at`
    /// are broken by id so the window is stable for a fixed dataset.
    async fn fetch_recent_compliance_checks(
        &self,
        brand_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ComplianceCheckRow>>;

    /// Replaces the brand's current snapshot.
    async fn upsert_health_snapshot(
        &self,
        brand_id: Uuid,
        health: &BrandHealth,
    ) -> Result<BrandHealthSnapshotRow>;

    async fn latest_health_snapshot(&self, brand_id: Uuid)
        -> Result<Option<BrandHealthSnapshotRow>>;

    /// Returns `None` when the brand does not exist.
    async fn update_brand(&self, brand_id: Uuid, update: &BrandUpdate)
        -> Result<Option<BrandRow>>;

    /// Insert-or-replace keyed by (brand_id, section_type).
    async fn upsert_strategy_section(
        &self,
        brand_id: Uuid,
        section_type: SectionType,
        content: &Value,
        completed: bool,
    ) -> Result<StrategySectionRow>;
}

/// Normalises an industry edit: blank text clears the field.
pub(crate) fn normalize_industry(industry: &str) -> Option<String> {
    let trimmed = industry.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
