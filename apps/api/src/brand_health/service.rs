//! Brand health service — fetch, score, explain, optionally persist.
//!
//! Flow: six concurrent store reads (joined) → sub-scores → overall score →
//! insights. Brand health is advisory: every failure degrades to
//! `BrandHealth::unavailable()` instead of surfacing an error.

use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::brand_health::insights::generate_insights;
use crate::brand_health::models::{BrandHealth, BrandRecords};
use crate::brand_health::scoring::{compute_sub_scores, overall_score, ScoringWeights};
use crate::models::brand::BrandHealthSnapshotRow;
use crate::store::BrandStore;

#[derive(Debug, Error)]
pub enum HealthError {
    #[error("Brand {0} not found")]
    NotFound(Uuid),

    #[error("Store error: {0:#}")]
    Collaborator(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct BrandHealthService {
    store: Arc<dyn BrandStore>,
    weights: ScoringWeights,
    /// How many of the most recent compliance checks feed consistency.
    compliance_window: i64,
}

impl BrandHealthService {
    pub fn new(store: Arc<dyn BrandStore>, compliance_window: u32) -> Self {
        Self {
            store,
            weights: ScoringWeights::default(),
            compliance_window: i64::from(compliance_window),
        }
    }

    #[cfg(test)]
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Reads every record the calculator needs. The six reads run concurrently;
    /// the first failure cancels the rest.
    pub async fn fetch_records(&self, brand_id: Uuid) -> Result<BrandRecords, HealthError> {
        let store = self.store.as_ref();
        let (brand, sections, assets, voice, guidelines, compliance_checks) = tokio::try_join!(
            store.fetch_brand(brand_id),
            store.fetch_strategy_sections(brand_id),
            store.fetch_visual_assets(brand_id),
            store.fetch_voice(brand_id),
            store.fetch_guidelines(brand_id),
            store.fetch_recent_compliance_checks(brand_id, self.compliance_window),
        )?;

        let brand = brand.ok_or(HealthError::NotFound(brand_id))?;

        Ok(BrandRecords {
            brand,
            sections,
            assets,
            voice,
            guidelines,
            compliance_checks,
        })
    }

    /// Scores already-fetched records. Pure and deterministic.
    pub fn score(&self, records: &BrandRecords) -> BrandHealth {
        let scores = compute_sub_scores(records);
        let overall = overall_score(&scores, &self.weights);
        let details = generate_insights(&scores, records);
        BrandHealth::new(overall, scores, details)
    }

    pub async fn try_compute(&self, brand_id: Uuid) -> Result<BrandHealth, HealthError> {
        let records = self.fetch_records(brand_id).await?;
        let health = self.score(&records);
        info!(
            "Computed brand health for {brand_id}: overall={} completeness={} consistency={} uniqueness={} relevance={}",
            health.overall_score,
            health.completeness_score,
            health.consistency_score,
            health.uniqueness_score,
            health.relevance_score
        );
        Ok(health)
    }

    /// Computes brand health from fresh data. Never fails.
    pub async fn compute_brand_health(&self, brand_id: Uuid) -> BrandHealth {
        match self.try_compute(brand_id).await {
            Ok(health) => health,
            Err(e) => {
                warn!("Brand health unavailable for {brand_id}: {e}");
                BrandHealth::unavailable()
            }
        }
    }

    /// Computes brand health and replaces the stored snapshot in the background.
    ///
    /// Degraded results are not persisted. A failed write is logged and never
    /// reaches the caller.
    pub async fn compute_and_record(&self, brand_id: Uuid) -> BrandHealth {
        let (health, _write) = self.compute_and_spawn_record(brand_id).await;
        health
    }

    /// Like `compute_and_record`, but hands back the snapshot write task.
    /// `None` for a degraded result, which is never persisted.
    pub async fn compute_and_spawn_record(
        &self,
        brand_id: Uuid,
    ) -> (BrandHealth, Option<JoinHandle<()>>) {
        let health = match self.try_compute(brand_id).await {
            Ok(health) => health,
            Err(e) => {
                warn!("Brand health unavailable for {brand_id}: {e}");
                return (BrandHealth::unavailable(), None);
            }
        };

        let store = Arc::clone(&self.store);
        let snapshot = health.clone();
        let write = tokio::spawn(async move {
            if let Err(e) = store.upsert_health_snapshot(brand_id, &snapshot).await {
                error!("Failed to persist brand health snapshot for {brand_id}: {e:#}");
            }
        });

        (health, Some(write))
    }

    pub async fn latest_snapshot(
        &self,
        brand_id: Uuid,
    ) -> anyhow::Result<Option<BrandHealthSnapshotRow>> {
        self.store.latest_health_snapshot(brand_id).await
    }
}
