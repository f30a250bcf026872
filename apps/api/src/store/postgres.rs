use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::brand_health::models::BrandHealth;
use crate::models::brand::{
    BrandGuidelinesRow, BrandHealthSnapshotRow, BrandRow, BrandUpdate, BrandVoiceRow,
    ComplianceCheckRow, SectionType, StrategySectionRow, VisualAssetRow,
};
use crate::store::{normalize_industry, BrandStore};

/// PostgreSQL-backed brand store.
#[derive(Clone)]
pub struct PgBrandStore {
    pool: PgPool,
}

impl PgBrandStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrandStore for PgBrandStore {
    async fn fetch_brand(&self, brand_id: Uuid) -> Result<Option<BrandRow>> {
        sqlx::query_as::<_, BrandRow>("SELECT * FROM brands WHERE id = $1")
            .bind(brand_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to fetch brand {brand_id}"))
    }

    async fn fetch_strategy_sections(&self, brand_id: Uuid) -> Result<Vec<StrategySectionRow>> {
        sqlx::query_as::<_, StrategySectionRow>(
            "SELECT * FROM strategy_sections WHERE brand_id = $1 ORDER BY section_type",
        )
        .bind(brand_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Failed to fetch strategy sections for brand {brand_id}"))
    }

    async fn fetch_visual_assets(&self, brand_id: Uuid) -> Result<Vec<VisualAssetRow>> {
        sqlx::query_as::<_, VisualAssetRow>(
            "SELECT id, brand_id, asset_type, created_at FROM visual_assets WHERE brand_id = $1",
        )
        .bind(brand_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Failed to fetch visual assets for brand {brand_id}"))
    }

    async fn fetch_voice(&self, brand_id: Uuid) -> Result<Option<BrandVoiceRow>> {
        sqlx::query_as::<_, BrandVoiceRow>(
            "SELECT id, brand_id, created_at FROM brand_voices WHERE brand_id = $1 LIMIT 1",
        )
        .bind(brand_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to fetch brand voice for brand {brand_id}"))
    }

    async fn fetch_guidelines(&self, brand_id: Uuid) -> Result<Option<BrandGuidelinesRow>> {
        sqlx::query_as::<_, BrandGuidelinesRow>(
            "SELECT id, brand_id, created_at FROM brand_guidelines WHERE brand_id = $1 LIMIT 1",
        )
        .bind(brand_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to fetch brand guidelines for brand {brand_id}"))
    }

    async fn fetch_recent_compliance_checks(
        &self,
        brand_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ComplianceCheckRow>> {
        sqlx::query_as::<_, ComplianceCheckRow>(
            r#"
            SELECT id, brand_id, score::float8 AS score, created_at
            FROM compliance_checks
            WHERE brand_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(brand_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Failed to fetch compliance checks for brand {brand_id}"))
    }

    async fn upsert_health_snapshot(
        &self,
        brand_id: Uuid,
        health: &BrandHealth,
    ) -> Result<BrandHealthSnapshotRow> {
        let details = serde_json::to_value(&health.details)?;

        let row = sqlx::query_as::<_, BrandHealthSnapshotRow>(
            r#"
            INSERT INTO brand_health
                (id, brand_id, overall_score, completeness_score, consistency_score,
                 uniqueness_score, relevance_score, details, calculated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
            ON CONFLICT (brand_id) DO UPDATE SET
                id = EXCLUDED.id,
                overall_score = EXCLUDED.overall_score,
                completeness_score = EXCLUDED.completeness_score,
                consistency_score = EXCLUDED.consistency_score,
                uniqueness_score = EXCLUDED.uniqueness_score,
                relevance_score = EXCLUDED.relevance_score,
                details = EXCLUDED.details,
                calculated_at = EXCLUDED.calculated_at
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(brand_id)
        .bind(health.overall_score as i32)
        .bind(health.completeness_score as i32)
        .bind(health.consistency_score as i32)
        .bind(health.uniqueness_score as i32)
        .bind(health.relevance_score as i32)
        .bind(details)
        .fetch_one(&self.pool)
        .await
        .with_context(|| format!("Failed to store health snapshot for brand {brand_id}"))?;

        debug!("Stored health snapshot {} for brand {brand_id}", row.id);
        Ok(row)
    }

    async fn latest_health_snapshot(
        &self,
        brand_id: Uuid,
    ) -> Result<Option<BrandHealthSnapshotRow>> {
        sqlx::query_as::<_, BrandHealthSnapshotRow>(
            "SELECT * FROM brand_health WHERE brand_id = $1 ORDER BY calculated_at DESC LIMIT 1",
        )
        .bind(brand_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to fetch health snapshot for brand {brand_id}"))
    }

    async fn update_brand(
        &self,
        brand_id: Uuid,
        update: &BrandUpdate,
    ) -> Result<Option<BrandRow>> {
        let name = update.name.as_deref().map(str::trim);
        let industry_set = update.industry.is_some();
        let industry = update.industry.as_deref().and_then(normalize_industry);

        let row = sqlx::query_as::<_, BrandRow>(
            r#"
            UPDATE brands SET
                name = COALESCE($2, name),
                industry = CASE WHEN $3 THEN $4 ELSE industry END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(brand_id)
        .bind(name)
        .bind(industry_set)
        .bind(industry)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to update brand {brand_id}"))?;

        if row.is_some() {
            info!("Updated brand {brand_id}");
        }
        Ok(row)
    }

    async fn upsert_strategy_section(
        &self,
        brand_id: Uuid,
        section_type: SectionType,
        content: &Value,
        completed: bool,
    ) -> Result<StrategySectionRow> {
        let row = sqlx::query_as::<_, StrategySectionRow>(
            r#"
            INSERT INTO strategy_sections (id, brand_id, section_type, content, completed)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (brand_id, section_type) DO UPDATE SET
                content = EXCLUDED.content,
                completed = EXCLUDED.completed,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(brand_id)
        .bind(section_type.as_str())
        .bind(content)
        .bind(completed)
        .fetch_one(&self.pool)
        .await
        .with_context(|| {
            format!(
                "Failed to save {} section for brand {brand_id}",
                section_type.as_str()
            )
        })?;

        info!(
            "Saved {} section for brand {brand_id} (completed: {completed})",
            section_type.as_str()
        );
        Ok(row)
    }
}
