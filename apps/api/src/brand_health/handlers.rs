use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::brand_health::models::BrandHealth;
use crate::errors::AppError;
use crate::models::brand::BrandHealthSnapshotRow;
use crate::state::AppState;

/// GET /api/v1/brands/:id/health
/// Always 200: an unknown brand or a store outage yields the all-zero health.
pub async fn handle_get_health(
    State(state): State<AppState>,
    Path(brand_id): Path<Uuid>,
) -> Json<BrandHealth> {
    Json(state.health.compute_brand_health(brand_id).await)
}

/// POST /api/v1/brands/:id/health
pub async fn handle_record_health(
    State(state): State<AppState>,
    Path(brand_id): Path<Uuid>,
) -> Json<BrandHealth> {
    Json(state.health.compute_and_record(brand_id).await)
}

/// GET /api/v1/brands/:id/health/snapshot
pub async fn handle_get_snapshot(
    State(state): State<AppState>,
    Path(brand_id): Path<Uuid>,
) -> Result<Json<BrandHealthSnapshotRow>, AppError> {
    let snapshot = state
        .health
        .latest_snapshot(brand_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No health snapshot for brand {brand_id}")))?;
    Ok(Json(snapshot))
}
