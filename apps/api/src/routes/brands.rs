use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::brand::{BrandRow, BrandUpdate};
use crate::state::AppState;

/// GET /api/v1/brands/:id
pub async fn handle_get_brand(
    State(state): State<AppState>,
    Path(brand_id): Path<Uuid>,
) -> Result<Json<BrandRow>, AppError> {
    let brand = state
        .store
        .fetch_brand(brand_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Brand {brand_id} not found")))?;
    Ok(Json(brand))
}

/// PATCH /api/v1/brands/:id
/// Rename and/or edit the industry. An empty industry clears it.
pub async fn handle_update_brand(
    State(state): State<AppState>,
    Path(brand_id): Path<Uuid>,
    Json(update): Json<BrandUpdate>,
) -> Result<Json<BrandRow>, AppError> {
    if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::Validation(
            "Brand name must not be empty".to_string(),
        ));
    }

    let brand = state
        .store
        .update_brand(brand_id, &update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Brand {brand_id} not found")))?;
    Ok(Json(brand))
}
