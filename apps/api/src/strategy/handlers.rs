use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::brand::{SectionType, StrategySectionRow};
use crate::state::AppState;
use crate::strategy::archetype::{classify_archetypes, ArchetypeMatch};
use crate::strategy::values::extract_values;
use crate::strategy::KEYWORD_TABLE_VERSION;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub archetypes: Vec<ArchetypeMatch>,
    pub values: Vec<String>,
    pub table_version: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpsertSectionRequest {
    pub content: Value,
    #[serde(default)]
    pub completed: bool,
}

/// POST /api/v1/strategy/classify
pub async fn handle_classify(
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("text must not be empty".to_string()));
    }
    Ok(Json(ClassifyResponse {
        archetypes: classify_archetypes(&req.text),
        values: extract_values(&req.text),
        table_version: KEYWORD_TABLE_VERSION,
    }))
}

/// PUT /api/v1/brands/:id/strategy/:section
pub async fn handle_upsert_section(
    State(state): State<AppState>,
    Path((brand_id, section)): Path<(Uuid, String)>,
    Json(req): Json<UpsertSectionRequest>,
) -> Result<Json<StrategySectionRow>, AppError> {
    let section_type = SectionType::parse(&section)
        .ok_or_else(|| AppError::Validation(format!("Unknown strategy section '{section}'")))?;
    if !req.content.is_object() {
        return Err(AppError::Validation(
            "content must be a JSON object".to_string(),
        ));
    }

    state
        .store
        .fetch_brand(brand_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Brand {brand_id} not found")))?;

    let row = state
        .store
        .upsert_strategy_section(brand_id, section_type, &req.content, req.completed)
        .await?;
    Ok(Json(row))
}
