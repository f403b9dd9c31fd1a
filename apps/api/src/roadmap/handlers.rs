//! Axum route handlers for the Roadmap API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::roadmap::generator::generate_roadmap;
use crate::roadmap::models::RoadmapRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub success: bool,
    pub roadmap: Value,
}

/// POST /roadmap/generation
///
/// Generates a structured learning roadmap for a skill and approach.
/// Body rejections (bad JSON, wrong content type) are reported as 400s in the
/// same `{ "error": ... }` shape as every other failure.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    payload: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let roadmap = generate_roadmap(state.model.as_ref(), request).await?;

    Ok(Json(RoadmapResponse {
        success: true,
        roadmap,
    }))
}
