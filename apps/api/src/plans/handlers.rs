//! Axum route handlers for the Learning Plan API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::plans::generator::generate_plan;
use crate::plans::models::{LearningPlan, PlanRequest};
use crate::state::AppState;

/// POST /plan/generation
///
/// Body: `{ "goal": "...", "duration": "3 months" }`. Answers with the plan itself.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<LearningPlan>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let plan = generate_plan(state.model.as_ref(), request).await?;
    Ok(Json(plan))
}
