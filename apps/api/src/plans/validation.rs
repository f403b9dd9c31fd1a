//! Request validation for learning plans.

use crate::errors::{AppError, EMPTY_PLAN_DURATION, EMPTY_PLAN_GOAL};
use crate::plans::models::{PlanInput, PlanRequest};

pub fn validate_plan_request(request: PlanRequest) -> Result<PlanInput, AppError> {
    let goal = request.goal.unwrap_or_default();
    if goal.trim().is_empty() {
        return Err(AppError::Validation(EMPTY_PLAN_GOAL.to_string()));
    }

    let duration = request.duration.unwrap_or_default();
    if duration.trim().is_empty() {
        return Err(AppError::Validation(EMPTY_PLAN_DURATION.to_string()));
    }

    Ok(PlanInput { goal, duration })
}
