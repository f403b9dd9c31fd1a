//! Learning Plans — the pipeline behind `POST /plan/generation`.
//!
//! Flow: validate → parse duration → up to three model attempts → normalize.
//! An attempt only counts when it has exactly one task per day, week and month.
//! When every attempt fails the plan is built locally, so a valid request
//! always gets a plan.

use tracing::{info, warn};

use crate::errors::{AppError, PLAN_TOO_LONG};
use crate::llm_client::StructuredModel;
use crate::plans::duration::parse_duration;
use crate::plans::fallback::fallback_plan;
use crate::plans::models::{LearningPlan, PlanRequest};
use crate::plans::normalize::{counts_match, normalize_plan, task_counts};
use crate::plans::prompts::format_plan_prompt;
use crate::plans::schema::plan_schema;
use crate::plans::validation::validate_plan_request;

pub const MAX_ATTEMPTS: usize = 3;

/// Five years of daily tasks.
pub const MAX_PLAN_DAYS: u64 = 5 * 365;

pub async fn generate_plan(
    model: &dyn StructuredModel,
    request: PlanRequest,
) -> Result<LearningPlan, AppError> {
    let input = validate_plan_request(request)?;

    let totals = parse_duration(&input.duration).totals();
    if totals.days > MAX_PLAN_DAYS {
        return Err(AppError::Validation(PLAN_TOO_LONG.to_string()));
    }
    info!(
        "Generating plan for '{}' over '{}': {} days, {} weeks, {} months",
        input.goal, input.duration, totals.days, totals.weeks, totals.months
    );

    let prompt = format_plan_prompt(&input, &totals);

    for attempt in 1..=MAX_ATTEMPTS {
        match model.generate_structured(&prompt, plan_schema()).await {
            Ok(plan) if counts_match(&plan, &totals) => {
                info!("Plan attempt {attempt} accepted");
                return Ok(normalize_plan(&plan));
            }
            Ok(plan) => {
                let (days, weeks, months) = task_counts(&plan);
                warn!(
                    "Plan attempt {attempt} has {days} daily, {weeks} weekly, {months} monthly tasks; \
                     expected {}, {}, {}",
                    totals.days, totals.weeks, totals.months
                );
            }
            Err(e) => warn!("Plan attempt {attempt} failed: {e}"),
        }
    }

    warn!("All {MAX_ATTEMPTS} plan attempts failed; building the plan locally");
    Ok(fallback_plan(&input.goal, &totals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{EMPTY_PLAN_DURATION, EMPTY_PLAN_GOAL};
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Answers each call with the next scripted result; errors once the script runs out.
    struct ScriptedModel {
        answers: Mutex<VecDeque<Result<Value, LlmError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn new(answers: Vec<Result<Value, LlmError>>) -> Self {
            Self {
                answers: Mutex::new(answers.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl StructuredModel for ScriptedModel {
        fn model_name(&self) -> &str {
            "scripted"
        }

        async fn generate_structured(
            &self,
            prompt: &str,
            schema: &Value,
        ) -> Result<Value, LlmError> {
            assert!(std::ptr::eq(schema, plan_schema()));
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }

    fn plan_with(days: usize, weeks: usize, months: usize) -> Value {
        let tasks = |prefix: &str, n: usize| -> Vec<Value> {
            (1..=n)
                .map(|i| json!({ "label": format!("{prefix} {i}"), "tasks": ["Practice"] }))
                .collect()
        };
        json!({
            "goalTitle": "Learn Rust",
            "totalDays": days,
            "dailyTasks": tasks("Day", days),
            "weeklyTasks": tasks("Week", weeks),
            "monthlyTasks": tasks("Month", months)
        })
    }

    fn request(goal: &str, duration: &str) -> PlanRequest {
        PlanRequest {
            goal: Some(goal.to_string()),
            duration: Some(duration.to_string()),
        }
    }

    #[tokio::test]
    async fn test_first_matching_plan_is_normalized_and_returned() {
        let model = ScriptedModel::new(vec![Ok(plan_with(14, 2, 0))]);
        let plan = generate_plan(&model, request("Learn Rust", "2 weeks"))
            .await
            .unwrap();

        assert_eq!(model.calls(), 1);
        assert_eq!(plan.goal_title, "Learn Rust");
        assert_eq!(plan.daily_tasks.len(), 14);
        assert_eq!(plan.daily_tasks[0].label, "Day 1");
        assert!(plan.daily_tasks[0].resources.is_empty());
        assert!(model.prompts.lock().unwrap()[0]
            .contains("Create EXACTLY 14 daily tasks, 2 weekly tasks, and 0 monthly tasks"));
    }

    #[tokio::test]
    async fn test_wrong_counts_are_retried() {
        let model = ScriptedModel::new(vec![
            Ok(plan_with(13, 2, 0)),
            Err(LlmError::StructuredOutput("not JSON".to_string())),
            Ok(plan_with(14, 2, 0)),
        ]);
        let plan = generate_plan(&model, request("Learn Rust", "2 weeks"))
            .await
            .unwrap();
        assert_eq!(model.calls(), 3);
        assert_eq!(plan.daily_tasks[0].tasks, vec!["Practice"]);
    }

    #[tokio::test]
    async fn test_fallback_after_three_failed_attempts() {
        let model = ScriptedModel::new(vec![
            Ok(plan_with(1, 0, 0)),
            Ok(plan_with(1, 0, 0)),
            Ok(plan_with(1, 0, 0)),
            Ok(plan_with(14, 2, 0)),
        ]);
        let plan = generate_plan(&model, request("Learn pottery", "2 weeks"))
            .await
            .unwrap();

        assert_eq!(model.calls(), MAX_ATTEMPTS);
        assert_eq!(plan, fallback_plan("Learn pottery", &parse_duration("2 weeks").totals()));
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_model() {
        let model = ScriptedModel::new(vec![]);
        for (req, expected) in [
            (request("", "2 weeks"), EMPTY_PLAN_GOAL),
            (request("Learn Rust", " "), EMPTY_PLAN_DURATION),
            (request("Learn Rust", "6 years 9999 months"), PLAN_TOO_LONG),
        ] {
            match generate_plan(&model, req).await {
                Err(AppError::Validation(msg)) => assert_eq!(msg, expected),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
        assert_eq!(model.calls(), 0);
    }
}
