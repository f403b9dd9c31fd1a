//! Roadmap Generation — the request pipeline behind `POST /roadmap/generation`.
//!
//! Flow: validate → format prompt → schema-constrained model call → relay.
//! Nothing is retried or persisted. A failure at any step fails the request.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::StructuredModel;
use crate::roadmap::models::{Roadmap, RoadmapRequest};
use crate::roadmap::prompts::format_roadmap_prompt;
use crate::roadmap::schema::roadmap_schema;
use crate::roadmap::validation::validate_request;

/// Runs the full pipeline and returns the model's roadmap object untouched.
pub async fn generate_roadmap(
    model: &dyn StructuredModel,
    request: RoadmapRequest,
) -> Result<Value, AppError> {
    let input = validate_request(request)?;

    let prompt = format_roadmap_prompt(&input);
    info!(
        "Generating roadmap for skill '{}' ({} approach) with {}",
        input.skill,
        input.approach.name,
        model.model_name()
    );
    debug!("Roadmap prompt is {} bytes", prompt.len());

    let roadmap = model
        .generate_structured(&prompt, roadmap_schema())
        .await
        .map_err(|e| AppError::from_model_failure(&e))?;

    log_roadmap_shape(&input.skill, &roadmap);
    Ok(roadmap)
}

/// Logs a short summary. Shape mismatches are reported but never change the response.
fn log_roadmap_shape(skill: &str, roadmap: &Value) {
    match Roadmap::deserialize(roadmap) {
        Ok(parsed) => info!(
            "Roadmap for '{}' generated: {} levels, {} concepts listed ({} claimed)",
            skill,
            parsed.levels.len(),
            parsed.listed_concepts(),
            parsed.total_concepts
        ),
        Err(e) => warn!("Roadmap for '{skill}' does not match the typed shape: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every prompt it receives and answers with a canned result.
    struct RecordingModel {
        prompts: Mutex<Vec<String>>,
        answer: fn() -> Result<Value, LlmError>,
    }

    impl RecordingModel {
        fn new(answer: fn() -> Result<Value, LlmError>) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                answer,
            }
        }
    }

    #[async_trait]
    impl StructuredModel for RecordingModel {
        fn model_name(&self) -> &str {
            "recording"
        }

        async fn generate_structured(
            &self,
            prompt: &str,
            schema: &Value,
        ) -> Result<Value, LlmError> {
            assert!(std::ptr::eq(schema, roadmap_schema()));
            self.prompts.lock().unwrap().push(prompt.to_string());
            (self.answer)()
        }
    }

    fn python_request() -> RoadmapRequest {
        RoadmapRequest {
            skill: Some(json!("Python")),
            approach: Some(json!({
                "name": "Practical",
                "description": "hands-on",
                "roadmapStyle": "project-based"
            })),
        }
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_model() {
        let model = RecordingModel::new(|| Ok(json!({})));
        let err = generate_roadmap(&model, RoadmapRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(model.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_model_output_is_returned_unmodified() {
        // Deliberately off-shape: the pipeline relays, it does not re-validate
        let model = RecordingModel::new(|| Ok(json!({ "skill": "Python", "surprise": [1, 2] })));
        let roadmap = generate_roadmap(&model, python_request()).await.unwrap();
        assert_eq!(roadmap, json!({ "skill": "Python", "surprise": [1, 2] }));

        let prompts = model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("\"Python\""));
        assert!(prompts[0].contains("\"Practical\""));
    }

    #[tokio::test]
    async fn test_structured_output_failure_is_schema_conformance() {
        let model = RecordingModel::new(|| {
            Err(LlmError::StructuredOutput("response is not valid JSON".to_string()))
        });
        let err = generate_roadmap(&model, python_request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SchemaConformance(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_generic_invocation_failure() {
        let model = RecordingModel::new(|| Err(LlmError::Timeout(120)));
        let err = generate_roadmap(&model, python_request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Invocation(_)));
    }
}
