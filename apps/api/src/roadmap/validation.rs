//! Request validation for roadmap generation. Runs before any provider call.

use crate::errors::{AppError, MISSING_ROADMAP_FIELDS};
use crate::json_value::{is_truthy, text_of};
use crate::roadmap::models::{Approach, RoadmapInput, RoadmapRequest};

/// Rejects the request when `skill` or `approach` is missing or falsy
/// (`null`, `false`, `0`, `""`). Any other value passes, whatever its type,
/// and is handed on exactly as sent.
pub fn validate_request(request: RoadmapRequest) -> Result<RoadmapInput, AppError> {
    match (request.skill, request.approach) {
        (Some(skill), Some(approach)) if is_truthy(&skill) && is_truthy(&approach) => {
            Ok(RoadmapInput {
                skill: text_of(&skill),
                approach: Approach::from_value(&approach),
            })
        }
        _ => Err(AppError::Validation(MISSING_ROADMAP_FIELDS.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn approach() -> Value {
        json!({ "name": "Practical", "description": "hands-on", "roadmapStyle": "project-based" })
    }

    fn request(skill: Option<Value>, approach: Option<Value>) -> RoadmapRequest {
        RoadmapRequest { skill, approach }
    }

    fn assert_missing(result: Result<RoadmapInput, AppError>) {
        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, MISSING_ROADMAP_FIELDS),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request_passes_through_unchanged() {
        let input = validate_request(request(Some(json!(" Python ")), Some(approach()))).unwrap();
        assert_eq!(input.skill, " Python ");
        assert_eq!(input.approach.name, "Practical");
        assert_eq!(input.approach.description, "hands-on");
        assert_eq!(input.approach.roadmap_style, "project-based");
    }

    #[test]
    fn test_missing_skill_is_rejected() {
        assert_missing(validate_request(request(None, Some(approach()))));
    }

    #[test]
    fn test_missing_approach_is_rejected() {
        assert_missing(validate_request(request(Some(json!("Python")), None)));
    }

    #[test]
    fn test_falsy_values_are_rejected() {
        for falsy in [json!(""), json!(false), json!(0), json!(0.0)] {
            assert_missing(validate_request(request(Some(falsy.clone()), Some(approach()))));
            assert_missing(validate_request(request(Some(json!("Python")), Some(falsy))));
        }
    }

    #[test]
    fn test_whitespace_skill_is_accepted() {
        let input = validate_request(request(Some(json!("   ")), Some(approach()))).unwrap();
        assert_eq!(input.skill, "   ");
    }

    #[test]
    fn test_empty_or_unnamed_approach_is_accepted() {
        let input = validate_request(request(Some(json!("Python")), Some(json!({})))).unwrap();
        assert_eq!(input.approach, Approach::default());

        let input = validate_request(request(
            Some(json!("Python")),
            Some(json!({ "description": "hands-on" })),
        ))
        .unwrap();
        assert_eq!(input.approach.name, "");
        assert_eq!(input.approach.description, "hands-on");
    }

    #[test]
    fn test_truthy_values_of_other_types_are_accepted() {
        let input = validate_request(request(Some(json!(42)), Some(json!("Practical")))).unwrap();
        assert_eq!(input.skill, "42");
        assert_eq!(input.approach, Approach::default());

        let input = validate_request(request(Some(json!(["Go"])), Some(json!(true)))).unwrap();
        assert_eq!(input.skill, r#"["Go"]"#);
    }

    #[test]
    fn test_empty_body_is_rejected() {
        assert_missing(validate_request(RoadmapRequest::default()));
    }
}
