// Prompt template and example payload for roadmap generation.

use serde_json::{json, Value};

use crate::llm_client::prompts::fill_template;
use crate::roadmap::models::RoadmapInput;

/// Roadmap prompt template.
/// Replace: {skill}, {approach_name}, {approach_description}, {roadmap_style}, {schema_example}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are an expert educational content creator specializing in comprehensive learning roadmaps. Create a detailed, structured learning roadmap for the skill "{skill}" using the "{approach_name}" approach.

Learning Approach: {approach_description}
Roadmap Style: {roadmap_style}

Create a comprehensive roadmap that includes:

1. 6 progressive skill levels: Novice, Beginner, Competent, Proficient, Expert, and Guru/Master
2. 8-10 specific, actionable concepts per level
3. Realistic duration estimates for each level
4. Related complementary skills and next-level skills
5. Career specializations with salary ranges for India and US

Focus the content based on the selected learning approach. Ensure concepts progress logically from fundamental to advanced.

Return your response as a valid JSON object that matches this exact structure:
{schema_example}

Important: Return ONLY the JSON object, no additional text or formatting."#;

/// Example roadmap shown to the model. Field names match the roadmap schema exactly.
pub fn schema_example() -> Value {
    json!({
        "skill": "Example Skill",
        "totalConcepts": 52,
        "levels": [
            {
                "level": "Novice Level",
                "description": "Foundation concepts and basics",
                "duration": "6-8 weeks",
                "concepts": ["Concept 1", "Concept 2", "Concept 3"]
            }
        ],
        "relatedSkills": {
            "complementary": ["Skill A", "Skill B"],
            "nextLevel": ["Advanced Skill"],
            "specializations": [
                {
                    "role": "Role Name",
                    "averageSalary": {
                        "india": "₹4-25 LPA",
                        "us": "$85,000",
                        "description": "Role description"
                    }
                }
            ]
        }
    })
}

/// Builds the roadmap prompt for a validated request.
pub fn format_roadmap_prompt(input: &RoadmapInput) -> String {
    // `{:#}` is serde_json's two-space pretty printer
    let example = format!("{:#}", schema_example());
    fill_template(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("skill", input.skill.as_str()),
            ("approach_name", input.approach.name.as_str()),
            ("approach_description", input.approach.description.as_str()),
            ("roadmap_style", input.approach.roadmap_style.as_str()),
            ("schema_example", example.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::models::{Approach, Roadmap};
    use crate::roadmap::schema::roadmap_schema;

    fn python_input() -> RoadmapInput {
        RoadmapInput {
            skill: "Python".to_string(),
            approach: Approach {
                name: "Practical".to_string(),
                description: "hands-on".to_string(),
                roadmap_style: "project-based".to_string(),
            },
        }
    }

    /// Every key in `value` must be a property of `schema`, and every required key present.
    fn assert_conforms(value: &Value, schema: &Value, path: &str) {
        match value {
            Value::Object(map) => {
                let props = schema["properties"]
                    .as_object()
                    .unwrap_or_else(|| panic!("{path} has no properties in schema"));
                for key in map.keys() {
                    assert!(props.contains_key(key), "{path}.{key} not in schema");
                    assert_conforms(&map[key], &props[key], &format!("{path}.{key}"));
                }
                if let Some(required) = schema["required"].as_array() {
                    for key in required {
                        let key = key.as_str().unwrap();
                        assert!(map.contains_key(key), "{path}.{key} is required");
                    }
                }
            }
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    assert_conforms(item, &schema["items"], &format!("{path}[{i}]"));
                }
            }
            Value::String(_) => assert_eq!(schema["type"], "string", "{path}"),
            Value::Number(_) => assert_eq!(schema["type"], "integer", "{path}"),
            other => panic!("{path}: unexpected value {other}"),
        }
    }

    #[test]
    fn test_prompt_contains_skill_and_approach_verbatim() {
        let prompt = format_roadmap_prompt(&python_input());
        assert!(prompt.contains(r#"for the skill "Python" using the "Practical" approach"#));
        assert!(prompt.contains("Learning Approach: hands-on"));
        assert!(prompt.contains("Roadmap Style: project-based"));
        assert!(prompt.ends_with("Return ONLY the JSON object, no additional text or formatting."));
    }

    #[test]
    fn test_prompt_names_all_six_levels() {
        let prompt = format_roadmap_prompt(&python_input());
        assert!(prompt.contains("Novice, Beginner, Competent, Proficient, Expert, and Guru/Master"));
        assert!(prompt.contains("8-10 specific, actionable concepts per level"));
        assert!(prompt.contains("salary ranges for India and US"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            format_roadmap_prompt(&python_input()),
            format_roadmap_prompt(&python_input())
        );
    }

    #[test]
    fn test_embedded_example_is_valid_json_matching_schema() {
        let prompt = format_roadmap_prompt(&python_input());
        let start = prompt.find("exact structure:\n").unwrap() + "exact structure:\n".len();
        let end = prompt.find("\n\nImportant:").unwrap();
        let embedded: Value = serde_json::from_str(&prompt[start..end]).unwrap();

        assert_eq!(embedded, schema_example());
        assert_conforms(&embedded, roadmap_schema(), "$");
        let typed: Roadmap = serde_json::from_value(embedded).unwrap();
        assert_eq!(typed.levels[0].level, "Novice Level");
    }

    #[test]
    fn test_no_placeholders_left_unfilled() {
        let prompt = format_roadmap_prompt(&python_input());
        for name in [
            "{skill}",
            "{approach_name}",
            "{approach_description}",
            "{roadmap_style}",
            "{schema_example}",
        ] {
            assert!(!prompt.contains(name), "{name} left in prompt");
        }
    }

    #[test]
    fn test_user_values_are_not_re_expanded() {
        let mut input = python_input();
        input.skill = "{approach_name}".to_string();
        let prompt = format_roadmap_prompt(&input);
        assert!(prompt.contains(r#"for the skill "{approach_name}" using the "Practical""#));
    }
}
