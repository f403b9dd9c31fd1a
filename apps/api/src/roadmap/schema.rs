//! The fixed JSON schema every generated roadmap is constrained to.

use std::sync::OnceLock;

use serde_json::{json, Value};

static ROADMAP_SCHEMA: OnceLock<Value> = OnceLock::new();

/// Process-wide roadmap schema, built on first use and never mutated.
pub fn roadmap_schema() -> &'static Value {
    ROADMAP_SCHEMA.get_or_init(build_roadmap_schema)
}

fn string_list(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "string" },
        "description": description
    })
}

fn build_roadmap_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "skill": {
                "type": "string",
                "description": "The skill being learned"
            },
            "totalConcepts": {
                "type": "integer",
                "description": "Total number of concepts across all levels"
            },
            "levels": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "level": {
                            "type": "string",
                            "description": "The skill level name (e.g., Novice Level, Beginner Level)"
                        },
                        "description": {
                            "type": "string",
                            "description": "Brief description of what this level covers"
                        },
                        "duration": {
                            "type": "string",
                            "description": "Estimated time to complete this level"
                        },
                        "concepts": string_list("Array of concepts/skills to learn at this level")
                    },
                    "required": ["level", "description", "duration", "concepts"]
                }
            },
            "relatedSkills": {
                "type": "object",
                "properties": {
                    "complementary": string_list("Skills that complement this main skill"),
                    "nextLevel": string_list("Advanced skills to learn after mastering this one"),
                    "specializations": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "role": {
                                    "type": "string",
                                    "description": "Job role or specialization"
                                },
                                "averageSalary": {
                                    "type": "object",
                                    "properties": {
                                        "india": { "type": "string" },
                                        "us": { "type": "string" },
                                        "description": { "type": "string" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        "required": ["skill", "totalConcepts", "levels", "relatedSkills"]
    })
}
