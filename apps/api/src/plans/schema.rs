//! JSON schema for a generated learning plan.

use std::sync::OnceLock;

use serde_json::{json, Value};

static PLAN_SCHEMA: OnceLock<Value> = OnceLock::new();

pub fn plan_schema() -> &'static Value {
    PLAN_SCHEMA.get_or_init(build_plan_schema)
}

fn task_list(description: &str) -> Value {
    json!({
        "type": "array",
        "description": description,
        "items": {
            "type": "object",
            "properties": {
                "label": { "type": "string" },
                "tasks": { "type": "array", "items": { "type": "string" } },
                "resources": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "type": { "type": "string" },
                            "url": { "type": "string" },
                            "description": { "type": "string" }
                        }
                    }
                },
                "status": { "type": "boolean" }
            },
            "required": ["label", "tasks"]
        }
    })
}

fn build_plan_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "goalTitle": { "type": "string" },
            "totalDays": { "type": "integer" },
            "monthlyTasks": task_list("One entry per month, labelled \"Month N\""),
            "weeklyTasks": task_list("One entry per week, labelled \"Week N\""),
            "dailyTasks": task_list("One entry per day, labelled \"Day N\"")
        },
        "required": ["goalTitle", "totalDays", "monthlyTasks", "weeklyTasks", "dailyTasks"]
    })
}
