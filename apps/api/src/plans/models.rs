use serde::{Deserialize, Serialize};

/// Raw request body for `POST /plan/generation`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanInput {
    pub goal: String,
    pub duration: String,
}

/// One study resource attached to a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub description: String,
}

/// One checklist entry: "Day 3", "Week 1", "Month 2", ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub label: String,
    pub tasks: Vec<String>,
    #[serde(default)]
    pub resources: Vec<ResourceItem>,
    #[serde(default)]
    pub status: bool,
}

impl TaskItem {
    pub fn new(label: impl Into<String>, tasks: Vec<String>) -> Self {
        Self {
            label: label.into(),
            tasks,
            resources: Vec::new(),
            status: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub goal_title: String,
    pub total_days: u64,
    pub monthly_tasks: Vec<TaskItem>,
    pub weekly_tasks: Vec<TaskItem>,
    pub daily_tasks: Vec<TaskItem>,
}
