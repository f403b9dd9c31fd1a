//! Checks and repairs model-produced plans before they reach the client.

use serde_json::{Map, Value};

use crate::json_value::{is_truthy, text_of};
use crate::plans::duration::PlanTotals;
use crate::plans::models::{LearningPlan, ResourceItem, TaskItem};

const DEFAULT_GOAL_TITLE: &str = "Learning Goal";
const DEFAULT_TOTAL_DAYS: u64 = 30;

pub const RESOURCE_TYPES: &[&str] = &[
    "video",
    "article",
    "book",
    "tool",
    "course",
    "website",
    "tutorial",
    "documentation",
    "general",
];

/// Task list lengths found in a raw plan. A missing or non-list key counts as zero.
pub fn task_counts(plan: &Value) -> (usize, usize, usize) {
    let len = |key: &str| plan.get(key).and_then(Value::as_array).map_or(0, Vec::len);
    (len("dailyTasks"), len("weeklyTasks"), len("monthlyTasks"))
}

/// True when the plan has exactly one task per day, week and month.
pub fn counts_match(plan: &Value, totals: &PlanTotals) -> bool {
    let (days, weeks, months) = task_counts(plan);
    plan.is_object()
        && days as u64 == totals.days
        && weeks as u64 == totals.weeks
        && months as u64 == totals.months
}

/// Fills every missing or malformed field with a default so the plan always
/// deserializes on the client side.
pub fn normalize_plan(plan: &Value) -> LearningPlan {
    LearningPlan {
        goal_title: match plan.get("goalTitle") {
            Some(Value::Null) | None => DEFAULT_GOAL_TITLE.to_string(),
            Some(title) => text_of(title),
        },
        total_days: plan
            .get("totalDays")
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_TOTAL_DAYS),
        monthly_tasks: normalize_tasks(plan.get("monthlyTasks")),
        weekly_tasks: normalize_tasks(plan.get("weeklyTasks")),
        daily_tasks: normalize_tasks(plan.get("dailyTasks")),
    }
}

fn normalize_tasks(tasks: Option<&Value>) -> Vec<TaskItem> {
    let Some(Value::Array(items)) = tasks else {
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(task) => normalize_task(i, task),
            _ => TaskItem::new(format!("Task {}", i + 1), Vec::new()),
        })
        .collect()
}

fn normalize_task(index: usize, task: &Map<String, Value>) -> TaskItem {
    let label = match task.get("label") {
        Some(Value::Null) | None => format!("Task {}", index + 1),
        Some(label) => text_of(label),
    };

    let tasks = match task.get("tasks") {
        Some(Value::Array(items)) => items.iter().map(text_of).collect(),
        Some(single) if is_truthy(single) => vec![text_of(single)],
        _ => Vec::new(),
    };

    let resources = match task.get("resources") {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(j, resource)| normalize_resource(j, resource))
            .collect(),
        _ => Vec::new(),
    };

    TaskItem {
        label,
        tasks,
        resources,
        status: task.get("status").and_then(Value::as_bool).unwrap_or(false),
    }
}

fn normalize_resource(index: usize, resource: &Value) -> ResourceItem {
    let Value::Object(fields) = resource else {
        // A bare string names the resource
        let (title, description) = if is_truthy(resource) {
            (text_of(resource), text_of(resource))
        } else {
            (format!("Resource {}", index + 1), String::new())
        };
        return ResourceItem {
            title,
            kind: "general".to_string(),
            url: String::new(),
            description,
        };
    };

    let text = |key: &str| fields.get(key).filter(|v| !v.is_null()).map(text_of);
    let title = text("title").unwrap_or_else(|| format!("Resource {}", index + 1));
    let kind = text("type")
        .filter(|kind| RESOURCE_TYPES.contains(&kind.as_str()))
        .unwrap_or_else(|| "general".to_string());

    ResourceItem {
        description: text("description").unwrap_or_else(|| title.clone()),
        url: text("url").unwrap_or_default(),
        title,
        kind,
    }
}
