use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json_value::text_of;

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

/// Raw request body for `POST /roadmap/generation`.
/// Fields stay untyped so the validator decides what counts as present;
/// `null` and a missing key both land as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub skill: Option<Value>,
    #[serde(default)]
    pub approach: Option<Value>,
}

/// The learning approach picked in the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approach {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub roadmap_style: String,
}

impl Approach {
    /// Reads whatever the client sent as `approach`. Only object fields are
    /// picked up; anything that is not an object yields empty fields.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).map(text_of).unwrap_or_default();
        Self {
            name: field("name"),
            description: field("description"),
            roadmap_style: field("roadmapStyle"),
        }
    }
}

/// A request that passed validation. Lives for one HTTP call.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapInput {
    pub skill: String,
    pub approach: Approach,
}

// ────────────────────────────────────────────────────────────────────────────
// Roadmap shape (mirrors the response schema)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Roadmap {
    pub skill: String,
    pub total_concepts: u32,
    pub levels: Vec<Level>,
    pub related_skills: RelatedSkills,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Level {
    pub level: String,
    pub description: String,
    pub duration: String,
    pub concepts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RelatedSkills {
    pub complementary: Vec<String>,
    pub next_level: Vec<String>,
    pub specializations: Vec<Specialization>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Specialization {
    pub role: String,
    pub average_salary: AverageSalary,
}

/// Free-text salary ranges, e.g. "₹4-25 LPA" and "$85,000".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AverageSalary {
    pub india: String,
    pub us: String,
    pub description: String,
}

impl Roadmap {
    /// Number of concepts actually listed across all levels.
    pub fn listed_concepts(&self) -> usize {
        self.levels.iter().map(|l| l.concepts.len()).sum()
    }
}
