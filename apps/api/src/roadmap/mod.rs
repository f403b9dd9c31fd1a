// Roadmap generation: validation, prompt building, schema-constrained model call.
// All model calls go through llm_client — no direct provider calls here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod schema;
pub mod validation;
