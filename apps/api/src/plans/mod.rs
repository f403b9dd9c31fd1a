// Learning plans: a day/week/month task breakdown for a goal and a duration.
// Model calls go through llm_client; when the model cannot deliver the exact
// task counts, a deterministic plan is built locally instead.

pub mod duration;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
pub mod schema;
pub mod subject;
pub mod validation;
