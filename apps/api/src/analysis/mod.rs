// Candidate analysis: one structured LLM call per screening.
// All LLM calls go through llm_client: no direct HTTP calls here.

pub mod analyzer;
pub mod demo;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod schema;
