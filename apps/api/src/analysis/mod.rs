// CV Analysis: sanitize → three concurrent section analyses → score → persist latest.
// All model calls go through llm_client::TextGenerator; nothing here talks HTTP to the model.

pub mod catalog;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod prompts;
pub mod retry;
pub mod sanitize;
pub mod scoring;
pub mod store;

#[cfg(test)]
pub mod test_support;
