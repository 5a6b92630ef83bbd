// Resume analysis: skill extraction, relevance scoring and feedback.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod services;
pub mod skill_gap;
pub mod workflow;

#[cfg(test)]
pub mod testing;
