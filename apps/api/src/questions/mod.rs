// Interview question generation: prompts, LLM reply extraction, the request
// pipeline, and its HTTP handler. All LLM calls go through llm_client.

pub mod extractor;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
