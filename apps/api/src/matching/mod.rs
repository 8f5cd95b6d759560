// Lightweight keyword relevance: picks the resume chunks worth sending to the LLM.
// No embeddings, no model calls. The LLM does the reasoning; this only filters.

pub mod keywords;
pub mod selector;
