use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable chat model. Default: `LlmClient` against Groq.
    pub llm: Arc<dyn ChatModel>,
    pub config: Config,
}
