use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;
use crate::screen::SharedScreen;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Default: `LlmClient`. Tests inject fakes.
    pub llm: Arc<dyn CompletionBackend>,
    /// The dashboard screen; holds at most one in-flight analysis.
    pub screen: SharedScreen,
    pub config: Config,
}
