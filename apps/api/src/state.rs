use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Default: `LlmClient` against the hosted API.
    pub generator: Arc<dyn TextGenerator>,
    /// Per-session generation histories, owned here and handed to handlers.
    pub sessions: SessionStore,
}
