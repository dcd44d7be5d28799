use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;
use crate::search::SearchProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; nothing in it is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Default: GeminiClient. Stubbed in tests.
    pub llm: Arc<dyn CompletionProvider>,
    /// Default: GoogleSearchClient. Stubbed in tests.
    pub search: Arc<dyn SearchProvider>,
}
