use crate::config::Config;
use crate::llm_client::GuidanceClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: GuidanceClient,
    pub config: Config,
}
