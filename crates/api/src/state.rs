use std::sync::Arc;

use usher_openai::CompletionProvider;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Chat-completion provider shared by every generation request.
    pub provider: Arc<dyn CompletionProvider>,
    /// HTTP client used to forward requests to the front-end dev server.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServerConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
            http: reqwest::Client::new(),
        }
    }
}
