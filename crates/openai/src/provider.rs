use async_trait::async_trait;

/// Model used for every generation request.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-0125";

/// Sampling temperature used for every generation request.
pub const TEMPERATURE: f32 = 0.7;

/// Errors from a completion provider. The `Display` text is what callers of
/// the proxy endpoint see.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (network, DNS, TLS, body decode).
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("{status} {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Provider error message, or the raw body when it had none.
        message: String,
    },

    /// The provider answered 2xx without any message content.
    #[error("Provider returned an empty completion")]
    EmptyResponse,
}

/// Something that can answer a system/user prompt pair in JSON mode.
///
/// Implementations must be stateless per call so one instance can serve
/// concurrent requests.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Request a JSON-mode chat completion and return the raw assistant text.
    ///
    /// The text is not parsed here; deciding whether it is valid JSON is the
    /// caller's job.
    async fn complete_json(&self, system_prompt: &str, prompt: &str)
        -> Result<String, ProviderError>;
}
