//! HTTP client for `POST /api/generate/{type}`.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use usher_core::content_type::ContentType;
use usher_core::forms::{
    BlogContentInput, BlogSuggestionsInput, ContentStrategyInput, GooglePostsInput,
    InstagramPostsInput, PromptInput,
};
use usher_core::models::{BlogSuggestion, ContentStrategy, GooglePost, InstagramPost};
use usher_core::prompts::GenerationRequest;

use crate::error::ClientError;

/// Time allowed for a request, from send until the body is fully read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
const ENDPOINT_NOT_FOUND: &str = "Server endpoint not found. Please check your configuration.";

/// Client for the generation proxy. One call per request, no retries.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl GenerationClient {
    /// Create a client for the proxy at `base_url`, e.g.
    /// `http://localhost:5173`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of the generation endpoint for `content_type`.
    pub fn endpoint(&self, content_type: ContentType) -> String {
        format!("{}/api/generate/{}", self.base_url, content_type.slug())
    }

    /// Send a prompt pair and return the decoded JSON reply.
    ///
    /// The whole exchange is cancelled once the timeout elapses.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Value, ClientError> {
        let url = self.endpoint(request.content_type);
        tracing::debug!(%url, content_type = %request.content_type, "Sending generation request");

        match tokio::time::timeout(self.timeout, self.send(&url, request)).await {
            Ok(result) => result.inspect_err(|e| {
                tracing::warn!(%url, error = %e, "Generation request failed");
            }),
            Err(_) => {
                tracing::warn!(%url, timeout = ?self.timeout, "Generation request timed out");
                Err(ClientError::RequestTimeout)
            }
        }
    }

    /// Validate `input`, build its prompt pair and send it.
    pub async fn generate_input<I: PromptInput>(&self, input: &I) -> Result<Value, ClientError> {
        input.validate()?;
        self.generate(&GenerationRequest::from_input(input)).await
    }

    pub async fn generate_blog_suggestions(
        &self,
        input: &BlogSuggestionsInput,
    ) -> Result<Vec<BlogSuggestion>, ClientError> {
        self.generate_typed(input).await
    }

    /// Returns the article body as Markdown.
    pub async fn generate_blog_content(
        &self,
        input: &BlogContentInput,
    ) -> Result<String, ClientError> {
        self.generate_typed(input).await
    }

    pub async fn generate_instagram_posts(
        &self,
        input: &InstagramPostsInput,
    ) -> Result<Vec<InstagramPost>, ClientError> {
        self.generate_typed(input).await
    }

    pub async fn generate_content_strategy(
        &self,
        input: &ContentStrategyInput,
    ) -> Result<ContentStrategy, ClientError> {
        self.generate_typed(input).await
    }

    pub async fn generate_google_posts(
        &self,
        input: &GooglePostsInput,
    ) -> Result<Vec<GooglePost>, ClientError> {
        self.generate_typed(input).await
    }

    // ---- private helpers ----

    async fn send(&self, url: &str, request: &GenerationRequest) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(http_error(status, &body));
        }
        decode_body(&body)
    }

    /// Generate and pull the content type's response key out of the reply.
    async fn generate_typed<I, T>(&self, input: &I) -> Result<T, ClientError>
    where
        I: PromptInput,
        T: DeserializeOwned,
    {
        let value = self.generate_input(input).await?;
        extract(value, I::CONTENT_TYPE.response_key())
    }
}

/// Map a non-2xx response to [`ClientError::Http`].
fn http_error(status: StatusCode, body: &str) -> ClientError {
    let message = match serde_json::from_str::<Value>(body) {
        Ok(json) => json
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or(UNEXPECTED_ERROR)
            .to_string(),
        Err(_) if status == StatusCode::NOT_FOUND => ENDPOINT_NOT_FOUND.to_string(),
        Err(_) => format!(
            "Network error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        )
        .trim_end()
        .to_string(),
    };
    ClientError::Http {
        status: status.as_u16(),
        message,
    }
}

/// Parse a 2xx body. A JSON string is decoded a second time, since some
/// providers wrap the object in a string.
fn decode_body(body: &str) -> Result<Value, ClientError> {
    let value: Value =
        serde_json::from_str(body).map_err(|_| ClientError::InvalidResponseFormat)?;
    match value {
        Value::String(inner) => {
            serde_json::from_str(&inner).map_err(|_| ClientError::InvalidResponseFormat)
        }
        other => Ok(other),
    }
}

fn extract<T: DeserializeOwned>(mut value: Value, key: &str) -> Result<T, ClientError> {
    let field = value
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| ClientError::UnexpectedShape(format!("missing '{key}'")))?;
    serde_json::from_value(field).map_err(|e| ClientError::UnexpectedShape(format!("'{key}': {e}")))
}
