//! REST client for an OpenAI-compatible chat-completion API.
//!
//! Wraps `POST {api_url}/chat/completions` using [`reqwest`]. The API key is
//! sent as a bearer token and never leaves the server.

use async_trait::async_trait;

use crate::messages::{
    ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat,
    Role,
};
use crate::provider::{CompletionProvider, ProviderError, DEFAULT_MODEL, TEMPERATURE};

/// Base URL of the hosted OpenAI API.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";

/// HTTP client for a chat-completion provider.
pub struct OpenAiApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl OpenAiApi {
    /// Create a client for the hosted OpenAI API.
    pub fn new(api_key: String) -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_API_URL.to_string(), api_key)
    }

    /// Create a client reusing an existing [`reqwest::Client`] against any
    /// OpenAI-compatible base URL, e.g. `http://localhost:8080/v1`.
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send a chat-completion request and decode the response.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<ChatCompletionResponse, ProviderError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<ChatCompletionResponse>().await?)
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into [`ProviderError::Api`], preferring the
    /// provider's own error message over the raw body.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or(body);
        Err(ProviderError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiApi {
    async fn complete_json(
        &self,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: DEFAULT_MODEL,
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: system_prompt,
                },
                ChatMessage {
                    role: Role::User,
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            response_format: ResponseFormat::JSON_OBJECT,
        };

        let response = self.chat_completion(&request).await.map_err(|e| {
            tracing::warn!(error = %e, api_url = %self.api_url, "Chat completion failed");
            e
        })?;

        response
            .into_first_content()
            .ok_or(ProviderError::EmptyResponse)
    }
}
