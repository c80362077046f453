use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use usher_openai::ProviderError;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{"error": <message>}`; the `Display` text is the
/// message the caller sees.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `systemPrompt` or `prompt` was missing, empty, or the body was not a
    /// JSON object carrying them.
    #[error("Missing required parameters")]
    MissingParameters,

    /// The provider answered with text that is not valid JSON.
    #[error("Invalid response format")]
    InvalidResponseFormat,

    /// The provider call itself failed. Its message is passed through.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The front-end dev server could not be reached.
    #[error("Development server unavailable: {0}")]
    DevProxy(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameters => StatusCode::BAD_REQUEST,
            AppError::InvalidResponseFormat | AppError::Provider(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::DevProxy(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        }

        let body = json!({
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
