use usher_core::error::CoreError;

/// Errors surfaced to callers of [`GenerationClient`](crate::GenerationClient).
///
/// The `Display` text of each variant is written for end users.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No complete response arrived within the client timeout.
    #[error("Request timed out. Please try again.")]
    RequestTimeout,

    /// The server could not be reached at all.
    #[error("Unable to connect to the server. Please check your internet connection and try again.")]
    ConnectionFailure(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A 2xx body that is not JSON, or a JSON string that does not decode.
    #[error("Invalid response format from server")]
    InvalidResponseFormat,

    /// Valid JSON that does not match the content type's response model.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// The input failed its presence checks; nothing was sent.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// Any other transport failure, e.g. the body stream breaking mid-read.
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::RequestTimeout
        } else if err.is_connect() {
            ClientError::ConnectionFailure(err)
        } else {
            ClientError::Transport(err)
        }
    }
}
