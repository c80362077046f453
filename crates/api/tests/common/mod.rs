#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use usher_api::config::{ServeMode, ServerConfig};
use usher_api::router::build_app_router;
use usher_api::state::AppState;
use usher_openai::{CompletionProvider, ProviderError};

/// What the stub provider answers with.
#[derive(Clone)]
pub enum Reply {
    /// Return this text as the completion content.
    Text(String),
    /// Fail with a provider API error.
    Fail { status: u16, message: String },
}

/// In-memory [`CompletionProvider`] that records every call.
pub struct StubProvider {
    reply: Reply,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubProvider {
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Text(text.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16, message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail {
                status,
                message: message.into(),
            },
            calls: Mutex::new(Vec::new()),
        })
    }

    /// `(system_prompt, prompt)` pairs received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete_json(
        &self,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), prompt.to_string()));
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail { status, message } => Err(ProviderError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin and relays front-end requests
/// to a port nothing listens on.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        openai_api_key: "sk-test".to_string(),
        openai_base_url: "http://127.0.0.1:9/v1".to_string(),
        serve_mode: ServeMode::Development {
            upstream: "http://127.0.0.1:9".to_string(),
        },
    }
}

/// Build the full application router around `provider` using
/// [`test_config`].
pub fn build_test_app(provider: Arc<StubProvider>) -> Router {
    build_app_with_config(provider, test_config())
}

/// Build the full application router with an explicit configuration.
pub fn build_app_with_config(provider: Arc<StubProvider>, config: ServerConfig) -> Router {
    let state = AppState::new(config.clone(), provider);
    build_app_router(state, &config)
}

/// Send a GET request through the app.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON content type and a raw body.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

/// Collect a response body into a JSON value.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body into a string.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert the standard `{"error": ...}` body.
pub async fn assert_error(response: Response, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "error": message }));
}
