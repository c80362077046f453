#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use usher_api::config::{ServeMode, ServerConfig};
use usher_api::router::build_app_router;
use usher_api::state::AppState;
use usher_core::forms::{BlogContentInput, BlogSuggestionsInput, GooglePostType, GooglePostsInput};
use usher_openai::{CompletionProvider, ProviderError};

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Provider that answers every call with fixed text and records the prompts.
pub struct FixedProvider {
    reply: String,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl FixedProvider {
    pub fn new(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl CompletionProvider for FixedProvider {
    async fn complete_json(
        &self,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), prompt.to_string()));
        Ok(self.reply.clone())
    }
}

/// Start the real proxy around `provider` and return its base URL.
pub async fn spawn_proxy(provider: Arc<FixedProvider>) -> String {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: Vec::new(),
        request_timeout_secs: 30,
        openai_api_key: "sk-test".to_string(),
        openai_base_url: "http://127.0.0.1:9/v1".to_string(),
        serve_mode: ServeMode::Development {
            upstream: "http://127.0.0.1:9".to_string(),
        },
    };
    let state = AppState::new(config.clone(), provider);
    spawn(build_app_router(state, &config)).await
}

pub fn suggestions_input() -> BlogSuggestionsInput {
    BlogSuggestionsInput {
        business_name: "Sunrise Wellness".into(),
        industry: "Health & Wellness".into(),
        location: "Austin, TX".into(),
        content_goal: "Drive clinic bookings".into(),
        suggestion_count: 3,
    }
}

pub fn blog_content_input() -> BlogContentInput {
    BlogContentInput {
        business_name: "Sunrise Wellness".into(),
        brief: "Why sleep matters for recovery".into(),
        length: 800,
        tone: "Friendly".into(),
    }
}

pub fn google_posts_input() -> GooglePostsInput {
    GooglePostsInput {
        business_name: "Sunrise Wellness".into(),
        industry: "Health & Wellness".into(),
        location: "Austin, TX".into(),
        post_type: GooglePostType::Event,
        topic: "Spring open house".into(),
        tone: "Friendly".into(),
        call_to_action: "Get directions".into(),
        post_count: 1,
    }
}
