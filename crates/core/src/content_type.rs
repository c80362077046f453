//! The five kinds of content the assistant can generate.
//!
//! Each [`ContentType`] owns its wire slug (the `{type}` path segment of
//! `POST /api/generate/{type}`), its fixed system prompt, and the top-level
//! key of the JSON object that prompt asks the model to return.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::prompts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    BlogSuggestions,
    BlogContent,
    InstagramPosts,
    ContentStrategy,
    GooglePosts,
}

impl ContentType {
    /// Every content type, in menu order.
    pub const ALL: [ContentType; 5] = [
        ContentType::BlogSuggestions,
        ContentType::BlogContent,
        ContentType::InstagramPosts,
        ContentType::ContentStrategy,
        ContentType::GooglePosts,
    ];

    /// Path segment used on the wire.
    pub fn slug(self) -> &'static str {
        match self {
            Self::BlogSuggestions => "blog-suggestions",
            Self::BlogContent => "blog-content",
            Self::InstagramPosts => "instagram-posts",
            Self::ContentStrategy => "content-strategy",
            Self::GooglePosts => "google-posts",
        }
    }

    /// The fixed system prompt describing this type's JSON output contract.
    pub fn system_prompt(self) -> &'static str {
        match self {
            Self::BlogSuggestions => prompts::BLOG_SUGGESTIONS_SYSTEM,
            Self::BlogContent => prompts::BLOG_CONTENT_SYSTEM,
            Self::InstagramPosts => prompts::INSTAGRAM_SYSTEM,
            Self::ContentStrategy => prompts::CONTENT_STRATEGY_SYSTEM,
            Self::GooglePosts => prompts::GOOGLE_POSTS_SYSTEM,
        }
    }

    /// Top-level key of the object the system prompt asks for.
    pub fn response_key(self) -> &'static str {
        match self {
            Self::BlogSuggestions => "suggestions",
            Self::BlogContent => "content",
            Self::InstagramPosts | Self::GooglePosts => "posts",
            Self::ContentStrategy => "strategy",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ContentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ct| ct.slug() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown content type '{s}'")))
    }
}
