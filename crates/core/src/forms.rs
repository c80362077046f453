//! Typed generation inputs.
//!
//! Each input combines the fields a user fills in for one content type with
//! the business fields taken from the current [`Project`]. Validation only
//! checks presence (non-blank text, counts of at least one); everything else
//! is left to the model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content_type::ContentType;
use crate::error::CoreError;
use crate::project::Project;
use crate::prompts;

/// A form input that can be turned into a user prompt for one content type.
pub trait PromptInput {
    /// The content type this input generates.
    const CONTENT_TYPE: ContentType;

    /// Presence checks for required fields.
    fn validate(&self) -> Result<(), CoreError>;

    /// Natural-language instruction sent as the user message.
    fn user_prompt(&self) -> String;
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn require_count(field: &str, value: u32) -> Result<(), CoreError> {
    if value == 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be at least 1"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Enumerated form fields
// ---------------------------------------------------------------------------

/// Social platform a content strategy targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Linkedin,
    Facebook,
    Twitter,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
        })
    }
}

/// Kind of Google Business Profile post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GooglePostType {
    Update,
    Event,
    Offer,
    Product,
}

impl fmt::Display for GooglePostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Update => "update",
            Self::Event => "event",
            Self::Offer => "offer",
            Self::Product => "product",
        })
    }
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSuggestionsInput {
    pub business_name: String,
    pub industry: String,
    pub location: String,
    pub content_goal: String,
    pub suggestion_count: u32,
}

impl BlogSuggestionsInput {
    pub fn for_project(project: &Project, content_goal: impl Into<String>, suggestion_count: u32) -> Self {
        Self {
            business_name: project.name.clone(),
            industry: project.industry.clone(),
            location: project.location.clone(),
            content_goal: content_goal.into(),
            suggestion_count,
        }
    }
}

impl PromptInput for BlogSuggestionsInput {
    const CONTENT_TYPE: ContentType = ContentType::BlogSuggestions;

    fn validate(&self) -> Result<(), CoreError> {
        require_text("Business name", &self.business_name)?;
        require_text("Industry", &self.industry)?;
        require_text("Location", &self.location)?;
        require_text("Content goal", &self.content_goal)?;
        require_count("Suggestion count", self.suggestion_count)
    }

    fn user_prompt(&self) -> String {
        prompts::blog_suggestions(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogContentInput {
    pub business_name: String,
    pub brief: String,
    /// Target length in words.
    pub length: u32,
    pub tone: String,
}

impl BlogContentInput {
    pub fn for_project(
        project: &Project,
        brief: impl Into<String>,
        length: u32,
        tone: impl Into<String>,
    ) -> Self {
        Self {
            business_name: project.name.clone(),
            brief: brief.into(),
            length,
            tone: tone.into(),
        }
    }
}

impl PromptInput for BlogContentInput {
    const CONTENT_TYPE: ContentType = ContentType::BlogContent;

    fn validate(&self) -> Result<(), CoreError> {
        require_text("Business name", &self.business_name)?;
        require_text("Brief", &self.brief)?;
        require_text("Tone", &self.tone)?;
        require_count("Length", self.length)
    }

    fn user_prompt(&self) -> String {
        prompts::blog_content(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramPostsInput {
    pub business_name: String,
    pub industry: String,
    pub topic: String,
    pub tone: String,
    pub call_to_action: String,
    pub post_count: u32,
}

impl PromptInput for InstagramPostsInput {
    const CONTENT_TYPE: ContentType = ContentType::InstagramPosts;

    fn validate(&self) -> Result<(), CoreError> {
        require_text("Business name", &self.business_name)?;
        require_text("Industry", &self.industry)?;
        require_text("Topic", &self.topic)?;
        require_text("Tone", &self.tone)?;
        require_text("Call to action", &self.call_to_action)?;
        require_count("Post count", self.post_count)
    }

    fn user_prompt(&self) -> String {
        prompts::instagram_posts(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStrategyInput {
    pub business_name: String,
    pub industry: String,
    pub platform: Platform,
    pub content_goal: String,
    pub content_count: u32,
    pub target_audience: String,
    pub content_types: Vec<String>,
    pub posting_frequency: String,
}

impl PromptInput for ContentStrategyInput {
    const CONTENT_TYPE: ContentType = ContentType::ContentStrategy;

    fn validate(&self) -> Result<(), CoreError> {
        require_text("Business name", &self.business_name)?;
        require_text("Industry", &self.industry)?;
        require_text("Content goal", &self.content_goal)?;
        require_text("Target audience", &self.target_audience)?;
        require_text("Posting frequency", &self.posting_frequency)?;
        require_count("Content count", self.content_count)?;
        if self.content_types.iter().all(|t| t.trim().is_empty()) {
            return Err(CoreError::Validation(
                "At least one content type is required".to_string(),
            ));
        }
        Ok(())
    }

    fn user_prompt(&self) -> String {
        prompts::content_strategy(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePostsInput {
    pub business_name: String,
    pub industry: String,
    pub location: String,
    pub post_type: GooglePostType,
    pub topic: String,
    pub tone: String,
    pub call_to_action: String,
    pub post_count: u32,
}

impl PromptInput for GooglePostsInput {
    const CONTENT_TYPE: ContentType = ContentType::GooglePosts;

    fn validate(&self) -> Result<(), CoreError> {
        require_text("Business name", &self.business_name)?;
        require_text("Industry", &self.industry)?;
        require_text("Location", &self.location)?;
        require_text("Topic", &self.topic)?;
        require_text("Tone", &self.tone)?;
        require_text("Call to action", &self.call_to_action)?;
        require_count("Post count", self.post_count)
    }

    fn user_prompt(&self) -> String {
        prompts::google_posts(self)
    }
}
