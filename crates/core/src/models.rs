//! Response models matching the JSON contracts in [`crate::prompts`].
//!
//! Field names follow the prompt contracts (camelCase on the wire). Only the
//! request client deserializes into these; the proxy passes JSON through
//! untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

/// Reading level the prompt asks for. Anything else the model sends is kept
/// verbatim in [`Difficulty::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "beginner")]
    Beginner,
    #[serde(alias = "intermediate")]
    Intermediate,
    #[serde(alias = "advanced")]
    Advanced,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => f.write_str("Beginner"),
            Difficulty::Intermediate => f.write_str("Intermediate"),
            Difficulty::Advanced => f.write_str("Advanced"),
            Difficulty::Other(text) => f.write_str(text),
        }
    }
}

/// Estimated reading time. Models usually send minutes as a number but
/// sometimes a phrase such as `"5 min"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadTime {
    Minutes(f64),
    Text(String),
}

impl fmt::Display for ReadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadTime::Minutes(minutes) => write!(f, "{minutes} min"),
            ReadTime::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogSuggestion {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_read_time: Option<ReadTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

/// A generated article; `content` is Markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogContent {
    pub content: String,
}

// ---------------------------------------------------------------------------
// Instagram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstagramPost {
    pub caption: String,
    pub hashtags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Content strategy
// ---------------------------------------------------------------------------

// Every section defaults so a partial strategy still renders.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentStrategy {
    pub overview: String,
    pub target_audience: TargetAudience,
    pub content_plan: ContentPlan,
    pub posting_schedule: PostingSchedule,
    pub engagement: Engagement,
    pub metrics: Metrics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TargetAudience {
    pub demographics: String,
    pub interests: Vec<String>,
    pub pain_points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentPlan {
    pub types: Vec<String>,
    pub topics: Vec<String>,
    pub best_practices: Vec<String>,
    pub content_briefs: Vec<ContentBrief>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentBrief {
    pub topic: String,
    pub target_keywords: Vec<String>,
    pub outline: Vec<String>,
    pub key_points: Vec<String>,
    pub target_audience: String,
    pub tone: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostingSchedule {
    pub frequency: String,
    pub best_times: Vec<String>,
    pub consistency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Engagement {
    pub tactics: Vec<String>,
    pub responses: Vec<String>,
    pub monitoring: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub kpis: Vec<String>,
    pub tools: Vec<String>,
    pub goals: Vec<String>,
}

// ---------------------------------------------------------------------------
// Google Business Profile
// ---------------------------------------------------------------------------

/// Button types a Google Business Profile post may carry. Unlisted values
/// are kept in [`CallToActionType::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallToActionType {
    #[default]
    LearnMore,
    Book,
    Order,
    Buy,
    SignUp,
    Call,
    Visit,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    #[serde(rename = "type")]
    pub kind: CallToActionType,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventDetails {
    pub start_date: String,
    pub end_date: String,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OfferDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GooglePost {
    pub title: String,
    pub content: String,
    pub call_to_action: CallToAction,
    /// Present only for event posts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_details: Option<EventDetails>,
    /// Present only for offer posts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_details: Option<OfferDetails>,
}
