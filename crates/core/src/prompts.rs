//! Prompt templates for every content type.
//!
//! The system prompts are the only place the JSON output contract lives.
//! The proxy endpoint and the request client never look at field names, so
//! changing a contract means editing the matching constant here (and the
//! model in [`crate::models`] the client deserializes into).

use serde::Serialize;

use crate::content_type::ContentType;
use crate::forms::{
    BlogContentInput, BlogSuggestionsInput, ContentStrategyInput, GooglePostsInput,
    InstagramPostsInput, PromptInput,
};

// ---------------------------------------------------------------------------
// System prompts
// ---------------------------------------------------------------------------

pub const BLOG_SUGGESTIONS_SYSTEM: &str = r#"You are an SEO expert and content strategist. Generate blog post suggestions in JSON format that:
- Target specific keywords for SEO optimization
- Address user search intent
- Follow content marketing best practices
- Include local SEO elements when applicable
- Incorporate business name naturally where appropriate
- Keep titles under 50 characters (including spaces)

Return a JSON object in this exact format:
{
  "suggestions": [{
    "title": "SEO-optimized title (max 50 chars)",
    "description": "Brief description",
    "keywords": ["keyword1", "keyword2", "keyword3"],
    "estimatedReadTime": 5,
    "difficulty": "Beginner"
  }]
}"#;

pub const BLOG_CONTENT_SYSTEM: &str = r##"You are a professional blog writer with expertise in SEO and content marketing. Generate a JSON response for blog content that:
- Has engaging, well-structured content
- Naturally incorporates keywords from the brief
- Maintains the specified tone throughout
- Includes proper headings and subheadings (using Markdown)
- Ensures content is SEO-optimized
- Matches the requested word count
- Includes a compelling introduction and conclusion
- Keeps the title under 50 characters (including spaces)

Return a JSON object in this format:
{
  "content": "# Title\n\nContent here..."
}"##;

pub const INSTAGRAM_SYSTEM: &str = r#"You are a social media content expert. Create engaging Instagram posts in JSON format that:
- Have compelling captions that drive engagement
- Include relevant hashtags (max 30)
- Follow Instagram best practices
- Incorporate the business name naturally
- Include clear calls-to-action

Return a JSON object in this exact format:
{
  "posts": [{
    "caption": "Engaging caption with emojis and line breaks",
    "hashtags": ["hashtag1", "hashtag2"]
  }]
}"#;

pub const CONTENT_STRATEGY_SYSTEM: &str = r#"You are a social media strategist. Create a comprehensive content strategy in JSON format that includes:
- Platform-specific best practices
- Content types and themes
- Posting schedule
- Engagement tactics
- Performance metrics
- Content briefs for 7 pieces of content

Return a JSON object in this exact format:
{
  "strategy": {
    "overview": "Strategy summary",
    "targetAudience": {
      "demographics": "Target audience description",
      "interests": ["interest1", "interest2"],
      "painPoints": ["painPoint1", "painPoint2"]
    },
    "contentPlan": {
      "types": ["type1", "type2"],
      "topics": ["topic1", "topic2"],
      "bestPractices": ["practice1", "practice2"],
      "contentBriefs": [{
        "topic": "Content topic",
        "targetKeywords": ["keyword1", "keyword2"],
        "outline": ["section1", "section2"],
        "keyPoints": ["point1", "point2"],
        "targetAudience": "Specific audience",
        "tone": "Content tone",
        "callToAction": "Desired action"
      }]
    },
    "postingSchedule": {
      "frequency": "Posting frequency",
      "bestTimes": ["time1", "time2"],
      "consistency": "Consistency guidelines"
    },
    "engagement": {
      "tactics": ["tactic1", "tactic2"],
      "responses": ["response1", "response2"],
      "monitoring": ["monitor1", "monitor2"]
    },
    "metrics": {
      "kpis": ["kpi1", "kpi2"],
      "tools": ["tool1", "tool2"],
      "goals": ["goal1", "goal2"]
    }
  }
}"#;

pub const GOOGLE_POSTS_SYSTEM: &str = r#"You are a Google Business Profile expert. Create engaging posts in JSON format that:
- Have clear, action-oriented titles (max 100 characters)
- Include compelling descriptions (max 1500 characters)
- Follow Google Business Profile best practices
- Incorporate the business name naturally
- Include relevant call-to-action buttons

Return a JSON object in this exact format:
{
  "posts": [{
    "title": "Attention-grabbing title",
    "content": "Engaging post content",
    "callToAction": {
      "type": "LEARN_MORE|BOOK|ORDER|BUY|SIGN_UP|CALL|VISIT",
      "label": "Button text"
    },
    "eventDetails": {
      "startDate": "YYYY-MM-DD",
      "endDate": "YYYY-MM-DD",
      "time": "HH:MM AM/PM"
    },
    "offerDetails": {
      "couponCode": "Optional coupon code",
      "terms": "Terms and conditions",
      "expiryDate": "YYYY-MM-DD"
    }
  }]
}

Note: Include eventDetails only for event posts and offerDetails only for offer posts."#;

// ---------------------------------------------------------------------------
// User prompts
// ---------------------------------------------------------------------------

fn post_noun(count: u32) -> &'static str {
    if count == 1 {
        "post"
    } else {
        "posts"
    }
}

/// Instruction for `count` blog post ideas.
pub fn blog_suggestions(input: &BlogSuggestionsInput) -> String {
    format!(
        "Generate {count} SEO-optimized blog post ideas for {name}, a {industry} business in {location}.\n\
         Content goal: {goal}\n\
         \n\
         Requirements:\n\
         1. Each title MUST be under 50 characters (including spaces)\n\
         2. Provide a brief description\n\
         3. Include 3-5 target keywords\n\
         4. Estimate reading time in minutes\n\
         5. Specify content difficulty (Beginner/Intermediate/Advanced)\n\
         \n\
         Return the suggestions in JSON format.",
        count = input.suggestion_count,
        name = input.business_name,
        industry = input.industry,
        location = input.location,
        goal = input.content_goal,
    )
}

/// Instruction for a full blog article.
pub fn blog_content(input: &BlogContentInput) -> String {
    format!(
        "Write a blog post with the following specifications:\n\
         \n\
         Topic Brief: {brief}\n\
         Length: Approximately {length} words\n\
         Tone: {tone}\n\
         Business Name: {name}\n\
         \n\
         Requirements:\n\
         - Write a well-structured, engaging blog post\n\
         - Naturally incorporate keywords from the brief\n\
         - Maintain the specified tone throughout\n\
         - Include a compelling title (under 50 characters)\n\
         - Use proper headings and subheadings\n\
         - Return the content in JSON format",
        brief = input.brief,
        length = input.length,
        tone = input.tone,
        name = input.business_name,
    )
}

/// Instruction for `count` Instagram posts.
pub fn instagram_posts(input: &InstagramPostsInput) -> String {
    format!(
        "Create {count} Instagram {noun} for {name}, a {industry} business.\n\
         \n\
         Topic: {topic}\n\
         Tone: {tone}\n\
         Call to Action: {cta}\n\
         \n\
         Requirements:\n\
         1. Write engaging captions with emojis\n\
         2. Include relevant hashtags (max 30)\n\
         3. Follow Instagram best practices\n\
         4. Make content relatable and shareable\n\
         5. Return the content in JSON format",
        count = input.post_count,
        noun = post_noun(input.post_count),
        name = input.business_name,
        industry = input.industry,
        topic = input.topic,
        tone = input.tone,
        cta = input.call_to_action,
    )
}

/// Instruction for a platform content strategy with seven briefs.
pub fn content_strategy(input: &ContentStrategyInput) -> String {
    format!(
        "Create a comprehensive {platform} content strategy for {name}, a {industry} business.\n\
         \n\
         Objective: {goal}\n\
         Target Audience: {audience}\n\
         Content Types: {types}\n\
         Posting Frequency: {frequency}\n\
         \n\
         Requirements:\n\
         1. Create a detailed content strategy\n\
         2. Include 7 content briefs aligned with the strategy\n\
         3. Provide platform-specific best practices\n\
         4. Include engagement tactics and metrics\n\
         5. Focus on achieving the stated objective\n\
         6. Return the strategy in JSON format",
        platform = input.platform,
        name = input.business_name,
        industry = input.industry,
        goal = input.content_goal,
        audience = input.target_audience,
        types = input.content_types.join(", "),
        frequency = input.posting_frequency,
    )
}

/// Instruction for `count` Google Business Profile posts of one post type.
pub fn google_posts(input: &GooglePostsInput) -> String {
    format!(
        "Create {count} Google Business {post_type} {noun} for {name}, a {industry} business in {location}.\n\
         \n\
         Topic: {topic}\n\
         Tone: {tone}\n\
         Call to Action: {cta}\n\
         Post Type: {post_type}\n\
         \n\
         Requirements:\n\
         1. Write engaging titles and descriptions\n\
         2. Include appropriate call-to-action buttons\n\
         3. For events, include realistic future dates and times\n\
         4. For offers, include relevant terms and expiry dates\n\
         5. Keep content concise and action-oriented\n\
         6. Follow Google Business Profile character limits\n\
         7. Return the content in JSON format",
        count = input.post_count,
        post_type = input.post_type,
        noun = post_noun(input.post_count),
        name = input.business_name,
        industry = input.industry,
        location = input.location,
        topic = input.topic,
        tone = input.tone,
        cta = input.call_to_action,
    )
}

// ---------------------------------------------------------------------------
// Request envelope
// ---------------------------------------------------------------------------

/// A system/user prompt pair bound for `POST /api/generate/{type}`.
///
/// Serializes to the wire body `{"systemPrompt": ..., "prompt": ...}`; the
/// content type only selects the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    #[serde(skip)]
    pub content_type: ContentType,
    #[serde(rename = "systemPrompt")]
    pub system_prompt: String,
    #[serde(rename = "prompt")]
    pub user_prompt: String,
}

impl GenerationRequest {
    pub fn new(
        content_type: ContentType,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Self {
        Self {
            content_type,
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
        }
    }

    /// Pair the input's user prompt with its content type's system prompt.
    pub fn from_input<I: PromptInput>(input: &I) -> Self {
        Self::new(
            I::CONTENT_TYPE,
            I::CONTENT_TYPE.system_prompt(),
            input.user_prompt(),
        )
    }
}
