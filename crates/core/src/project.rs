//! Project entity and the per-project cache of generated content.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::{BlogSuggestion, ContentStrategy, GooglePost, InstagramPost};
use crate::types::{ProjectId, Timestamp};

/// A business the user generates content for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub industry: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Editable project fields, used for both create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub industry: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub services: Vec<String>,
}

impl NewProject {
    /// All four text fields are required.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("Project name", &self.name),
            ("Industry", &self.industry),
            ("Location", &self.location),
            ("Description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{field} is required")));
            }
        }
        Ok(())
    }

    fn normalized_services(&self) -> Vec<String> {
        self.services
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Project {
    /// Build a new project with a fresh UUID and both timestamps set to now.
    pub fn create(input: NewProject) -> Result<Self, CoreError> {
        input.validate()?;
        let now = chrono::Utc::now();
        let services = input.normalized_services();
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name,
            industry: input.industry,
            location: input.location,
            description: input.description,
            services,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the editable fields and bump `updated_at`.
    pub fn apply_update(&mut self, input: NewProject) -> Result<(), CoreError> {
        input.validate()?;
        self.services = input.normalized_services();
        self.name = input.name;
        self.industry = input.industry;
        self.location = input.location;
        self.description = input.description;
        self.updated_at = chrono::Utc::now();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Generated content cache
// ---------------------------------------------------------------------------

/// Last generated result per content type for one project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_suggestions: Option<Vec<BlogSuggestion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_posts: Option<Vec<InstagramPost>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_strategy: Option<ContentStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_posts: Option<Vec<GooglePost>>,
}

/// A single replacement of one slot in [`GeneratedContent`].
#[derive(Debug, Clone, PartialEq)]
pub enum ContentUpdate {
    BlogSuggestions(Vec<BlogSuggestion>),
    BlogContent(String),
    InstagramPosts(Vec<InstagramPost>),
    ContentStrategy(ContentStrategy),
    GooglePosts(Vec<GooglePost>),
}

impl GeneratedContent {
    pub fn is_empty(&self) -> bool {
        self.blog_suggestions.is_none()
            && self.blog_content.is_none()
            && self.instagram_posts.is_none()
            && self.content_strategy.is_none()
            && self.google_posts.is_none()
    }

    pub fn apply(&mut self, update: ContentUpdate) {
        match update {
            ContentUpdate::BlogSuggestions(v) => self.blog_suggestions = Some(v),
            ContentUpdate::BlogContent(v) => self.blog_content = Some(v),
            ContentUpdate::InstagramPosts(v) => self.instagram_posts = Some(v),
            ContentUpdate::ContentStrategy(v) => self.content_strategy = Some(v),
            ContentUpdate::GooglePosts(v) => self.google_posts = Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn input() -> NewProject {
        NewProject {
            name: "Bean There".into(),
            industry: "Coffee".into(),
            location: "Portland".into(),
            description: "Neighbourhood roastery".into(),
            services: vec![" Espresso ".into(), "".into(), "Catering".into()],
        }
    }

    #[test]
    fn create_assigns_id_and_matching_timestamps() {
        let project = Project::create(input()).unwrap();

        assert_eq!(project.id.len(), 36);
        assert_eq!(project.created_at, project.updated_at);
        assert_eq!(project.services, vec!["Espresso", "Catering"]);
    }

    #[test]
    fn create_rejects_missing_location() {
        let mut bad = input();
        bad.location = String::new();

        assert_matches!(
            Project::create(bad),
            Err(CoreError::Validation(msg)) if msg == "Location is required"
        );
    }

    #[test]
    fn update_keeps_identity_and_bumps_updated_at() {
        let mut project = Project::create(input()).unwrap();
        let id = project.id.clone();
        let created = project.created_at;

        let mut edit = input();
        edit.name = "Bean Here".into();
        project.apply_update(edit).unwrap();

        assert_eq!(project.id, id);
        assert_eq!(project.created_at, created);
        assert_eq!(project.name, "Bean Here");
        assert!(project.updated_at >= created);
    }

    #[test]
    fn project_serializes_camel_case() {
        let project = Project::create(input()).unwrap();
        let json = serde_json::to_value(&project).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn content_apply_fills_one_slot() {
        let mut content = GeneratedContent::default();
        assert!(content.is_empty());

        content.apply(ContentUpdate::BlogContent("# Hi".into()));

        assert!(!content.is_empty());
        assert_eq!(content.blog_content.as_deref(), Some("# Hi"));
        assert!(content.google_posts.is_none());
    }
}
