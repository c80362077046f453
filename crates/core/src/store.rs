//! File-backed project store.
//!
//! Layout under the store root:
//!
//! ```text
//! projects.json             all projects, one JSON array
//! current-project           id of the current project
//! content/<project-id>.json GeneratedContent blob per project
//! ```
//!
//! Writes go straight to the target file. There is no locking and no
//! durability guarantee; a single local user is assumed.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::project::{ContentUpdate, GeneratedContent, NewProject, Project};

pub const PROJECTS_FILE: &str = "projects.json";
pub const CURRENT_PROJECT_FILE: &str = "current-project";
pub const CONTENT_DIR: &str = "content";

#[derive(Debug, Clone)]
pub struct ProjectStore {
    root: PathBuf,
}

impl ProjectStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(root.join(CONTENT_DIR)).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // ---- projects ----

    pub async fn list(&self) -> Result<Vec<Project>, CoreError> {
        match read_optional(&self.root.join(PROJECTS_FILE)).await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Project, CoreError> {
        self.list()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Create a project and make it the current one.
    pub async fn create(&self, input: NewProject) -> Result<Project, CoreError> {
        let project = Project::create(input)?;
        let mut projects = self.list().await?;
        projects.push(project.clone());
        self.write_projects(&projects).await?;
        self.write_current(&project.id).await?;
        tracing::info!(project_id = %project.id, name = %project.name, "Project created");
        Ok(project)
    }

    pub async fn update(&self, id: &str, input: NewProject) -> Result<Project, CoreError> {
        let mut projects = self.list().await?;
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;
        project.apply_update(input)?;
        let updated = project.clone();
        self.write_projects(&projects).await?;
        tracing::info!(project_id = %id, "Project updated");
        Ok(updated)
    }

    /// Remove a project, its generated content, and the current-project
    /// pointer if it referenced this project.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        let mut projects = self.list().await?;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(not_found(id));
        }
        self.write_projects(&projects).await?;

        remove_optional(&self.content_path(id)?).await?;

        if self.current_id().await?.as_deref() == Some(id) {
            remove_optional(&self.root.join(CURRENT_PROJECT_FILE)).await?;
        }
        tracing::info!(project_id = %id, "Project deleted");
        Ok(())
    }

    // ---- current project ----

    /// The current project, or `None` when unset or pointing at a project
    /// that no longer exists.
    pub async fn current(&self) -> Result<Option<Project>, CoreError> {
        let Some(id) = self.current_id().await? else {
            return Ok(None);
        };
        let project = self.list().await?.into_iter().find(|p| p.id == id);
        if project.is_none() {
            tracing::debug!(project_id = %id, "Current project id is dangling");
        }
        Ok(project)
    }

    pub async fn set_current(&self, id: &str) -> Result<(), CoreError> {
        self.get(id).await?;
        self.write_current(id).await
    }

    // ---- generated content ----

    /// Load the cached content for a project. A missing or unreadable blob
    /// yields empty content.
    pub async fn load_content(&self, id: &str) -> Result<GeneratedContent, CoreError> {
        let Some(bytes) = read_optional(&self.content_path(id)?).await? else {
            return Ok(GeneratedContent::default());
        };
        match serde_json::from_slice(&bytes) {
            Ok(content) => Ok(content),
            Err(e) => {
                tracing::warn!(project_id = %id, error = %e, "Discarding unparseable generated content");
                Ok(GeneratedContent::default())
            }
        }
    }

    /// Persist content for a project. Empty content is not written.
    pub async fn save_content(&self, id: &str, content: &GeneratedContent) -> Result<(), CoreError> {
        if content.is_empty() {
            return Ok(());
        }
        let bytes = serde_json::to_vec(content)?;
        tokio::fs::write(self.content_path(id)?, bytes).await?;
        Ok(())
    }

    /// Replace one slot of a project's content and persist the result.
    pub async fn update_content(
        &self,
        id: &str,
        update: ContentUpdate,
    ) -> Result<GeneratedContent, CoreError> {
        let mut content = self.load_content(id).await?;
        content.apply(update);
        self.save_content(id, &content).await?;
        Ok(content)
    }

    // ---- private helpers ----

    async fn write_projects(&self, projects: &[Project]) -> Result<(), CoreError> {
        let bytes = serde_json::to_vec_pretty(projects)?;
        tokio::fs::write(self.root.join(PROJECTS_FILE), bytes).await?;
        Ok(())
    }

    async fn write_current(&self, id: &str) -> Result<(), CoreError> {
        tokio::fs::write(self.root.join(CURRENT_PROJECT_FILE), id).await?;
        Ok(())
    }

    async fn current_id(&self) -> Result<Option<String>, CoreError> {
        Ok(read_optional(&self.root.join(CURRENT_PROJECT_FILE))
            .await?
            .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
            .filter(|id| !id.is_empty()))
    }

    /// Content path for a project id. Ids are used as file names, so only
    /// UUID characters are accepted.
    fn content_path(&self, id: &str) -> Result<PathBuf, CoreError> {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(CoreError::Validation(format!("Invalid project id '{id}'")));
        }
        Ok(self.root.join(CONTENT_DIR).join(format!("{id}.json")))
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "Project",
        id: id.to_string(),
    }
}

async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, CoreError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn remove_optional(path: &Path) -> Result<(), CoreError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
