//! The catalog service: the four user-facing operations over the gateway.
//!
//! Each call is exactly one round trip. Storage faults are passed through
//! untouched; nothing here retries.

use catalog_core::error::CoreError;
use catalog_core::project::missing_fields;
use catalog_core::search::keyword_pattern;
use catalog_core::types::DbId;
use validator::Validate;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::ProjectRepo;
use crate::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Rejected input; no statement was executed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any database failure: connectivity, TLS, credentials, constraints.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Project catalog backed by a connection pool.
///
/// Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct Catalog {
    pool: DbPool,
}

impl Catalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Add a project. Both fields must be non-blank after trimming; the
    /// values are stored exactly as given.
    pub async fn add(&self, name: &str, description: &str) -> CatalogResult<Project> {
        let input = CreateProject {
            project_name: name.to_string(),
            description: description.to_string(),
        };
        if input.validate().is_err() {
            return Err(missing_fields().into());
        }

        let project = ProjectRepo::create(&self.pool, &input).await?;
        tracing::info!(project_id = project.id, name = %project.project_name, "Project added");
        Ok(project)
    }

    /// List projects newest first. An absent or empty keyword lists
    /// everything; otherwise name or description must contain the keyword,
    /// case-insensitively. `%` and `_` in the keyword act as SQL wildcards.
    pub async fn list(&self, keyword: Option<&str>) -> CatalogResult<Vec<Project>> {
        let pattern = keyword_pattern(keyword);
        let projects = ProjectRepo::list(&self.pool, pattern.as_deref()).await?;
        tracing::debug!(keyword = ?keyword, count = projects.len(), "Projects listed");
        Ok(projects)
    }

    /// Overwrite a project's name and description. A missing `id` is a no-op.
    pub async fn update(&self, id: DbId, name: &str, description: &str) -> CatalogResult<()> {
        let input = UpdateProject {
            project_name: name.to_string(),
            description: description.to_string(),
        };
        if ProjectRepo::update(&self.pool, id, &input).await? {
            tracing::info!(project_id = id, "Project updated");
        } else {
            tracing::debug!(project_id = id, "Update skipped, project not found");
        }
        Ok(())
    }

    /// Delete a project. A missing `id` is a no-op, so repeating it is safe.
    pub async fn delete(&self, id: DbId) -> CatalogResult<()> {
        if ProjectRepo::delete(&self.pool, id).await? {
            tracing::info!(project_id = id, "Project deleted");
        } else {
            tracing::debug!(project_id = id, "Delete skipped, project not found");
        }
        Ok(())
    }
}
