//! Repository for the `projects` table.

use catalog_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::DbPool;

/// Column list for projects queries.
const COLUMNS: &str = "id, project_name, description, date_added";

/// Newest first. `id` breaks ties between rows inserted in the same instant.
const ORDER_NEWEST_FIRST: &str = "ORDER BY date_added DESC, id DESC";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row. `date_added` is
    /// assigned by the database.
    pub async fn create(pool: &DbPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (project_name, description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.project_name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List projects newest first, optionally filtered by an `ILIKE` pattern
    /// matched against the name or the description.
    pub async fn list(pool: &DbPool, pattern: Option<&str>) -> Result<Vec<Project>, sqlx::Error> {
        match pattern {
            Some(pattern) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM projects \
                     WHERE project_name ILIKE $1 OR description ILIKE $1 \
                     {ORDER_NEWEST_FIRST}"
                );
                sqlx::query_as::<_, Project>(&query)
                    .bind(pattern)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM projects {ORDER_NEWEST_FIRST}");
                sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
            }
        }
    }

    /// Overwrite name and description. `date_added` is never touched.
    /// Returns `true` if a row was updated.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET project_name = $1, description = $2 WHERE id = $3",
        )
        .bind(&input.project_name)
        .bind(&input.description)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a project by its ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
