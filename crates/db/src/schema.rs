//! Schema bootstrap for the `projects` table.

use crate::DbPool;

/// Create-if-absent DDL for the catalog's single table. An existing table is
/// left untouched; schema changes need manual intervention.
pub const CREATE_PROJECTS_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS projects ( \
        id SERIAL PRIMARY KEY, \
        project_name TEXT NOT NULL, \
        description TEXT NOT NULL, \
        date_added TIMESTAMP DEFAULT CURRENT_TIMESTAMP \
    )";

/// Ensure the `projects` table exists. Safe to call on every start.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PROJECTS_TABLE).execute(pool).await?;
    tracing::debug!(table = "projects", "Schema ensured");
    Ok(())
}
