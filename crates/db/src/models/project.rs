//! Project entity model and DTOs.

use catalog_core::project::validate_not_blank;
use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub project_name: String,
    pub description: String,
    pub date_added: Timestamp,
}

/// DTO for creating a new project. Both fields must be non-blank.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(custom(function = "validate_not_blank"))]
    pub project_name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,
}

/// DTO for overwriting an existing project's editable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub project_name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, description: &str) -> CreateProject {
        CreateProject {
            project_name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn filled_fields_validate() {
        assert!(input("Chatbot", "Built with Python").validate().is_ok());
    }

    #[test]
    fn blank_fields_fail_per_field() {
        let errors = input("", "  ").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("project_name"));
        assert!(fields.contains_key("description"));
    }
}
