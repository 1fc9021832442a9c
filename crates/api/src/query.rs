//! Query and form payload types shared by the page handlers.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Dashboard query string (`?q=&edit=`).
///
/// `edit` names the one row whose inline edit form is open for this render.
/// It is not stored anywhere, so navigating away discards the open form.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DashboardParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit: Option<DbId>,
}

impl DashboardParams {
    /// The search keyword, with the empty string treated as absent.
    pub fn keyword(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }

    /// Dashboard URL carrying these parameters.
    pub fn to_url(&self) -> Result<String, serde_urlencoded::ser::Error> {
        let query = serde_urlencoded::to_string(self)?;
        if query.is_empty() {
            Ok("/dashboard".to_string())
        } else {
            Ok(format!("/dashboard?{query}"))
        }
    }
}

/// Body of the add form.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub description: String,
}

/// Body of a row's inline edit form. `q` is the search to return to.
#[derive(Debug, Default, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub q: Option<String>,
}

/// Body of a row's delete form. `q` is the search to return to.
#[derive(Debug, Default, Deserialize)]
pub struct ReturnTo {
    #[serde(default)]
    pub q: Option<String>,
}
