//! Handlers for the "Add New Project" view.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use catalog_core::error::CoreError;
use catalog_db::CatalogError;

use crate::error::AppResult;
use crate::query::ProjectForm;
use crate::state::AppState;
use crate::views::add::render_add;
use crate::views::Notice;

/// GET /add
pub async fn show() -> Html<String> {
    Html(render_add("", "", None))
}

/// POST /add
///
/// A blank field shows a warning and keeps what was typed. On success the
/// form is shown again, empty, ready for the next entry.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ProjectForm>,
) -> AppResult<Html<String>> {
    match state.catalog.add(&form.project_name, &form.description).await {
        Ok(project) => {
            let notice = Notice::Success(format!(
                "Project '{}' added successfully!",
                project.project_name
            ));
            Ok(Html(render_add("", "", Some(&notice))))
        }
        Err(CatalogError::Core(CoreError::Validation(msg))) => {
            tracing::debug!(reason = %msg, "Add form rejected");
            let notice = Notice::Warning(msg);
            Ok(Html(render_add(
                &form.project_name,
                &form.description,
                Some(&notice),
            )))
        }
        Err(err) => Err(err.into()),
    }
}
