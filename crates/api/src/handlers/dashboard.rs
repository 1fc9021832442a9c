//! Handlers for the "Dashboard" view and its per-row actions.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use catalog_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::{DashboardParams, EditForm, ReturnTo};
use crate::state::AppState;
use crate::views::dashboard::DashboardView;

/// GET /dashboard
pub async fn show(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> AppResult<Html<String>> {
    let view = DashboardView::load(&state.catalog, &params).await?;
    Ok(Html(view.render()))
}

/// POST /projects/{id}/update
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<EditForm>,
) -> AppResult<Redirect> {
    state
        .catalog
        .update(id, &form.project_name, &form.description)
        .await?;
    back_to_dashboard(form.q)
}

/// POST /projects/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<ReturnTo>,
) -> AppResult<Redirect> {
    state.catalog.delete(id).await?;
    back_to_dashboard(form.q)
}

/// Redirect (303) to the dashboard with the search restored and no edit
/// form open.
fn back_to_dashboard(q: Option<String>) -> AppResult<Redirect> {
    let params = DashboardParams {
        q: q.filter(|q| !q.is_empty()),
        edit: None,
    };
    let url = params
        .to_url()
        .map_err(|e| AppError::InternalError(format!("Failed to build dashboard URL: {e}")))?;
    Ok(Redirect::to(&url))
}
