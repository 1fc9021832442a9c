//! Route definitions for the HTML pages.

use axum::response::Redirect;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{add, dashboard};
use crate::state::AppState;

/// Page routes.
///
/// ```text
/// GET    /                          -> redirect to /add
/// GET    /add                       -> add::show
/// POST   /add                       -> add::submit
/// GET    /dashboard?q=&edit=        -> dashboard::show
/// POST   /projects/{id}/update      -> dashboard::update
/// POST   /projects/{id}/delete      -> dashboard::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/add") }))
        .route("/add", get(add::show).post(add::submit))
        .route("/dashboard", get(dashboard::show))
        .route("/projects/{id}/update", post(dashboard::update))
        .route("/projects/{id}/delete", post(dashboard::delete))
}
