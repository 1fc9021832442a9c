use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use catalog_core::error::CoreError;
use catalog_db::CatalogError;

use crate::views::{escape_html, layout, Notice, View};

/// Application-level error type for HTTP handlers.
///
/// Storage faults are not recovered: the interaction ends with an error page
/// and nothing partial is committed, so the next load shows the state from
/// before the action.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure from the catalog service.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Catalog(CatalogError::Core(CoreError::Validation(msg))) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Catalog(CatalogError::Storage(err)) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The project database could not be reached. Nothing was changed.".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = format!(
            "<h2>{} {}</h2>{}<p><a href=\"/dashboard\">Back to the dashboard</a></p>",
            status.as_u16(),
            escape_html(status.canonical_reason().unwrap_or("Error")),
            Notice::Warning(message).render(),
        );

        (status, Html(layout(View::Dashboard, &body))).into_response()
    }
}
