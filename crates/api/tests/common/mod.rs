#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_db::Catalog;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
    }
}

/// Build the full application router over `pool`, creating the `projects`
/// table first the way the binary does at startup.
pub async fn build_test_app(pool: PgPool) -> Router {
    catalog_db::ensure_schema(&pool).await.unwrap();
    let state = AppState {
        catalog: Catalog::new(pool),
    };
    build_app_router(state, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = serde_urlencoded::to_string(fields).unwrap();
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}
