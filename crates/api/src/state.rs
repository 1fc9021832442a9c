use catalog_db::Catalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the catalog shares its connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Project catalog over the database pool.
    pub catalog: Catalog,
}
