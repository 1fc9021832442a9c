//! Page handlers.
//!
//! Handlers call the [`catalog_db::Catalog`] and render a view. Mutating
//! dashboard actions answer with a redirect so the browser's next request
//! rebuilds the dashboard from the database.

pub mod add;
pub mod dashboard;
