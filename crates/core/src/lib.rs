//! Domain vocabulary shared by the storage and presentation crates.
//!
//! Nothing in here touches the database, so the rules for what counts as a
//! valid project and how a search keyword becomes a filter can be tested in
//! isolation.

pub mod error;
pub mod project;
pub mod search;
pub mod types;
