//! One repository per table. Each method is a single parameterized statement.

pub mod project_repo;

pub use project_repo::ProjectRepo;
