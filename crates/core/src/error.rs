/// Domain-level failures that callers are expected to handle locally.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}
