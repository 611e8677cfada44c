use thiserror::Error;

/// Core error type shared across Datasmith crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The field schema violates upstream invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// The JSON Schema used for structural validation could not be compiled.
    #[error("schema error: {0}")]
    Schema(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by Datasmith crates.
pub type Result<T> = std::result::Result<T, Error>;
