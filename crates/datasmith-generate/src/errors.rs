use thiserror::Error;

/// Errors emitted by the generation engine.
///
/// Individual generators never fail; these cover request-level preconditions
/// and the export layer.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid schema: {0}")]
    InvalidSchema(#[from] datasmith_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
