use thiserror::Error;

/// Error type for the fallible edges of the DSL (encoding, raw query input)
///
/// Building and rendering queries never fails; only turning a rendered tree
/// into bytes, or accepting caller-supplied JSON, can.
#[derive(Error, Debug)]
pub enum DslError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Result type alias for DSL operations
pub type Result<T> = std::result::Result<T, DslError>;
