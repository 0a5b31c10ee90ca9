//! Error handling for client generation.

use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Fatal generation errors.
///
/// Any variant aborts generation for the whole contract; partial output is
/// never produced. Each class carries a stable diagnostic code, see
/// [`GenerateError::code`].
#[derive(Debug, Error)]
pub enum GenerateError {
    /// An operation lacks the required HTTP method token.
    #[error("operation `{operation}` on contract `{contract}` is missing an HTTP method")]
    MissingMethod { contract: String, operation: String },

    /// A synchronous return shape cannot be adapted while the client is
    /// required to satisfy the original contract type.
    #[error(
        "operation `{operation}` on contract `{contract}` has a synchronous return shape; \
         a client inheriting its contract requires asynchronous operations"
    )]
    ShapeConflict { contract: String, operation: String },

    /// Two operations share a name within one contract.
    #[error("duplicate operation `{operation}` on contract `{contract}`")]
    DuplicateOperation { contract: String, operation: String },

    /// Two parameters share a name within one operation.
    #[error("duplicate parameter `{parameter}` on operation `{operation}` of contract `{contract}`")]
    DuplicateParameter {
        contract: String,
        operation: String,
        parameter: String,
    },

    /// The contract document is not valid JSON.
    #[error("invalid contract document: {0}")]
    Json(#[from] serde_json::Error),

    /// The contract document is not valid YAML.
    #[error("invalid contract document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GenerateError {
    /// Stable diagnostic code for this error class.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingMethod { .. } => "WS0001",
            Self::ShapeConflict { .. } => "WS0002",
            Self::DuplicateOperation { .. } => "WS0003",
            Self::DuplicateParameter { .. } => "WS0004",
            Self::Json(_) => "WS0005",
            Self::Yaml(_) => "WS0006",
        }
    }
}
