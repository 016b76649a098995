//! Error types for model declaration and fill operations
//!
//! Everything here is a configuration or validation failure surfaced to the
//! caller immediately; there are no retry or recovery semantics.

use thiserror::Error;

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Invalid property or model declaration
    #[error("definition error: {0}")]
    Definition(String),

    /// A supplied or generated value does not conform to the declared kind
    #[error("type mismatch for property '{property}': expected {expected}, got {actual}")]
    TypeMismatch {
        property: String,
        expected: String,
        actual: String,
    },

    /// Assignment to a field the model does not declare
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// Persistence collaborator failure
    #[error("datastore error: {0}")]
    Datastore(String),
}
