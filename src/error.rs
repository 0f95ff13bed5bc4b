//! Error types for Manifold
//!
//! Uses `thiserror` for library errors. Store operations are total and never
//! return these; validation failures are raised at the input-surface boundary
//! before an event reaches the store.

use thiserror::Error;

/// Result type alias for Manifold operations
pub type ManifoldResult<T> = Result<T, ManifoldError>;

/// Main error type for Manifold operations
#[derive(Error, Debug)]
pub enum ManifoldError {
    /// A form field failed boundary validation
    #[error("invalid value for '{field}': {message}")]
    Validation { field: String, message: String },

    /// An equipment id is already present in the inventory
    #[error("equipment id '{id}' already exists in the bill of quantities")]
    DuplicateEquipmentId { id: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl ManifoldError {
    /// Shorthand for a validation failure on a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
