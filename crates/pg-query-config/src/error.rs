//! Error types for pg-query-config

use thiserror::Error;

/// Result type alias for composition operations
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Error types for query-config composition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// An identifier could not be quoted
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A literal could not be quoted
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),

    /// A placeholder references a value that does not exist
    #[error("Placeholder ${index} out of range (values: {values})")]
    PlaceholderOutOfRange { index: usize, values: usize },
}

impl ComposeError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    /// Create an invalid literal error
    pub fn invalid_literal(message: impl Into<String>) -> Self {
        Self::InvalidLiteral(message.into())
    }

    /// Check if this error came from one of the escaping primitives
    pub fn is_escape_error(&self) -> bool {
        matches!(self, Self::InvalidIdentifier(_) | Self::InvalidLiteral(_))
    }

    /// Check if this is a placeholder range error
    pub fn is_placeholder_out_of_range(&self) -> bool {
        matches!(self, Self::PlaceholderOutOfRange { .. })
    }
}
