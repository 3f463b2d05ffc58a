//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building variable path values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A variable name does not follow the identifier rules.
    #[error("invalid variable name: {0:?}")]
    InvalidVariableName(String),

    /// A path expression has no segments.
    #[error("path expression is empty")]
    EmptyExpression,

    /// A `$(` opener has no matching `)`.
    #[error("unclosed variable reference starting at offset {offset}")]
    UnclosedVariable {
        /// Byte offset of the `$(` opener.
        offset: usize,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
