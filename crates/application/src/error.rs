//! Application error types

use thiserror::Error;
use varpath_domain::DomainError;

use crate::ports::BindingsError;

/// Application-level errors.
///
/// Unresolved variables and non-absolute results are not errors: they are
/// reported through `ResolvingOutcome`. These variants cover contract
/// violations and collaborator failures only.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The path expression could not be parsed.
    #[error("invalid path expression: {0}")]
    Domain(#[from] DomainError),

    /// Bindings could not be loaded.
    #[error("bindings error: {0}")]
    Bindings(#[from] BindingsError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
