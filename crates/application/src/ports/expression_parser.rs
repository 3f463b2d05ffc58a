//! Path expression parser port

use varpath_domain::{DomainResult, VariablePathExpression};

/// Turns a raw path string into a tokenized expression.
///
/// Implementations either return a well-formed expression or fail before
/// the resolver is ever invoked.
pub trait PathExpressionParser: Send + Sync {
    /// Parses `input` into literal and variable segments.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` describing the first syntax problem found.
    fn parse(&self, input: &str) -> DomainResult<VariablePathExpression>;
}
