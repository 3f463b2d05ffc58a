//! Absolute path validator port

use varpath_domain::{AbsolutePath, PathRejection};

/// Decides whether a substituted string is a valid absolute path.
pub trait AbsolutePathValidator: Send + Sync {
    /// Validates `candidate`, producing an [`AbsolutePath`] on success.
    ///
    /// # Errors
    ///
    /// Returns the reason the candidate was rejected.
    fn validate(&self, candidate: &str) -> Result<AbsolutePath, PathRejection>;
}

impl<F> AbsolutePathValidator for F
where
    F: Fn(&str) -> Result<AbsolutePath, PathRejection> + Send + Sync,
{
    fn validate(&self, candidate: &str) -> Result<AbsolutePath, PathRejection> {
        self(candidate)
    }
}
