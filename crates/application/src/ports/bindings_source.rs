//! Variable bindings source port
//!
//! Defines where name → value bindings come from (environment, files, ...).

use std::path::PathBuf;

use async_trait::async_trait;
use varpath_domain::{DomainError, VariableBindings};

/// Errors that can occur while loading bindings.
#[derive(Debug, thiserror::Error)]
pub enum BindingsError {
    /// The bindings file does not exist.
    #[error("Bindings file not found: {0}")]
    NotFound(PathBuf),

    /// The bindings file extension is not a supported format.
    #[error("Unsupported bindings format: {0}")]
    UnsupportedFormat(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A binding has an invalid name.
    #[error("Invalid binding: {0}")]
    Invalid(#[from] DomainError),
}

/// A provider of variable bindings.
#[async_trait]
pub trait BindingsSource: Send + Sync {
    /// Loads the bindings offered by this source.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read or parsed.
    async fn load(&self) -> Result<VariableBindings, BindingsError>;

    /// Short human-readable description used in log events.
    fn describe(&self) -> String;
}

#[async_trait]
impl<S: BindingsSource + ?Sized> BindingsSource for Box<S> {
    async fn load(&self) -> Result<VariableBindings, BindingsError> {
        (**self).load().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
