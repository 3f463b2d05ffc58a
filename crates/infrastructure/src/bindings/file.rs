//! File-based bindings source.
//!
//! A bindings file is a JSON or YAML map from variable name to value:
//!
//! ```text
//! {
//!   "SolutionDir": "/work/sln",
//!   "OutDir": { "value": "/work/out", "enabled": false }
//! }
//! ```
//!
//! Disabled entries are ignored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use varpath_application::ports::{BindingsError, BindingsSource, FileSystem, FileSystemError};
use varpath_domain::{VariableBindings, VariableName};

use crate::serialization::{DocumentFormat, decode};

/// One value in a bindings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BindingEntry {
    /// Shorthand: the value itself.
    Value(String),
    /// Full form with an enabled flag.
    Detailed {
        /// The replacement value.
        value: String,
        /// Whether this binding is offered to the resolver.
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
}

const fn default_enabled() -> bool {
    true
}

impl BindingEntry {
    /// Returns the value if the entry is enabled.
    #[must_use]
    pub fn enabled_value(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            Self::Detailed { value, enabled } => enabled.then_some(value.as_str()),
        }
    }
}

/// Loads bindings from a JSON or YAML file.
#[derive(Debug, Clone)]
pub struct FileBindings<F> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> FileBindings<F> {
    /// Creates a source reading `path` through `fs`.
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    /// Returns the bindings file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn to_bindings_error(e: FileSystemError) -> BindingsError {
    match e {
        FileSystemError::NotFound(path) => BindingsError::NotFound(path),
        FileSystemError::PermissionDenied(path) => BindingsError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            path.display().to_string(),
        )),
        FileSystemError::Io(io_err) => BindingsError::Io(io_err),
    }
}

#[async_trait]
impl<F: FileSystem> BindingsSource for FileBindings<F> {
    async fn load(&self) -> Result<VariableBindings, BindingsError> {
        let format = DocumentFormat::from_path(&self.path)
            .ok_or_else(|| BindingsError::UnsupportedFormat(self.path.clone()))?;

        let content = self
            .fs
            .read_file(&self.path)
            .await
            .map_err(to_bindings_error)?;

        let entries: BTreeMap<String, BindingEntry> = decode(format, &content)
            .map_err(|e| BindingsError::Serialization(format!("{}: {e}", self.path.display())))?;

        let mut bindings = VariableBindings::new();
        for (name, entry) in entries {
            let name = VariableName::new(name)?;
            match entry.enabled_value() {
                Some(value) => {
                    bindings.insert(name, value);
                }
                None => tracing::debug!(name = %name, "skipping disabled binding"),
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            count = bindings.len(),
            "loaded bindings file"
        );
        Ok(bindings)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
