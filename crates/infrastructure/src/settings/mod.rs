//! Resolver settings persistence.
//!
//! Settings are read from an explicit file, or from the platform-specific
//! config directory:
//! - Linux: ~/.config/varpath/settings.json
//! - macOS: ~/Library/Application Support/varpath/settings.json
//! - Windows: %APPDATA%/varpath/settings.json

use std::path::{Path, PathBuf};

use varpath_application::ports::{FileSystem, FileSystemError};
use varpath_domain::ResolverSettings;

use crate::serialization::{DocumentFormat, SerializationError, decode};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// File system error while reading the settings file.
    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// The settings file extension is not a supported format.
    #[error("Unsupported settings format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Repository for resolver settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository<F> {
    fs: F,
}

impl<F: FileSystem> SettingsRepository<F> {
    /// Creates a new settings repository.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Returns the default settings file path, if a config directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("varpath").join("settings.json"))
    }

    /// Loads settings from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or malformed.
    pub async fn load(&self, path: &Path) -> Result<ResolverSettings, SettingsError> {
        let format = DocumentFormat::from_path(path)
            .ok_or_else(|| SettingsError::UnsupportedFormat(path.to_path_buf()))?;
        let content = self.fs.read_file(path).await?;
        let settings = decode(format, &content)?;
        tracing::debug!(path = %path.display(), "loaded resolver settings");
        Ok(settings)
    }

    /// Loads settings from `path` if given, otherwise from the default location.
    ///
    /// Returns default settings when no path is given and the default file
    /// doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or any file is malformed.
    pub async fn load_or_default(
        &self,
        path: Option<&Path>,
    ) -> Result<ResolverSettings, SettingsError> {
        if let Some(path) = path {
            return self.load(path).await;
        }

        let Some(path) = Self::default_path() else {
            return Ok(ResolverSettings::default());
        };

        if !self.fs.exists(&path).await {
            return Ok(ResolverSettings::default());
        }

        self.load(&path).await
    }
}
