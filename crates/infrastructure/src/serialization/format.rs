//! Document format detection.

use std::path::Path;

use serde::de::DeserializeOwned;

use super::json::{SerializationError, from_json_bytes};
use super::yaml::from_yaml_bytes;

/// Supported on-disk document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json` files.
    Json,
    /// `.yaml` / `.yml` files.
    Yaml,
}

impl DocumentFormat {
    /// Detects the format from a file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Deserializes `bytes` in the given format.
///
/// # Errors
///
/// Returns an error if the document is invalid or doesn't match the expected type.
pub fn decode<T: DeserializeOwned>(
    format: DocumentFormat,
    bytes: &[u8],
) -> Result<T, SerializationError> {
    match format {
        DocumentFormat::Json => from_json_bytes(bytes),
        DocumentFormat::Yaml => from_yaml_bytes(bytes),
    }
}
