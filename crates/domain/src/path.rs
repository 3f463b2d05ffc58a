//! Absolute path values and validation diagnostics

use std::fmt;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// A string that an absolute-path validator has accepted.
///
/// Values are only created through [`AbsolutePath::from_validated`], which
/// validators call after their checks pass.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AbsolutePath(String);

impl AbsolutePath {
    /// Wraps a string that has already passed absolute-path validation.
    #[must_use]
    pub fn from_validated(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path as a `std::path::Path`.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Consumes the value and returns the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AbsolutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for AbsolutePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

/// Why a validator refused to treat a string as an absolute path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathRejection {
    /// The candidate string is empty.
    #[error("empty path")]
    Empty,

    /// The candidate is not anchored at a root.
    #[error("not rooted")]
    NotRooted,

    /// The candidate contains a character that is not allowed in a path.
    #[error("contains invalid character {character:?} at offset {offset}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the candidate string.
        offset: usize,
    },

    /// Diagnostic reported by a custom validator.
    #[error("{0}")]
    Other(String),
}
