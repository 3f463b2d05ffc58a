//! Variable names and name matching policy

use std::borrow::Borrow;
use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A validated variable name, as written between `$(` and `)`.
///
/// Valid names start with an ASCII letter or underscore, followed by
/// ASCII letters, digits or underscores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VariableName(String);

impl VariableName {
    /// Creates a variable name, rejecting invalid identifiers.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidVariableName` if `name` is not a valid identifier.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if is_valid_variable_name(&name) {
            Ok(Self(name))
        } else {
            Err(DomainError::InvalidVariableName(name))
        }
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name and returns the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VariableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VariableName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VariableName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for VariableName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VariableName> for String {
    fn from(value: VariableName) -> Self {
        value.0
    }
}

/// Returns true if `name` is a valid variable name.
#[must_use]
pub fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// How variable names are compared when looking up bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMatching {
    /// `$(Dir)` and `$(dir)` are different variables.
    #[default]
    CaseSensitive,
    /// Names are compared with ASCII case folding.
    CaseInsensitive,
}

impl NameMatching {
    /// Returns the lookup key for `name` under this policy.
    #[must_use]
    pub fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            Self::CaseSensitive => Cow::Borrowed(name),
            Self::CaseInsensitive if name.bytes().any(|b| b.is_ascii_uppercase()) => {
                Cow::Owned(name.to_ascii_lowercase())
            }
            Self::CaseInsensitive => Cow::Borrowed(name),
        }
    }

    /// Returns true if both names refer to the same variable under this policy.
    #[must_use]
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            Self::CaseSensitive => a == b,
            Self::CaseInsensitive => a.eq_ignore_ascii_case(b),
        }
    }
}
