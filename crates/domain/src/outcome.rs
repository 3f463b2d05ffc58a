//! Outcome of resolving a variable path
//!
//! Resolution never fails with a panic or an `Err` for expected conditions.
//! Instead it reports one of three [`ResolvingOutcome`] variants, each
//! carrying only its own payload.

use std::fmt;

use thiserror::Error;

use crate::path::{AbsolutePath, PathRejection};
use crate::variable::VariableName;

/// Payload-free classification of a [`ResolvingOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvingStatus {
    /// All variables have been resolved, and the resulting path is a valid absolute path.
    Success,
    /// One or several variables cannot be resolved.
    ErrorUnresolvedVariable,
    /// All variables have been resolved but the resulting path is not a valid absolute path.
    ErrorVariableResolvedButCannotConvertToAbsolutePath,
}

impl ResolvingStatus {
    /// Returns true for [`ResolvingStatus::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// The non-empty set of variable names that had no binding.
///
/// Names are distinct and kept in the order they first appear in the expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnresolvedVariables(Vec<VariableName>);

impl UnresolvedVariables {
    /// Wraps a list of missing names. Returns `None` if the list is empty.
    #[must_use]
    pub fn new(names: Vec<VariableName>) -> Option<Self> {
        if names.is_empty() { None } else { Some(Self(names)) }
    }

    /// Returns the missing names.
    #[must_use]
    pub fn names(&self) -> &[VariableName] {
        &self.0
    }

    /// Returns true if `name` is among the missing names (exact comparison).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n.as_str() == name)
    }

    /// Iterates over the missing names.
    pub fn iter(&self) -> std::slice::Iter<'_, VariableName> {
        self.0.iter()
    }

    /// Consumes the set and returns the names.
    #[must_use]
    pub fn into_vec(self) -> Vec<VariableName> {
        self.0
    }
}

impl<'a> IntoIterator for &'a UnresolvedVariables {
    type Item = &'a VariableName;
    type IntoIter = std::slice::Iter<'a, VariableName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for UnresolvedVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "$({name})")?;
        }
        Ok(())
    }
}

/// The substituted string and the validator's reason for rejecting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionFailure {
    /// The string produced by substituting every variable.
    pub candidate: String,
    /// The validator's diagnostic, unchanged.
    pub reason: PathRejection,
}

impl fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the resulting path {:?} is not a valid absolute path: {}",
            self.candidate, self.reason
        )
    }
}

/// Result of resolving a variable path against a set of bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvingOutcome {
    /// Every variable was bound and the result is a valid absolute path.
    Success(AbsolutePath),
    /// At least one referenced variable has no binding.
    UnresolvedVariable(UnresolvedVariables),
    /// Every variable was bound but the validator rejected the result.
    CannotConvertToAbsolutePath(ConversionFailure),
}

impl ResolvingOutcome {
    /// Returns the payload-free status of this outcome.
    #[must_use]
    pub const fn status(&self) -> ResolvingStatus {
        match self {
            Self::Success(_) => ResolvingStatus::Success,
            Self::UnresolvedVariable(_) => ResolvingStatus::ErrorUnresolvedVariable,
            Self::CannotConvertToAbsolutePath(_) => {
                ResolvingStatus::ErrorVariableResolvedButCannotConvertToAbsolutePath
            }
        }
    }

    /// Returns true if this outcome is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the resolved path if this outcome is a success.
    #[must_use]
    pub const fn absolute_path(&self) -> Option<&AbsolutePath> {
        match self {
            Self::Success(path) => Some(path),
            _ => None,
        }
    }

    /// Returns the missing names if this outcome reports unresolved variables.
    #[must_use]
    pub const fn unresolved(&self) -> Option<&UnresolvedVariables> {
        match self {
            Self::UnresolvedVariable(names) => Some(names),
            _ => None,
        }
    }

    /// Converts the outcome into a `Result` so callers can use `?`.
    ///
    /// # Errors
    ///
    /// Returns the matching [`ResolvingFailure`] for both error outcomes.
    pub fn into_result(self) -> Result<AbsolutePath, ResolvingFailure> {
        match self {
            Self::Success(path) => Ok(path),
            Self::UnresolvedVariable(names) => Err(ResolvingFailure::UnresolvedVariable(names)),
            Self::CannotConvertToAbsolutePath(failure) => {
                Err(ResolvingFailure::CannotConvertToAbsolutePath(failure))
            }
        }
    }

    /// Returns a human-readable description of a failed outcome.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        self.clone().into_result().err().map(|failure| failure.to_string())
    }
}

/// Error form of the two failed outcomes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolvingFailure {
    /// At least one referenced variable has no binding.
    #[error("the following variable(s) cannot be resolved: {0}")]
    UnresolvedVariable(UnresolvedVariables),

    /// Every variable was bound but the validator rejected the result.
    #[error("all variables have been resolved, but {0}")]
    CannotConvertToAbsolutePath(ConversionFailure),
}

impl ResolvingFailure {
    /// Returns the status this failure corresponds to.
    #[must_use]
    pub const fn status(&self) -> ResolvingStatus {
        match self {
            Self::UnresolvedVariable(_) => ResolvingStatus::ErrorUnresolvedVariable,
            Self::CannotConvertToAbsolutePath(_) => {
                ResolvingStatus::ErrorVariableResolvedButCannotConvertToAbsolutePath
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(list: &[&str]) -> UnresolvedVariables {
        UnresolvedVariables::new(
            list.iter()
                .map(|n| VariableName::new(*n).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_unresolved_variables_requires_names() {
        assert!(UnresolvedVariables::new(Vec::new()).is_none());
    }

    #[test]
    fn test_unresolved_variables_display() {
        assert_eq!(names(&["B", "C"]).to_string(), "$(B), $(C)");
    }

    #[test]
    fn test_status_matches_variant() {
        let success = ResolvingOutcome::Success(AbsolutePath::from_validated("/a"));
        let unresolved = ResolvingOutcome::UnresolvedVariable(names(&["x"]));
        let not_absolute = ResolvingOutcome::CannotConvertToAbsolutePath(ConversionFailure {
            candidate: "a/b".to_string(),
            reason: PathRejection::NotRooted,
        });

        assert_eq!(success.status(), ResolvingStatus::Success);
        assert_eq!(
            unresolved.status(),
            ResolvingStatus::ErrorUnresolvedVariable
        );
        assert_eq!(
            not_absolute.status(),
            ResolvingStatus::ErrorVariableResolvedButCannotConvertToAbsolutePath
        );
        assert!(success.status().is_success());
        assert!(!unresolved.status().is_success());
    }

    #[test]
    fn test_accessors() {
        let success = ResolvingOutcome::Success(AbsolutePath::from_validated("/a"));
        assert_eq!(success.absolute_path().unwrap().as_str(), "/a");
        assert!(success.unresolved().is_none());
        assert!(success.failure_message().is_none());

        let unresolved = ResolvingOutcome::UnresolvedVariable(names(&["x", "y"]));
        assert!(unresolved.absolute_path().is_none());
        assert!(unresolved.unresolved().unwrap().contains("y"));
    }

    #[test]
    fn test_failure_messages() {
        let unresolved = ResolvingOutcome::UnresolvedVariable(names(&["Out", "Cfg"]));
        assert_eq!(
            unresolved.failure_message().unwrap(),
            "the following variable(s) cannot be resolved: $(Out), $(Cfg)"
        );

        let not_absolute = ResolvingOutcome::CannotConvertToAbsolutePath(ConversionFailure {
            candidate: "relative/path".to_string(),
            reason: PathRejection::NotRooted,
        });
        assert_eq!(
            not_absolute.failure_message().unwrap(),
            "all variables have been resolved, but the resulting path \"relative/path\" is not a valid absolute path: not rooted"
        );
    }

    #[test]
    fn test_into_result() {
        let success = ResolvingOutcome::Success(AbsolutePath::from_validated("/a"));
        assert_eq!(success.into_result().unwrap().as_str(), "/a");

        let failure = ResolvingOutcome::UnresolvedVariable(names(&["x"]))
            .into_result()
            .unwrap_err();
        assert_eq!(failure.status(), ResolvingStatus::ErrorUnresolvedVariable);
    }
}
