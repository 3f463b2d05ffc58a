//! Printable form of a resolving outcome.

use serde::Serialize;
use varpath_domain::{ResolvingOutcome, ResolvingStatus};

/// Process exit status for each outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The path resolved.
    Resolved,
    /// Usage, I/O or parse error.
    Failure,
    /// One or several variables cannot be resolved.
    Unresolved,
    /// The substituted string is not a valid absolute path.
    NotAbsolute,
}

impl Exit {
    /// Numeric exit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Resolved => 0,
            Self::Failure => 1,
            Self::Unresolved => 2,
            Self::NotAbsolute => 3,
        }
    }
}

impl From<ResolvingStatus> for Exit {
    fn from(status: ResolvingStatus) -> Self {
        match status {
            ResolvingStatus::Success => Self::Resolved,
            ResolvingStatus::ErrorUnresolvedVariable => Self::Unresolved,
            ResolvingStatus::ErrorVariableResolvedButCannotConvertToAbsolutePath => {
                Self::NotAbsolute
            }
        }
    }
}

/// JSON report of an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeReport {
    /// `success`, `unresolved_variable` or `not_absolute`.
    pub status: &'static str,
    /// The resolved path on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Missing variable names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
    /// The rejected candidate string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<String>,
    /// The validator's diagnostic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&ResolvingOutcome> for OutcomeReport {
    fn from(outcome: &ResolvingOutcome) -> Self {
        let empty = Self {
            status: "",
            path: None,
            unresolved: Vec::new(),
            candidate: None,
            reason: None,
        };
        match outcome {
            ResolvingOutcome::Success(path) => Self {
                status: "success",
                path: Some(path.to_string()),
                ..empty
            },
            ResolvingOutcome::UnresolvedVariable(names) => Self {
                status: "unresolved_variable",
                unresolved: names.iter().map(ToString::to_string).collect(),
                ..empty
            },
            ResolvingOutcome::CannotConvertToAbsolutePath(failure) => Self {
                status: "not_absolute",
                candidate: Some(failure.candidate.clone()),
                reason: Some(failure.reason.to_string()),
                ..empty
            },
        }
    }
}
