//! Tokenized variable path expressions
//!
//! A [`VariablePathExpression`] is the parsed form of a string such as
//! `$(SolutionDir)/bin/$(Configuration)`: an ordered list of literal text and
//! variable references.

use std::fmt;

use crate::error::{DomainError, DomainResult};
use crate::variable::VariableName;

/// One piece of a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text copied as-is into the resolved path.
    Literal(String),
    /// A reference to a variable, replaced by its bound value.
    Variable(VariableName),
}

impl Segment {
    /// Creates a literal segment.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Creates a variable segment, validating the name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidVariableName` if `name` is not a valid identifier.
    pub fn variable(name: impl Into<String>) -> DomainResult<Self> {
        VariableName::new(name).map(Self::Variable)
    }

    /// Returns the variable name if this is a variable segment.
    #[must_use]
    pub const fn as_variable(&self) -> Option<&VariableName> {
        match self {
            Self::Variable(name) => Some(name),
            Self::Literal(_) => None,
        }
    }
}

/// An immutable, non-empty sequence of literal and variable segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariablePathExpression {
    segments: Vec<Segment>,
}

impl VariablePathExpression {
    /// Builds an expression from segments.
    ///
    /// Empty literals are dropped and adjacent literals are merged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyExpression` if no segments remain.
    pub fn new(segments: impl IntoIterator<Item = Segment>) -> DomainResult<Self> {
        let mut normalized: Vec<Segment> = Vec::new();
        for segment in segments {
            match segment {
                Segment::Literal(text) if text.is_empty() => {}
                Segment::Literal(text) => {
                    if let Some(Segment::Literal(previous)) = normalized.last_mut() {
                        previous.push_str(&text);
                    } else {
                        normalized.push(Segment::Literal(text));
                    }
                }
                variable @ Segment::Variable(_) => normalized.push(variable),
            }
        }

        if normalized.is_empty() {
            return Err(DomainError::EmptyExpression);
        }
        Ok(Self {
            segments: normalized,
        })
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over every variable reference, including repeats.
    pub fn variable_references(&self) -> impl Iterator<Item = &VariableName> {
        self.segments.iter().filter_map(Segment::as_variable)
    }

    /// Returns the distinct variable names in order of first appearance.
    #[must_use]
    pub fn variable_names(&self) -> Vec<&VariableName> {
        let mut names: Vec<&VariableName> = Vec::new();
        for name in self.variable_references() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Returns the first variable referenced, if any.
    #[must_use]
    pub fn first_variable_name(&self) -> Option<&VariableName> {
        self.variable_references().next()
    }

    /// Returns true if the expression references at least one variable.
    #[must_use]
    pub fn has_variables(&self) -> bool {
        self.first_variable_name().is_some()
    }
}

impl fmt::Display for VariablePathExpression {
    /// Renders the expression in `$(Name)` syntax, escaping `$` in literals as `$$`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(&text.replace('$', "$$"))?,
                Segment::Variable(name) => write!(f, "$({name})")?,
            }
        }
        Ok(())
    }
}
