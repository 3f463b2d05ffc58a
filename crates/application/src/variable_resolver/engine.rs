//! Variable path resolution engine
//!
//! Substitutes `$(Name)` references from a set of bindings, then hands the
//! result to an absolute-path validator. Resolution is a pure function of
//! its inputs: no I/O, no caching, no interior state.

use varpath_domain::{
    ConversionFailure, DomainResult, ResolvingOutcome, Segment, UnresolvedVariables,
    VariableBindings, VariableName, VariablePathExpression,
};

use super::parser::DollarParenParser;
use super::validator::RootedPathValidator;
use crate::ports::{AbsolutePathValidator, PathExpressionParser};

/// Substitutes every variable in `expression` with its bound value.
///
/// All missing names are collected, not just the first one. A name
/// referenced several times is reported once, compared using the bindings'
/// matching policy.
///
/// # Errors
///
/// Returns the set of names that have no binding.
pub fn substitute(
    expression: &VariablePathExpression,
    bindings: &VariableBindings,
) -> Result<String, UnresolvedVariables> {
    let matching = bindings.matching();
    let mut result = String::new();
    let mut missing: Vec<VariableName> = Vec::new();

    for segment in expression.segments() {
        match segment {
            Segment::Literal(text) => result.push_str(text),
            Segment::Variable(name) => {
                if let Some(value) = bindings.get(name.as_str()) {
                    result.push_str(value);
                } else if !missing
                    .iter()
                    .any(|m| matching.matches(m.as_str(), name.as_str()))
                {
                    missing.push(name.clone());
                }
            }
        }
    }

    UnresolvedVariables::new(missing).map_or(Ok(result), Err)
}

/// Returns the names in `expression` that have no binding.
#[must_use]
pub fn find_unresolved(
    expression: &VariablePathExpression,
    bindings: &VariableBindings,
) -> Vec<VariableName> {
    substitute(expression, bindings)
        .err()
        .map(UnresolvedVariables::into_vec)
        .unwrap_or_default()
}

/// Resolves variable paths into absolute paths.
///
/// The resolver holds only its collaborators, so a single instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct VariablePathResolver<V = RootedPathValidator, P = DollarParenParser> {
    validator: V,
    parser: P,
}

impl VariablePathResolver {
    /// Creates a resolver with the `$(Name)` parser and the rooted-path validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validator: RootedPathValidator::new(),
            parser: DollarParenParser::new(),
        }
    }
}

impl<V> VariablePathResolver<V, DollarParenParser>
where
    V: AbsolutePathValidator,
{
    /// Creates a resolver with a custom validator and the `$(Name)` parser.
    #[must_use]
    pub const fn with_validator(validator: V) -> Self {
        Self {
            validator,
            parser: DollarParenParser::new(),
        }
    }
}

impl<V, P> VariablePathResolver<V, P>
where
    V: AbsolutePathValidator,
    P: PathExpressionParser,
{
    /// Creates a resolver from explicit collaborators.
    #[must_use]
    pub const fn with_parts(validator: V, parser: P) -> Self {
        Self { validator, parser }
    }

    /// Returns the validator.
    #[must_use]
    pub const fn validator(&self) -> &V {
        &self.validator
    }

    /// Returns the parser.
    #[must_use]
    pub const fn parser(&self) -> &P {
        &self.parser
    }

    /// Resolves `expression` against `bindings`.
    ///
    /// Identical inputs always produce identical outcomes.
    pub fn resolve(
        &self,
        expression: &VariablePathExpression,
        bindings: &VariableBindings,
    ) -> ResolvingOutcome {
        let outcome = match substitute(expression, bindings) {
            Err(missing) => ResolvingOutcome::UnresolvedVariable(missing),
            Ok(candidate) => match self.validator.validate(&candidate) {
                Ok(path) => ResolvingOutcome::Success(path),
                Err(reason) => {
                    ResolvingOutcome::CannotConvertToAbsolutePath(ConversionFailure {
                        candidate,
                        reason,
                    })
                }
            },
        };

        tracing::debug!(
            expression = %expression,
            status = ?outcome.status(),
            "resolved variable path"
        );
        outcome
    }

    /// Parses `input` with the configured parser, then resolves it.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if `input` is not a well-formed expression.
    /// Unresolved variables and non-absolute results are reported in the
    /// `Ok` outcome, never as errors.
    pub fn resolve_str(
        &self,
        input: &str,
        bindings: &VariableBindings,
    ) -> DomainResult<ResolvingOutcome> {
        let expression = self.parser.parse(input)?;
        Ok(self.resolve(&expression, bindings))
    }
}
