//! Variable path parser for `$(Name)` syntax
//!
//! Splits a raw path string into literal and variable segments.

use std::mem;

use varpath_domain::{DomainError, DomainResult, Segment, VariableName, VariablePathExpression};

use crate::ports::PathExpressionParser;

/// Parser for paths written with `$(Name)` placeholders.
///
/// - `$(Name)` is a variable reference.
/// - `$$` is a literal `$`.
/// - A `$` not followed by `(` or `$` is kept as a literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DollarParenParser;

impl DollarParenParser {
    /// Creates a new parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PathExpressionParser for DollarParenParser {
    fn parse(&self, input: &str) -> DomainResult<VariablePathExpression> {
        parse_expression(input)
    }
}

/// Parses `input` into a [`VariablePathExpression`].
///
/// # Examples
///
/// ```
/// use varpath_application::variable_resolver::parser::parse_expression;
///
/// let expr = parse_expression("$(SolutionDir)/bin/$(Configuration)").unwrap();
/// assert_eq!(expr.segments().len(), 3);
/// assert_eq!(expr.first_variable_name().unwrap().as_str(), "SolutionDir");
/// ```
///
/// # Errors
///
/// - `DomainError::EmptyExpression` if `input` is empty.
/// - `DomainError::UnclosedVariable` if a `$(` has no closing `)`.
/// - `DomainError::InvalidVariableName` if the text between `$(` and `)` is not a valid name.
pub fn parse_expression(input: &str) -> DomainResult<VariablePathExpression> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = input.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if ch != '$' {
            literal.push(ch);
            continue;
        }

        match chars.peek() {
            Some((_, '$')) => {
                chars.next();
                literal.push('$');
            }
            Some((_, '(')) => {
                chars.next(); // consume (
                let mut name = String::new();
                let mut closed = false;

                for (_, ch) in chars.by_ref() {
                    if ch == ')' {
                        closed = true;
                        break;
                    }
                    name.push(ch);
                }

                if !closed {
                    return Err(DomainError::UnclosedVariable { offset: i });
                }

                let name = VariableName::new(name)?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(mem::take(&mut literal)));
                }
                segments.push(Segment::Variable(name));
            }
            _ => literal.push('$'),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    VariablePathExpression::new(segments)
}

/// Returns true if the input parses and references at least one variable.
#[must_use]
pub fn has_variables(input: &str) -> bool {
    parse_expression(input).is_ok_and(|expr| expr.has_variables())
}

/// Extracts the distinct variable names, in order of first appearance.
///
/// Returns an empty list if the input does not parse.
#[must_use]
pub fn extract_variable_names(input: &str) -> Vec<String> {
    parse_expression(input)
        .map(|expr| {
            expr.variable_names()
                .into_iter()
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}
