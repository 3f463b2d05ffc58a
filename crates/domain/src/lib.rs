//! Varpath Domain - Core types for variable path resolution
//!
//! This crate defines the values exchanged by the resolver: parsed path
//! expressions, variable bindings, validated absolute paths and the
//! three-way resolving outcome.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod expression;
pub mod outcome;
pub mod path;
pub mod settings;
pub mod variable;

pub use error::{DomainError, DomainResult};
pub use expression::{Segment, VariablePathExpression};
pub use outcome::{
    ConversionFailure, ResolvingFailure, ResolvingOutcome, ResolvingStatus, UnresolvedVariables,
};
pub use path::{AbsolutePath, PathRejection};
pub use settings::ResolverSettings;
pub use variable::{NameMatching, VariableBindings, VariableName, is_valid_variable_name};
