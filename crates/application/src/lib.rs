//! Varpath Application - Resolver core, ports and use cases
//!
//! This crate holds the variable path resolver, the `$(Name)` parser, the
//! default absolute-path validator, and the ports implemented by the
//! infrastructure layer.

pub mod error;
pub mod ports;
pub mod use_cases;
pub mod variable_resolver;

pub use error::{ApplicationError, ApplicationResult};
pub use use_cases::{ResolvePath, ResolvePathOutput};
pub use variable_resolver::{
    DollarParenParser, RootedPathValidator, VariablePathResolver, parse_expression,
};
