//! Variable path resolution module
//!
//! Provides parsing of `$(Name)` syntax and resolution of the parsed
//! expression into an absolute path.
//!
//! # Usage
//!
//! ```
//! use varpath_application::variable_resolver::VariablePathResolver;
//! use varpath_domain::{NameMatching, VariableBindings};
//!
//! let bindings =
//!     VariableBindings::from_pairs(NameMatching::CaseSensitive, [("name", "app")]).unwrap();
//!
//! let resolver = VariablePathResolver::new();
//! let outcome = resolver.resolve_str("/opt/$(name)/bin", &bindings).unwrap();
//!
//! assert_eq!(outcome.absolute_path().unwrap().as_str(), "/opt/app/bin");
//! ```

pub mod engine;
pub mod parser;
pub mod validator;

pub use engine::{VariablePathResolver, find_unresolved, substitute};
pub use parser::{DollarParenParser, extract_variable_names, has_variables, parse_expression};
pub use validator::RootedPathValidator;
