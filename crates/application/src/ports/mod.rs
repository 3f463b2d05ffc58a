//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the resolver core and its
//! collaborators. Each port is a trait that can be implemented by adapters
//! in the infrastructure layer, or by fakes in tests.

mod bindings_source;
mod expression_parser;
mod file_system;
mod path_validator;

pub use bindings_source::{BindingsError, BindingsSource};
pub use expression_parser::PathExpressionParser;
pub use file_system::{FileSystem, FileSystemError};
pub use path_validator::AbsolutePathValidator;
