//! Variable names and bindings

mod bindings;
mod name;

pub use bindings::VariableBindings;
pub use name::{NameMatching, VariableName, is_valid_variable_name};
