//! Bindings source adapters
//!
//! Implementations of the `BindingsSource` port: process environment,
//! JSON/YAML files, in-memory maps, and a layered combination of these.

mod file;
mod layered;
mod process_env;
mod static_source;

pub use file::{BindingEntry, FileBindings};
pub use layered::LayeredBindings;
pub use process_env::{ProcessEnvBindings, collect_env_bindings};
pub use static_source::StaticBindings;
