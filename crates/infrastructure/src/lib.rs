//! Varpath Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod bindings;
pub mod persistence;
pub mod serialization;
pub mod settings;

pub use bindings::{
    BindingEntry, FileBindings, LayeredBindings, ProcessEnvBindings, StaticBindings,
    collect_env_bindings,
};
pub use persistence::TokioFileSystem;
pub use serialization::{
    DocumentFormat, SerializationError, decode, from_json_bytes, from_yaml_bytes,
    to_json_stable,
};
pub use settings::{SettingsError, SettingsRepository};
