//! Serialization helpers for bindings files, settings and reports.
//!
//! JSON output is deterministic:
//! - Sorting object keys alphabetically (via `BTreeMap` in source types)
//! - Using 2-space indentation
//! - Adding trailing newline

mod format;
mod json;
mod yaml;

pub use format::{DocumentFormat, decode};
pub use json::*;
pub use yaml::from_yaml_bytes;
