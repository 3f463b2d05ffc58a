//! Use cases
//!
//! Each use case wires ports together for one caller-facing operation.

mod resolve_path;

pub use resolve_path::{ResolvePath, ResolvePathOutput};
