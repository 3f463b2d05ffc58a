//! Resolver settings
//!
//! Loaded from a JSON settings file; every field has a default so a partial
//! or empty file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::variable::NameMatching;

/// User-configurable resolver settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// How variable names are compared with binding names.
    pub name_matching: NameMatching,

    /// Bindings files loaded in order; later files win.
    pub bindings_files: Vec<PathBuf>,

    /// Whether process environment variables are offered as bindings.
    pub include_environment: bool,

    /// Only environment variables with this prefix are used, prefix stripped.
    pub environment_prefix: Option<String>,
}

impl ResolverSettings {
    /// Creates settings with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name matching policy.
    #[must_use]
    pub const fn with_name_matching(mut self, name_matching: NameMatching) -> Self {
        self.name_matching = name_matching;
        self
    }
}
