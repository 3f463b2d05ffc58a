//! In-memory bindings source.

use async_trait::async_trait;
use varpath_application::ports::{BindingsError, BindingsSource};
use varpath_domain::VariableBindings;

/// A bindings source that always returns the same bindings.
#[derive(Debug, Clone, Default)]
pub struct StaticBindings {
    bindings: VariableBindings,
}

impl StaticBindings {
    /// Wraps existing bindings.
    #[must_use]
    pub const fn new(bindings: VariableBindings) -> Self {
        Self { bindings }
    }
}

impl From<VariableBindings> for StaticBindings {
    fn from(bindings: VariableBindings) -> Self {
        Self::new(bindings)
    }
}

#[async_trait]
impl BindingsSource for StaticBindings {
    async fn load(&self) -> Result<VariableBindings, BindingsError> {
        Ok(self.bindings.clone())
    }

    fn describe(&self) -> String {
        format!("{} inline binding(s)", self.bindings.len())
    }
}
