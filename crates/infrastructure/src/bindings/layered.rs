//! Layered bindings source.

use async_trait::async_trait;
use varpath_application::ports::{BindingsError, BindingsSource};
use varpath_domain::{NameMatching, VariableBindings};

/// Merges several sources in order; later sources override earlier ones.
///
/// Layers are merged under the configured [`NameMatching`] policy, so with
/// case-insensitive matching `ROOT` from a later layer replaces `Root` from
/// an earlier one.
#[derive(Default)]
pub struct LayeredBindings {
    matching: NameMatching,
    layers: Vec<Box<dyn BindingsSource>>,
}

impl LayeredBindings {
    /// Creates an empty, case-sensitive layered source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty layered source merging under `matching`.
    #[must_use]
    pub fn with_matching(matching: NameMatching) -> Self {
        Self {
            matching,
            layers: Vec::new(),
        }
    }

    /// Adds a layer on top of the existing ones.
    #[must_use]
    pub fn with_layer(mut self, source: impl BindingsSource + 'static) -> Self {
        self.push(source);
        self
    }

    /// Adds a layer on top of the existing ones.
    pub fn push(&mut self, source: impl BindingsSource + 'static) {
        self.layers.push(Box::new(source));
    }

    /// Returns the number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if there are no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl std::fmt::Debug for LayeredBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredBindings")
            .field("matching", &self.matching)
            .field("layers", &self.describe())
            .finish()
    }
}

#[async_trait]
impl BindingsSource for LayeredBindings {
    async fn load(&self) -> Result<VariableBindings, BindingsError> {
        let mut merged = VariableBindings::with_matching(self.matching);
        for layer in &self.layers {
            let bindings = layer.load().await?;
            tracing::debug!(
                layer = %layer.describe(),
                count = bindings.len(),
                "merging bindings layer"
            );
            merged.merge(bindings);
        }
        Ok(merged)
    }

    fn describe(&self) -> String {
        self.layers
            .iter()
            .map(|layer| layer.describe())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
