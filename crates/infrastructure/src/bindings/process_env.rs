//! Process environment bindings source.

use async_trait::async_trait;
use varpath_application::ports::{BindingsError, BindingsSource};
use varpath_domain::{VariableBindings, VariableName};

/// Offers process environment variables as bindings.
///
/// Variables whose name (after prefix stripping) is not a valid variable
/// name, or whose name or value is not UTF-8, are skipped.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnvBindings {
    prefix: Option<String>,
}

impl ProcessEnvBindings {
    /// Uses every environment variable.
    #[must_use]
    pub const fn new() -> Self {
        Self { prefix: None }
    }

    /// Uses only variables starting with `prefix`; the prefix is stripped.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl BindingsSource for ProcessEnvBindings {
    async fn load(&self) -> Result<VariableBindings, BindingsError> {
        let vars = std::env::vars_os().filter_map(|(name, value)| {
            Some((name.into_string().ok()?, value.into_string().ok()?))
        });
        Ok(collect_env_bindings(vars, self.prefix.as_deref()))
    }

    fn describe(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("environment variables prefixed {prefix:?}"),
            None => "environment variables".to_string(),
        }
    }
}

/// Builds bindings from `(name, value)` pairs the way the environment source does.
pub fn collect_env_bindings<I>(vars: I, prefix: Option<&str>) -> VariableBindings
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut bindings = VariableBindings::new();
    for (name, value) in vars {
        let stripped = match prefix {
            Some(prefix) => match name.strip_prefix(prefix) {
                Some(rest) => rest,
                None => continue,
            },
            None => name.as_str(),
        };

        match VariableName::new(stripped) {
            Ok(variable) => {
                bindings.insert(variable, value);
            }
            Err(_) => tracing::trace!(name = %name, "skipping environment variable"),
        }
    }
    bindings
}
