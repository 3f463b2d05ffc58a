//! Resolve path use case

use varpath_domain::{NameMatching, ResolvingOutcome, VariableName, VariablePathExpression};

use crate::error::ApplicationResult;
use crate::ports::{AbsolutePathValidator, BindingsSource, PathExpressionParser};
use crate::variable_resolver::{
    DollarParenParser, RootedPathValidator, VariablePathResolver, find_unresolved,
};

/// Output containing the outcome and the expression it was computed from.
#[derive(Debug, Clone)]
pub struct ResolvePathOutput {
    /// The parsed expression.
    pub expression: VariablePathExpression,
    /// The resolving outcome.
    pub outcome: ResolvingOutcome,
    /// Number of bindings that were available.
    pub binding_count: usize,
}

/// Loads bindings from a source, then parses and resolves a raw path.
pub struct ResolvePath<S, V = RootedPathValidator, P = DollarParenParser> {
    source: S,
    resolver: VariablePathResolver<V, P>,
    matching: NameMatching,
}

impl<S: BindingsSource> ResolvePath<S> {
    /// Creates a new `ResolvePath` use case with the default resolver.
    #[must_use]
    pub const fn new(source: S, matching: NameMatching) -> Self {
        Self {
            source,
            resolver: VariablePathResolver::new(),
            matching,
        }
    }
}

impl<S, V, P> ResolvePath<S, V, P>
where
    S: BindingsSource,
    V: AbsolutePathValidator,
    P: PathExpressionParser,
{
    /// Creates the use case with a custom resolver.
    #[must_use]
    pub const fn with_resolver(
        source: S,
        resolver: VariablePathResolver<V, P>,
        matching: NameMatching,
    ) -> Self {
        Self {
            source,
            resolver,
            matching,
        }
    }

    /// Returns the name matching policy applied to loaded bindings.
    #[must_use]
    pub const fn matching(&self) -> NameMatching {
        self.matching
    }

    /// Executes the use case.
    ///
    /// # Errors
    /// Returns an error if the bindings cannot be loaded or `input` does not
    /// parse. Unresolved variables and non-absolute results are reported in
    /// the output outcome.
    pub async fn execute(&self, input: &str) -> ApplicationResult<ResolvePathOutput> {
        let expression = self.resolver.parser().parse(input)?;
        let bindings = self.source.load().await?.into_matching(self.matching);
        tracing::debug!(
            source = %self.source.describe(),
            bindings = bindings.len(),
            "loaded variable bindings"
        );

        let outcome = self.resolver.resolve(&expression, &bindings);

        Ok(ResolvePathOutput {
            expression,
            outcome,
            binding_count: bindings.len(),
        })
    }

    /// Lists the variables referenced by `input` that the source cannot bind.
    ///
    /// # Errors
    /// Returns an error if the bindings cannot be loaded or `input` does not parse.
    pub async fn unresolved(&self, input: &str) -> ApplicationResult<Vec<VariableName>> {
        let expression = self.resolver.parser().parse(input)?;
        let bindings = self.source.load().await?.into_matching(self.matching);
        Ok(find_unresolved(&expression, &bindings))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use varpath_domain::{DomainError, ResolvingStatus, VariableBindings};

    use crate::error::ApplicationError;
    use crate::ports::BindingsError;

    struct MockSource {
        pairs: Vec<(&'static str, &'static str)>,
        loads: AtomicUsize,
    }

    impl MockSource {
        fn new(pairs: Vec<(&'static str, &'static str)>) -> Self {
            Self {
                pairs,
                loads: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BindingsSource for MockSource {
        async fn load(&self) -> Result<VariableBindings, BindingsError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(VariableBindings::from_pairs(
                NameMatching::CaseSensitive,
                self.pairs.iter().copied(),
            )?)
        }

        fn describe(&self) -> String {
            "mock".to_string()
        }
    }

    struct FailingSource;

    #[async_trait]
    impl BindingsSource for FailingSource {
        async fn load(&self) -> Result<VariableBindings, BindingsError> {
            Err(BindingsError::Serialization("broken".to_string()))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[tokio::test]
    async fn test_execute_success() {
        let use_case = ResolvePath::new(
            MockSource::new(vec![("SolutionDir", "/work/sln")]),
            NameMatching::CaseSensitive,
        );

        let output = use_case.execute("$(SolutionDir)/bin").await.unwrap();

        assert_eq!(output.outcome.absolute_path().unwrap().as_str(), "/work/sln/bin");
        assert_eq!(output.binding_count, 1);
        assert_eq!(output.expression.to_string(), "$(SolutionDir)/bin");
    }

    #[tokio::test]
    async fn test_execute_applies_matching_policy() {
        let use_case = ResolvePath::new(
            MockSource::new(vec![("SolutionDir", "/work/sln")]),
            NameMatching::CaseInsensitive,
        );

        let output = use_case.execute("$(SOLUTIONDIR)/bin").await.unwrap();

        assert!(output.outcome.is_success());
    }

    #[tokio::test]
    async fn test_execute_case_insensitive_collision_keeps_last() {
        let use_case = ResolvePath::new(
            MockSource::new(vec![("Root", "/first"), ("ROOT", "/second")]),
            NameMatching::CaseInsensitive,
        );

        for _ in 0..32 {
            let output = use_case.execute("$(root)/bin").await.unwrap();
            assert_eq!(output.outcome.absolute_path().unwrap().as_str(), "/second/bin");
            assert_eq!(output.binding_count, 1);
        }
    }

    #[tokio::test]
    async fn test_execute_reports_unresolved_as_outcome() {
        let use_case = ResolvePath::new(MockSource::new(vec![]), NameMatching::CaseSensitive);

        let output = use_case.execute("$(a)/$(b)").await.unwrap();

        assert_eq!(
            output.outcome.status(),
            ResolvingStatus::ErrorUnresolvedVariable
        );
    }

    #[tokio::test]
    async fn test_parse_error_skips_loading() {
        let source = MockSource::new(vec![]);
        let use_case = ResolvePath::new(source, NameMatching::CaseSensitive);

        let err = use_case.execute("$(bad name)").await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidVariableName(_))
        ));
        assert_eq!(use_case.source.loads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_source_failure_is_error() {
        let use_case = ResolvePath::new(FailingSource, NameMatching::CaseSensitive);

        let err = use_case.execute("/x").await.unwrap_err();

        assert!(matches!(err, ApplicationError::Bindings(_)));
    }

    #[tokio::test]
    async fn test_unresolved_lists_missing() {
        let use_case = ResolvePath::new(
            MockSource::new(vec![("a", "/x")]),
            NameMatching::CaseSensitive,
        );

        let missing = use_case.unresolved("$(a)/$(b)/$(c)").await.unwrap();
        let missing: Vec<&str> = missing.iter().map(VariableName::as_str).collect();

        assert_eq!(missing, vec!["b", "c"]);
    }
}
