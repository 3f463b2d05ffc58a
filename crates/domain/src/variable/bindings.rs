//! Variable bindings supplied to a resolution

use std::collections::HashMap;

use super::name::{NameMatching, VariableName};
use crate::error::DomainResult;

#[derive(Debug, Clone)]
struct Binding {
    name: VariableName,
    value: String,
    seq: u64,
}

/// A mapping from variable name to replacement value.
///
/// Keys are unique under the bindings' [`NameMatching`] policy: inserting a
/// name that matches an existing key replaces both the stored name and value.
/// Insertion order is tracked so that [`merge`](Self::merge) and
/// [`into_matching`](Self::into_matching) replay inserts in the order they
/// happened, and the last matching insert wins.
#[derive(Debug, Clone, Default)]
pub struct VariableBindings {
    matching: NameMatching,
    entries: HashMap<String, Binding>,
    next_seq: u64,
}

impl VariableBindings {
    /// Creates empty, case-sensitive bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty bindings using the given matching policy.
    #[must_use]
    pub fn with_matching(matching: NameMatching) -> Self {
        Self {
            matching,
            entries: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Builds bindings from `(name, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidVariableName` for the first invalid name.
    pub fn from_pairs<I, N, V>(matching: NameMatching, pairs: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        let mut bindings = Self::with_matching(matching);
        for (name, value) in pairs {
            bindings.insert(VariableName::new(name)?, value);
        }
        Ok(bindings)
    }

    /// Returns the matching policy.
    #[must_use]
    pub const fn matching(&self) -> NameMatching {
        self.matching
    }

    /// Inserts a binding, returning the previous value for a matching name.
    pub fn insert(&mut self, name: VariableName, value: impl Into<String>) -> Option<String> {
        let key = self.matching.key(name.as_str()).into_owned();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries
            .insert(
                key,
                Binding {
                    name,
                    value: value.into(),
                    seq,
                },
            )
            .map(|previous| previous.value)
    }

    /// Removes a binding, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let key = self.matching.key(name);
        self.entries.remove(&*key).map(|b| b.value)
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        let key = self.matching.key(name);
        self.entries.get(&*key).map(|b| b.value.as_str())
    }

    /// Returns true if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&VariableName, &str)> {
        self.entries.values().map(|b| (&b.name, b.value.as_str()))
    }

    /// Returns all bound names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&VariableName> {
        let mut names: Vec<_> = self.entries.values().map(|b| &b.name).collect();
        names.sort();
        names
    }

    /// Merges `other` into these bindings. Entries from `other` win.
    ///
    /// Entries of `other` are inserted in their original insertion order, so
    /// names that collapse under this policy resolve to `other`'s last insert.
    pub fn merge(&mut self, other: Self) {
        for binding in other.into_ordered() {
            self.insert(binding.name, binding.value);
        }
    }

    /// Returns these bindings re-keyed under a different matching policy.
    #[must_use]
    pub fn into_matching(self, matching: NameMatching) -> Self {
        if matching == self.matching {
            return self;
        }
        let mut rekeyed = Self::with_matching(matching);
        rekeyed.merge(self);
        rekeyed
    }

    fn into_ordered(self) -> Vec<Binding> {
        let mut bindings: Vec<Binding> = self.entries.into_values().collect();
        bindings.sort_by_key(|b| b.seq);
        bindings
    }
}

impl PartialEq for VariableBindings {
    fn eq(&self, other: &Self) -> bool {
        self.matching == other.matching
            && self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(key, b)| {
                other
                    .entries
                    .get(key)
                    .is_some_and(|o| o.name == b.name && o.value == b.value)
            })
    }
}

impl Eq for VariableBindings {}

impl Extend<(VariableName, String)> for VariableBindings {
    fn extend<T: IntoIterator<Item = (VariableName, String)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl FromIterator<(VariableName, String)> for VariableBindings {
    fn from_iter<T: IntoIterator<Item = (VariableName, String)>>(iter: T) -> Self {
        let mut bindings = Self::new();
        bindings.extend(iter);
        bindings
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use pretty_assertions::assert_eq;

    fn name(s: &str) -> VariableName {
        VariableName::new(s).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut bindings = VariableBindings::new();
        assert!(bindings.insert(name("ProjectDir"), "/src/app").is_none());

        assert_eq!(bindings.get("ProjectDir"), Some("/src/app"));
        assert_eq!(bindings.get("projectdir"), None);
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn test_insert_replaces_value() {
        let mut bindings = VariableBindings::new();
        bindings.insert(name("Out"), "/a");
        let previous = bindings.insert(name("Out"), "/b");

        assert_eq!(previous, Some("/a".to_string()));
        assert_eq!(bindings.get("Out"), Some("/b"));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mut bindings = VariableBindings::with_matching(NameMatching::CaseInsensitive);
        bindings.insert(name("ProjectDir"), "/src/app");

        assert_eq!(bindings.get("PROJECTDIR"), Some("/src/app"));
        assert_eq!(bindings.get("projectdir"), Some("/src/app"));
    }

    #[test]
    fn test_case_insensitive_keys_collapse() {
        let mut bindings = VariableBindings::with_matching(NameMatching::CaseInsensitive);
        bindings.insert(name("Dir"), "/first");
        bindings.insert(name("DIR"), "/second");

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.get("dir"), Some("/second"));
        assert_eq!(bindings.names()[0].as_str(), "DIR");
    }

    #[test]
    fn test_from_pairs_rejects_invalid_name() {
        let result = VariableBindings::from_pairs(
            NameMatching::CaseSensitive,
            [("good", "/a"), ("bad name", "/b")],
        );
        assert_eq!(
            result.unwrap_err(),
            DomainError::InvalidVariableName("bad name".to_string())
        );
    }

    #[test]
    fn test_merge_other_wins() {
        let mut base =
            VariableBindings::from_pairs(NameMatching::CaseSensitive, [("a", "1"), ("b", "2")])
                .unwrap();
        let overlay =
            VariableBindings::from_pairs(NameMatching::CaseSensitive, [("b", "20"), ("c", "30")])
                .unwrap();

        base.merge(overlay);

        assert_eq!(base.get("a"), Some("1"));
        assert_eq!(base.get("b"), Some("20"));
        assert_eq!(base.get("c"), Some("30"));
    }

    #[test]
    fn test_into_matching_rekeys() {
        let bindings =
            VariableBindings::from_pairs(NameMatching::CaseSensitive, [("Root", "/r")]).unwrap();
        let folded = bindings.into_matching(NameMatching::CaseInsensitive);

        assert_eq!(folded.matching(), NameMatching::CaseInsensitive);
        assert_eq!(folded.get("ROOT"), Some("/r"));
    }

    #[test]
    fn test_into_matching_keeps_last_insert() {
        for _ in 0..64 {
            let bindings = VariableBindings::from_pairs(
                NameMatching::CaseSensitive,
                [("Root", "/first"), ("Out", "/out"), ("ROOT", "/second")],
            )
            .unwrap();
            let folded = bindings.into_matching(NameMatching::CaseInsensitive);

            assert_eq!(folded.len(), 2);
            assert_eq!(folded.get("root"), Some("/second"));
            assert_eq!(folded.names()[1].as_str(), "ROOT");
        }
    }

    #[test]
    fn test_merge_replays_in_insert_order() {
        for _ in 0..64 {
            let mut base = VariableBindings::with_matching(NameMatching::CaseInsensitive);
            base.insert(name("Dir"), "/base");
            let mut overlay = VariableBindings::new();
            overlay.insert(name("DIR"), "/a");
            overlay.insert(name("dir"), "/b");
            overlay.insert(name("Dir"), "/c");

            base.merge(overlay);

            assert_eq!(base.len(), 1);
            assert_eq!(base.get("DIR"), Some("/c"));
        }
    }

    #[test]
    fn test_reinsert_moves_to_end() {
        let mut bindings = VariableBindings::new();
        bindings.insert(name("a"), "/1");
        bindings.insert(name("A"), "/2");
        bindings.insert(name("a"), "/3");

        let folded = bindings.into_matching(NameMatching::CaseInsensitive);
        assert_eq!(folded.get("a"), Some("/3"));
    }

    #[test]
    fn test_equality_ignores_insert_history() {
        let mut left = VariableBindings::new();
        left.insert(name("a"), "/1");
        left.insert(name("b"), "/2");
        let mut right = VariableBindings::new();
        right.insert(name("b"), "/2");
        right.insert(name("a"), "/1");

        assert_eq!(left, right);
        right.insert(name("a"), "/other");
        assert_ne!(left, right);
    }

    #[test]
    fn test_remove() {
        let mut bindings =
            VariableBindings::from_pairs(NameMatching::CaseSensitive, [("a", "1")]).unwrap();
        assert_eq!(bindings.remove("a"), Some("1".to_string()));
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_names_sorted() {
        let bindings = VariableBindings::from_pairs(
            NameMatching::CaseSensitive,
            [("zeta", "1"), ("alpha", "2"), ("mid", "3")],
        )
        .unwrap();
        let names: Vec<&str> = bindings.names().into_iter().map(VariableName::as_str).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}
