//! Invalidation Policy Module
//!
//! Maps write operations to the cached read classes they make stale.

use std::collections::HashMap;

// == Invalidation Scope ==
/// What a successful write operation purges from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidationScope {
    /// Purge entries whose keys carry one of these operation prefixes
    Prefixes(Vec<String>),
    /// Purge every entry
    All,
}

// == Invalidation Policy ==
/// Static mapping from write-operation identifiers to invalidation scopes.
///
/// Operations without a rule invalidate nothing. The policy is consulted
/// only after the write has been confirmed successful; classification of
/// an operation as a write happens upstream of the policy.
#[derive(Debug, Clone, Default)]
pub struct InvalidationPolicy {
    rules: HashMap<String, InvalidationScope>,
}

impl InvalidationPolicy {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Rule ==
    /// Adds a fine-grained rule: `operation` purges entries under the given
    /// read-operation prefixes. An empty prefix list is a valid rule for a
    /// write that changes nothing cached.
    pub fn rule(mut self, operation: &str, prefixes: &[&str]) -> Self {
        self.rules.insert(
            operation.to_string(),
            InvalidationScope::Prefixes(prefixes.iter().map(|p| p.to_string()).collect()),
        );
        self
    }

    // == Rule All ==
    /// Adds a coarse rule: `operation` purges the entire store.
    pub fn rule_all(mut self, operation: &str) -> Self {
        self.rules.insert(operation.to_string(), InvalidationScope::All);
        self
    }

    // == Scope ==
    /// Looks up the scope for a write operation, if any.
    pub fn scope(&self, operation: &str) -> Option<&InvalidationScope> {
        self.rules.get(operation)
    }

    // == Length ==
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
