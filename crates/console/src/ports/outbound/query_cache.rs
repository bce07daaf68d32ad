//! Query Cache Port - shared read cache with cancellation and staleness
//!
//! Server responses are cached per semantic [`QueryKey`]. Views render from
//! the cache; services refresh entries through the `begin_fetch`/`try_commit`
//! ticket pair so that a `cancel` issued between the two refuses the late
//! response instead of letting it clobber newer state.

use serde_json::Value;

/// Hierarchical cache key, e.g. `["ad", "42"]` or `["ads", <filter parts>]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// Key of a single ad detail
    pub fn ad(id: i64) -> Self {
        Self(vec!["ad".to_string(), id.to_string()])
    }

    /// Root key of the ad list; also the invalidation prefix for all pages
    pub fn ads() -> Self {
        Self(vec!["ads".to_string()])
    }

    /// Key of one statistics endpoint (`summary`, `activity`, ...)
    pub fn stats(section: &str) -> Self {
        Self(vec!["stats".to_string(), section.to_string()])
    }

    pub fn child(mut self, part: impl Into<String>) -> Self {
        self.0.push(part.into());
        self
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Permission to write one fetch result back into the cache.
///
/// Issued by `begin_fetch` before the network call starts. `try_commit`
/// refuses the ticket if the key was cancelled in between.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub key: QueryKey,
    pub generation: u64,
}

pub trait QueryCachePort: Send + Sync {
    /// Current cached value for the key, stale or not
    fn get(&self, key: &QueryKey) -> Option<Value>;

    /// Overwrite the entry unconditionally and mark it fresh.
    ///
    /// This is the mutation path (optimistic writes and rollbacks); it is
    /// not gated by fetch generations.
    fn set(&self, key: &QueryKey, value: Value);

    /// Mark every entry under the prefix stale. Values stay readable.
    fn invalidate(&self, prefix: &QueryKey);

    /// Refuse all fetches for the key that started before this call
    fn cancel(&self, key: &QueryKey);

    /// Whether the key needs a (re)fetch
    fn is_stale(&self, key: &QueryKey) -> bool;

    /// Start a fetch for the key
    fn begin_fetch(&self, key: &QueryKey) -> FetchTicket;

    /// Commit a fetch result; returns false if the ticket was cancelled
    fn try_commit(&self, ticket: &FetchTicket, value: Value) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matching_is_per_segment() {
        let list_page = QueryKey::ads().child("iphone").child("2");
        assert!(list_page.starts_with(&QueryKey::ads()));
        assert!(!QueryKey::ad(42).starts_with(&QueryKey::ads()));
        assert!(QueryKey::ad(42).starts_with(&QueryKey::ad(42)));
    }
}
