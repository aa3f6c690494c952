//! Commit identifier remapping model.
//!
//! # Responsibility
//! - Correlate a current commit id with the id it had before a rewrite.
//! - Build lookup snapshots keyed by either id.
//!
//! # Invariants
//! - Records are plain mutable data; equality is structural.
//! - Index helpers never mutate their input. On duplicate keys the last
//!   record in iteration order wins.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from a canonical commit id to its original id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitMap {
    /// Current/canonical commit id.
    pub cid: String,
    /// Commit id before remapping.
    pub original_cid: String,
    /// Originating repository; `None` when unknown or global.
    #[serde(default)]
    pub repo: Option<String>,
}

impl CommitMap {
    /// Creates a mapping with no repository scope.
    pub fn new(cid: impl Into<String>, original_cid: impl Into<String>) -> Self {
        Self {
            cid: cid.into(),
            original_cid: original_cid.into(),
            repo: None,
        }
    }

    /// Creates a mapping scoped to one repository.
    pub fn with_repo(
        cid: impl Into<String>,
        original_cid: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            repo: Some(repo.into()),
            ..Self::new(cid, original_cid)
        }
    }

    /// Indexes records by `cid`.
    ///
    /// Single pass; a later record with the same `cid` replaces an earlier one.
    pub fn index_by_cid<'a, I>(maps: I) -> HashMap<&'a str, &'a CommitMap>
    where
        I: IntoIterator<Item = &'a CommitMap>,
    {
        maps.into_iter()
            .map(|map| (map.cid.as_str(), map))
            .collect()
    }

    /// Indexes records by `original_cid`, with the same last-wins rule as
    /// [`CommitMap::index_by_cid`].
    pub fn index_by_original_cid<'a, I>(maps: I) -> HashMap<&'a str, &'a CommitMap>
    where
        I: IntoIterator<Item = &'a CommitMap>,
    {
        maps.into_iter()
            .map(|map| (map.original_cid.as_str(), map))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::CommitMap;

    #[test]
    fn index_accepts_iterators_over_borrowed_records() {
        let maps = vec![CommitMap::new("a", "x"), CommitMap::new("b", "y")];
        let index = CommitMap::index_by_cid(maps.iter().filter(|map| map.cid != "a"));
        assert_eq!(index.len(), 1);
        assert_eq!(index["b"].original_cid, "y");
    }
}
