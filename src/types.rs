// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: the dictionary the engine is built over, and the
//! per-strategy lookup structure every [`crate::strategies`] strategy owns.
//!
//! # Invariants
//!
//! - [`Dictionary`] is immutable for the engine's lifetime; every index
//!   derived from it is a pure function of its contents.
//! - A [`StrategyIndex`]'s `sorted_keys` is always the sorted, deduplicated
//!   set of its buckets' keys — see [`crate::contracts::check_sorted_ascending`].

use std::collections::{HashMap, HashSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::contracts::check_bucket_partition;
use crate::fuzzy::SortedIndex;

/// The caller-specified set of data-source identifiers to filter results
/// by; empty means "no filter".
pub type DataSources = HashSet<String>;

/// The input corpus: full canonical names mapped to the set of data sources
/// each one originates from. Keys are unique by construction (it's a map);
/// built externally and handed to [`crate::Finder::new`], immutable
/// thereafter.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, HashSet<String>>,
}

impl Dictionary {
    /// Build a dictionary from an already-assembled `full_name -> sources` map.
    pub fn new(entries: HashMap<String, HashSet<String>>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every full name in the dictionary, in arbitrary order.
    pub fn full_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The data sources a full name originates from, or `None` if `name`
    /// isn't a dictionary key.
    pub fn sources_of(&self, name: &str) -> Option<&HashSet<String>> {
        self.entries.get(name)
    }

    /// Does `name`'s source set intersect `filter`? An empty `filter` means
    /// "no restriction" and always answers `true`.
    pub fn matches_sources(&self, name: &str, filter: &DataSources) -> bool {
        if filter.is_empty() {
            return true;
        }
        self.entries
            .get(name)
            .is_some_and(|sources| !sources.is_disjoint(filter))
    }
}

impl FromIterator<(String, HashSet<String>)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, HashSet<String>)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A strategy's lookup structure: a `transformed_key -> {full_name}` bucket
/// map, plus the sorted sequence of distinct transformed keys the
/// DFA-successor walk (`fuzzy::intersect`) probes against. Built once per
/// strategy at construction time; immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct StrategyIndex {
    buckets: HashMap<String, HashSet<String>>,
    sorted_keys: SortedIndex,
}

impl StrategyIndex {
    /// Build by applying `transform` to every name in `names`. A name for
    /// which `transform` returns `None` is excluded from this strategy's
    /// index entirely (used by the genus-only strategy, which only indexes
    /// single-word names).
    pub fn build<'a>(
        names: impl Iterator<Item = &'a str>,
        transform: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut offered = 0usize;
        let mut buckets: HashMap<String, HashSet<String>> = HashMap::new();
        for name in names {
            offered += 1;
            if let Some(key) = transform(name) {
                buckets.entry(key).or_default().insert(name.to_string());
            }
        }
        check_bucket_partition(offered, &buckets);
        Self::from_buckets(buckets)
    }

    /// Parallel construction: `transform` is applied across chunks of
    /// `names` on the `rayon` global pool, then the per-chunk bucket maps
    /// are merged. Behaviorally identical to [`StrategyIndex::build`];
    /// purely a construction-time optimization.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(
        names: &[&str],
        transform: impl Fn(&str) -> Option<String> + Sync,
    ) -> Self {
        if names.is_empty() {
            return Self::default();
        }
        let chunk_size = (names.len() / rayon::current_num_threads().max(1)).max(1);
        let partials: Vec<HashMap<String, HashSet<String>>> = names
            .par_chunks(chunk_size)
            .map(|chunk| {
                let mut local: HashMap<String, HashSet<String>> = HashMap::new();
                for &name in chunk {
                    if let Some(key) = transform(name) {
                        local.entry(key).or_default().insert(name.to_string());
                    }
                }
                local
            })
            .collect();

        let mut buckets: HashMap<String, HashSet<String>> = HashMap::new();
        for partial in partials {
            for (key, bucket_names) in partial {
                buckets.entry(key).or_default().extend(bucket_names);
            }
        }
        check_bucket_partition(names.len(), &buckets);
        Self::from_buckets(buckets)
    }

    fn from_buckets(buckets: HashMap<String, HashSet<String>>) -> Self {
        let sorted_keys = SortedIndex::from_keys(buckets.keys().cloned().collect());
        check_sorted(&sorted_keys);
        Self { buckets, sorted_keys }
    }

    /// The set of full names stored under a transformed key, if any.
    pub fn lookup(&self, key: &str) -> Option<&HashSet<String>> {
        self.buckets.get(key)
    }

    pub fn sorted_keys(&self) -> &SortedIndex {
        &self.sorted_keys
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

fn check_sorted(index: &SortedIndex) {
    crate::contracts::check_sorted_ascending(index.keys());
}
