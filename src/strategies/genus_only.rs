// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact-match strategy over single-word ("genus-only") dictionary entries.
//!
//! No Levenshtein automaton here: `verify` only lets single-token queries
//! through, and `match_query` looks the transformed token up directly.
//! The dispatcher treats this strategy specially — if it applies, its
//! result (even an empty one) is returned without trying any other
//! strategy.

use crate::stemmer::orthographic_fold;
use crate::types::{DataSources, Dictionary, StrategyIndex};

pub struct GenusOnlyStrategy {
    index: StrategyIndex,
}

impl GenusOnlyStrategy {
    pub fn build(dictionary: &Dictionary) -> Self {
        #[cfg(debug_assertions)]
        for name in dictionary.full_names() {
            crate::contracts::check_transform_idempotent(Self::transform, name);
        }
        let names: Vec<&str> = dictionary.full_names().collect();
        let index = StrategyIndex::build(names.into_iter(), |name| {
            let key = Self::transform(name);
            (!key.contains(' ')).then_some(key)
        });
        Self { index }
    }

    #[cfg(feature = "parallel")]
    pub fn build_parallel(dictionary: &Dictionary) -> Self {
        #[cfg(debug_assertions)]
        for name in dictionary.full_names() {
            crate::contracts::check_transform_idempotent(Self::transform, name);
        }
        let names: Vec<&str> = dictionary.full_names().collect();
        let index = StrategyIndex::build_parallel(&names, |name| {
            let key = Self::transform(name);
            (!key.contains(' ')).then_some(key)
        });
        Self { index }
    }

    /// Lowercase plus the `j -> i`, `v -> u` orthographic fold — identical
    /// to [`super::verbatim::VerbatimStrategy::transform`], but only names
    /// whose transform has no space make it into this strategy's index.
    pub fn transform(word: &str) -> String {
        orthographic_fold(&word.to_lowercase())
    }

    /// Only a single-token query (no space) can use this strategy.
    pub fn verify(query: &str) -> bool {
        !query.contains(' ')
    }

    pub fn match_query(
        &self,
        query: &str,
        data_sources: &DataSources,
        dictionary: &Dictionary,
    ) -> Vec<String> {
        let key = Self::transform(query);
        match self.index.lookup(&key) {
            Some(names) => names
                .iter()
                .filter(|name| dictionary.matches_sources(name, data_sources))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }
}
