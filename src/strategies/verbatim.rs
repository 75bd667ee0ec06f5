// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verbatim strategy: lowercase plus the `j`/`v` orthographic fold, no
//! stemming. Last in the dispatch order — whatever the stem strategy
//! didn't find falls through here.

use crate::edit_budget::matching_threshold;
use crate::fuzzy::{build_levenshtein_nfa, intersect};
use crate::stemmer::orthographic_fold;
use crate::types::{DataSources, Dictionary, StrategyIndex};

pub struct VerbatimStrategy {
    index: StrategyIndex,
}

impl VerbatimStrategy {
    pub fn build(dictionary: &Dictionary) -> Self {
        #[cfg(debug_assertions)]
        for name in dictionary.full_names() {
            crate::contracts::check_transform_idempotent(Self::transform, name);
        }
        let names: Vec<&str> = dictionary.full_names().collect();
        let index = StrategyIndex::build(names.into_iter(), |name| Some(Self::transform(name)));
        Self { index }
    }

    #[cfg(feature = "parallel")]
    pub fn build_parallel(dictionary: &Dictionary) -> Self {
        #[cfg(debug_assertions)]
        for name in dictionary.full_names() {
            crate::contracts::check_transform_idempotent(Self::transform, name);
        }
        let names: Vec<&str> = dictionary.full_names().collect();
        let index = StrategyIndex::build_parallel(&names, |name| Some(Self::transform(name)));
        Self { index }
    }

    pub fn transform(word: &str) -> String {
        orthographic_fold(&word.to_lowercase())
    }

    pub fn match_query(
        &self,
        query: &str,
        data_sources: &DataSources,
        dictionary: &Dictionary,
    ) -> Vec<String> {
        let transformed_query = Self::transform(query);
        let dfa = build_levenshtein_nfa(&transformed_query).to_dfa();

        // `intersect`'s accept callback mirrors the original pipeline's
        // coarse `lookup_ds`: reject candidates outside the edit budget, or
        // whose bucket's full names collectively miss every requested
        // source. The precise per-name source filter runs again below, on
        // expansion, exactly as the original does.
        let accepted_keys = intersect(&dfa, self.index.sorted_keys(), |candidate| {
            if !matching_threshold(&transformed_query, candidate) {
                return false;
            }
            if data_sources.is_empty() {
                return true;
            }
            self.index.lookup(candidate).is_some_and(|names| {
                names.iter().any(|n| dictionary.matches_sources(n, data_sources))
            })
        });

        let mut results = Vec::new();
        for key in &accepted_keys {
            if let Some(names) = self.index.lookup(key) {
                for name in names {
                    if dictionary.matches_sources(name, data_sources) {
                        results.push(name.clone());
                    }
                }
            }
        }
        results
    }
}
