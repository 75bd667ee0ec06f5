// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The stem strategy: the first (genus) word of a query is kept verbatim,
//! every later word is run through [`crate::stemmer::stemmize`] to fold out
//! inflectional endings. Tried before [`super::verbatim::VerbatimStrategy`]
//! in the dispatch order; only falls through to verbatim when it yields no
//! matches at all.

use crate::edit_budget::matching_threshold;
use crate::fuzzy::{build_levenshtein_nfa, intersect};
use crate::stemmer::stemmize;
use crate::types::{DataSources, Dictionary, StrategyIndex};

pub struct StemStrategy {
    index: StrategyIndex,
}

impl StemStrategy {
    pub fn build(dictionary: &Dictionary) -> Self {
        let names: Vec<&str> = dictionary.full_names().collect();
        let index = StrategyIndex::build(names.into_iter(), |name| Some(Self::transform(name)));
        Self { index }
    }

    #[cfg(feature = "parallel")]
    pub fn build_parallel(dictionary: &Dictionary) -> Self {
        let names: Vec<&str> = dictionary.full_names().collect();
        let index = StrategyIndex::build_parallel(&names, |name| Some(Self::transform(name)));
        Self { index }
    }

    /// Lowercase the whole name, then stem every word but the first
    /// (genus never gets stemmed).
    pub fn transform(word: &str) -> String {
        let lowered = word.to_lowercase();
        let mut parts = lowered.split(' ');
        let Some(first) = parts.next() else {
            return lowered;
        };
        let rest: Vec<&str> = parts.collect();
        if rest.is_empty() {
            return first.to_string();
        }
        let mut out = String::from(first);
        for part in rest {
            out.push(' ');
            out.push_str(&stemmize(part).stem);
        }
        out
    }

    pub fn match_query(
        &self,
        query: &str,
        data_sources: &DataSources,
        dictionary: &Dictionary,
    ) -> Vec<String> {
        let transformed_query = Self::transform(query);
        let dfa = build_levenshtein_nfa(&transformed_query).to_dfa();

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
