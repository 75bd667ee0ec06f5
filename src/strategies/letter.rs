// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The abbreviated-letter strategy: routes a query shaped like `"E. coli"`
//! to a nested [`Finder`] scoped to names starting with `e`. Each bucket is
//! a flat table entry, not a cyclic structure — the nested `Finder`'s
//! lifetime is just its parent's.

use std::collections::{HashMap, HashSet};

use crate::finder::Finder;
use crate::types::{DataSources, Dictionary};

struct LetterBucket {
    /// A `Finder` scoped to this letter, built over a synthetic dictionary
    /// keyed by "rest of name" rather than the original full names.
    finder: Finder,
    /// Maps a rest-of-name key back to the original full name(s) that
    /// produced it, for expanding the nested `Finder`'s results.
    rest_to_full: HashMap<String, HashSet<String>>,
}

pub struct LetterStrategy {
    buckets: HashMap<char, LetterBucket>,
}

impl LetterStrategy {
    pub fn build(dictionary: &Dictionary) -> Self {
        // Per letter: rest-of-name -> union of data sources (for the nested
        // Finder's own dictionary) and rest-of-name -> full names (for
        // expanding its results back out).
        let mut per_letter: HashMap<char, (HashMap<String, HashSet<String>>, HashMap<String, HashSet<String>>)> =
            HashMap::new();

        for name in dictionary.full_names() {
            let (letter, rest) = Self::transform(name);
            let Some(rest) = rest else { continue };
            let (sources_by_rest, full_by_rest) = per_letter.entry(letter).or_default();

            if let Some(sources) = dictionary.sources_of(name) {
                sources_by_rest
                    .entry(rest.clone())
                    .or_default()
                    .extend(sources.iter().cloned());
            }
            full_by_rest.entry(rest).or_default().insert(name.to_string());
        }

        let buckets = per_letter
            .into_iter()
            .map(|(letter, (sources_by_rest, rest_to_full))| {
                let nested_dictionary = Dictionary::new(sources_by_rest);
                let finder = Finder::build_for_letter_bucket(nested_dictionary);
                (letter, LetterBucket { finder, rest_to_full })
            })
            .collect();

        Self { buckets }
    }

    /// First character (lowercased) and the remainder of the name after its
    /// first space-separated part. `None` rest means `word` was a single
    /// token: downstream logic never actually reaches this case because
    /// `verify` demands a dot-suffixed first part with something after it,
    /// but it's handled explicitly rather than assumed away.
    pub fn transform(word: &str) -> (char, Option<String>) {
        let mut parts = word.splitn(2, ' ');
        let first = parts.next().unwrap_or("");
        let rest = parts.next().map(str::to_string).filter(|r| !r.is_empty());
        let letter = first.chars().next().map(|c| c.to_ascii_lowercase()).unwrap_or('\0');
        (letter, rest)
    }

    /// A query routes through this strategy only when its first token is
    /// exactly two characters and ends in `.` (e.g. `"E."`).
    pub fn verify(query: &str) -> bool {
        let first = query.split(' ').next().unwrap_or("");
        first.chars().count() == 2 && first.ends_with('.')
    }

    pub fn match_query(
        &self,
        query: &str,
        data_sources: &DataSources,
        dictionary: &Dictionary,
    ) -> Vec<String> {
        let (letter, rest) = Self::transform(query);
        let Some(rest) = rest else {
            return Vec::new();
        };
        let Some(bucket) = self.buckets.get(&letter) else {
            return Vec::new();
        };

        let rest_matches = bucket.finder.match_internal(&rest, data_sources);
        let mut results = Vec::new();
        for rest_match in rest_matches {
            if let Some(full_names) = bucket.rest_to_full.get(&rest_match) {
                for name in full_names {
                    if dictionary.matches_sources(name, data_sources) {
                        results.push(name.clone());
                    }
                }
            }
        }
        results
    }
}
