// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The pipeline dispatcher: routes a normalised query through up to two of
//! the four strategies, in a fixed order, short-circuiting on the first
//! that applies.
//!
//! ```text
//! query -> normalize -> genus-only? -> letter? -> stem -> verbatim
//!             (root only)  (root only)    \-> (fallback if stem is empty)
//! ```

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

use crate::strategies::{GenusOnlyStrategy, LetterStrategy, StemStrategy, VerbatimStrategy};
use crate::types::{DataSources, Dictionary};
use crate::utils::{capitalize_first, normalize_query};

/// Strategies only a root `Finder` runs — never a letter-bucket child, to
/// avoid infinite recursion.
struct RootStrategies {
    genus_only: GenusOnlyStrategy,
    letter: LetterStrategy,
}

/// Approximate-matching engine over one immutable [`Dictionary`].
/// Construction builds every strategy's index once; every subsequent
/// [`Finder::find_all_matches`] call is a synchronous, read-only lookup —
/// the dictionary and indexes may be shared by reference across concurrent
/// callers without locking.
pub struct Finder {
    dictionary: Dictionary,
    stem: StemStrategy,
    verbatim: VerbatimStrategy,
    root: Option<RootStrategies>,
}

impl Finder {
    /// Build a root-level finder over `dictionary`.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::build(dictionary, false)
    }

    /// Construct a letter-bucket child: disables the genus-only and letter
    /// strategies, leaving only stem -> verbatim.
    pub(crate) fn build_for_letter_bucket(dictionary: Dictionary) -> Self {
        Self::build(dictionary, true)
    }

    #[cfg(not(feature = "parallel"))]
    fn build(dictionary: Dictionary, letter_bucket_context: bool) -> Self {
        let stem = StemStrategy::build(&dictionary);
        let verbatim = VerbatimStrategy::build(&dictionary);
        let root = (!letter_bucket_context).then(|| RootStrategies {
            genus_only: GenusOnlyStrategy::build(&dictionary),
            letter: LetterStrategy::build(&dictionary),
        });
        Self { dictionary, stem, verbatim, root }
    }

    #[cfg(feature = "parallel")]
    fn build(dictionary: Dictionary, letter_bucket_context: bool) -> Self {
        let stem = StemStrategy::build_parallel(&dictionary);
        let verbatim = VerbatimStrategy::build_parallel(&dictionary);
        let root = (!letter_bucket_context).then(|| RootStrategies {
            genus_only: GenusOnlyStrategy::build_parallel(&dictionary),
            letter: LetterStrategy::build(&dictionary),
        });
        Self { dictionary, stem, verbatim, root }
    }

    /// Run `query` against the dictionary, filtered by `data_sources`
    /// (empty ⇒ unfiltered), and capitalise each result's first letter —
    /// a legacy presentation behavior this crate preserves. Never panics:
    /// any internal failure degrades to an empty result.
    pub fn find_all_matches(&self, query: &str, data_sources: &DataSources) -> Vec<String> {
        self.find_all_matches_raw(query, data_sources)
            .into_iter()
            .map(|name| capitalize_first(&name))
            .collect()
    }

    /// Same as [`Finder::find_all_matches`] but without the capitalisation
    /// step, for callers that want the dictionary's original casing back —
    /// capitalisation is purely a presentation concern layered on top.
    pub fn find_all_matches_raw(&self, query: &str, data_sources: &DataSources) -> Vec<String> {
        panic::catch_unwind(AssertUnwindSafe(|| self.pipeline(query, data_sources))).unwrap_or_default()
    }

    /// Entry point used by a parent `Finder`'s letter strategy to recurse
    /// into a bucket child: no capitalisation, no `catch_unwind` (the
    /// outer `find_all_matches` call already wraps the whole recursive
    /// pipeline in one).
    pub(crate) fn match_internal(&self, query: &str, data_sources: &DataSources) -> Vec<String> {
        self.pipeline(query, data_sources)
    }

    fn pipeline(&self, query: &str, data_sources: &DataSources) -> Vec<String> {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return Vec::new();
        }

        if let Some(root) = &self.root {
            if GenusOnlyStrategy::verify(&normalized) {
                return root.genus_only.match_query(&normalized, data_sources, &self.dictionary);
            }
            if LetterStrategy::verify(&normalized) {
                return root.letter.match_query(&normalized, data_sources, &self.dictionary);
            }
        }

        let stemmed = self.stem.match_query(&normalized, data_sources, &self.dictionary);
        if !stemmed.is_empty() {
            return stemmed;
        }
        self.verbatim.match_query(&normalized, data_sources, &self.dictionary)
    }
}
