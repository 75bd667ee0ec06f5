// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for this crate's structural invariants: sorted index
//! ordering, Levenshtein automaton state bounds, the per-part verifier's
//! equal-space-count precondition, per-strategy transform idempotence, and
//! exactly-one-bucket-per-name index partitioning.
//!
//! These are `debug_assert!`-based checks, zero-cost in release builds:
//! they exist to catch a broken invariant during development rather than
//! to recover from one at runtime. Nothing here should ever fire in a
//! correctly built release binary; if it does, that's a bug in this crate,
//! not a user error, so unlike `find_all_matches`'s `catch_unwind` boundary
//! these are not meant to degrade gracefully.

use std::collections::{HashMap, HashSet};

/// The ordered sequence of transformed keys for a strategy's index must be
/// sorted under the standard codepoint ordering used by `SortedIndex::ceil`.
pub fn check_sorted_ascending(keys: &[String]) {
    debug_assert!(
        keys.windows(2).all(|w| w[0] < w[1]),
        "sorted index keys must be strictly ascending and deduplicated"
    );
}

/// Every DFA state reachable during construction of a k=2 Levenshtein
/// automaton for a term of length `term_len` satisfies `position <= term_len`
/// and `errors <= max_edits`.
pub fn check_dfa_state_bounds(position: usize, errors: usize, term_len: usize, max_edits: usize) {
    debug_assert!(
        position <= term_len,
        "NFA state position {position} exceeds term length {term_len}"
    );
    debug_assert!(
        errors <= max_edits,
        "NFA state errors {errors} exceeds max_edits {max_edits}"
    );
}

/// `matching_threshold_helper`'s precondition: once the long side has been
/// glued down to the short side's part count, both operands must carry the
/// same number of space-separated parts before the part-for-part comparison
/// runs.
pub fn check_equal_space_counts(a: &str, b: &str) {
    debug_assert_eq!(
        a.matches(' ').count(),
        b.matches(' ').count(),
        "matching_threshold_helper requires equal space counts: {a:?} vs {b:?}"
    );
}

/// `transform` must be idempotent for every strategy: re-transforming an
/// already-transformed key must return it unchanged.
pub fn check_transform_idempotent(transform: impl Fn(&str) -> String, word: &str) {
    let once = transform(word);
    let twice = transform(&once);
    debug_assert_eq!(
        once, twice,
        "strategy transform must be idempotent for {word:?}"
    );
}

/// Every full name handed to a strategy's index build lands in at most one
/// bucket; the total count of names across all buckets can never exceed the
/// number of names offered to `StrategyIndex::build`.
pub fn check_bucket_partition(offered: usize, buckets: &HashMap<String, HashSet<String>>) {
    let placed: usize = buckets.values().map(HashSet::len).sum();
    debug_assert!(
        placed <= offered,
        "strategy index placed {placed} names but only {offered} were offered"
    );
}
