// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-part edit budget verifier run against every candidate a DFA
//! walk surfaces, to reject matches the automaton's single flat edit
//! distance budget admits but whose distribution across words is too
//! lopsided to be a plausible match (e.g. one five-letter word absorbing
//! all of a two-word query's slack).
//!
//! A query and a candidate are both split on spaces into "parts" (words).
//! Each part gets its own allowance based on the *query* part's length:
//! under 6 characters, 0 edits; under 11, 1 edit; otherwise 2. When query
//! and candidate have the same number of parts the comparison is
//! part-for-part. When they differ — one side was glued into fewer,
//! longer words, or split into more, shorter ones — every way of
//! partitioning the longer side's parts into exactly as many groups as
//! the shorter side has is tried; a single accepting partition is enough.

use crate::contracts::check_equal_space_counts;
use crate::fuzzy::levenshtein_distance;

fn allowed_edits(part_len: usize) -> usize {
    if part_len < 6 {
        0
    } else if part_len < 11 {
        1
    } else {
        2
    }
}

/// Case A of the matching threshold: `input` and `candidate` have the same
/// number of space-separated parts. `space_edits[i]` is added to part `i`'s
/// actual edit count before comparing against its allowance — it accounts
/// for parts of the candidate that were glued together to reach this part
/// count (always `0` here, since no gluing happened; kept as a parameter so
/// [`matching_threshold`]'s glued case can reuse this same check).
fn matching_threshold_parts(input_parts: &[&str], candidate_parts: &[&str], space_edits: &[usize]) -> bool {
    check_equal_space_counts(&input_parts.join(" "), &candidate_parts.join(" "));
    debug_assert_eq!(input_parts.len(), space_edits.len());

    for i in 0..input_parts.len() {
        let allowed = allowed_edits(input_parts[i].chars().count());
        let actual = levenshtein_distance(input_parts[i], candidate_parts[i]);
        if actual + space_edits[i] > allowed {
            return false;
        }
    }
    true
}

/// All ways to choose `k` of the `0..n` gap positions after which the long
/// side's parts are grouped (spec's "every combination of where to glue").
/// `k` is `short_len - 1`: the number of internal boundaries a partition
/// into `short_len` groups needs.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn go(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        let remaining = k - current.len();
        if start + remaining > n {
            return;
        }
        for i in start..n {
            current.push(i);
            go(i + 1, n, k, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    go(0, n, k, &mut Vec::new(), &mut out);
    out
}

/// Glue `long_parts` into `short_len` groups according to `comb` (the
/// zero-indexed position, within `long_parts`, that ends each of the first
/// `short_len - 1` groups), folding whatever's left into the final group.
/// Returns the glued parts alongside `space_edits[i]`, the count of extra
/// spaces removed to produce group `i` (one per word glued onto it beyond
/// the first).
fn glue(long_parts: &[&str], comb: &[usize]) -> (Vec<String>, Vec<usize>) {
    let short_len = comb.len() + 1;
    let mut glued = Vec::with_capacity(short_len);
    let mut space_edits = vec![0usize; short_len];
    let mut idx = 0;

    for (i, &boundary) in comb.iter().enumerate() {
        let mut group = String::new();
        while idx <= boundary {
            group.push_str(long_parts[idx]);
            if idx > if i == 0 { 0 } else { comb[i - 1] + 1 } {
                space_edits[i] += 1;
            }
            idx += 1;
        }
        glued.push(group);
    }

    let mut last = String::new();
    let start_of_last = idx;
    while idx < long_parts.len() {
        last.push_str(long_parts[idx]);
        idx += 1;
    }
    space_edits[short_len - 1] += long_parts.len().saturating_sub(start_of_last).saturating_sub(1).max(0);
    glued.push(last);

    (glued, space_edits)
}

/// Does `candidate` fall within `input`'s per-part edit budget?
///
/// `input` is the query term; `candidate` is a dictionary key the DFA walk
/// already confirmed is within the flat automaton distance. Both are
/// expected pre-lowercased / pre-transformed the same way (stemmed or
/// verbatim) before reaching here.
pub fn matching_threshold(input: &str, candidate: &str) -> bool {
    let input_parts: Vec<&str> = input.split(' ').collect();
    let candidate_parts: Vec<&str> = candidate.split(' ').collect();

    if input_parts.len() == candidate_parts.len() {
        let space_edits = vec![0usize; input_parts.len()];
        return matching_threshold_parts(&input_parts, &candidate_parts, &space_edits);
    }

    let (long_parts, short_parts, input_is_long) = if input_parts.len() > candidate_parts.len() {
        (&input_parts, &candidate_parts, true)
    } else {
        (&candidate_parts, &input_parts, false)
    };

    let short_len = short_parts.len();
    if short_len == 0 {
        return false;
    }

    for comb in combinations(long_parts.len() - 1, short_len - 1) {
        let (glued, space_edits) = glue(long_parts, &comb);
        let glued_refs: Vec<&str> = glued.iter().map(String::as_str).collect();

        let ok = if input_is_long {
            matching_threshold_parts(&glued_refs, short_parts, &space_edits)
        } else {
            matching_threshold_parts(short_parts, &glued_refs, &space_edits)
        };
        if ok {
            return true;
        }
    }
    false
}
