//! Invariants 6 and 7: the pipeline's dispatch order is consistent with
//! early-exit semantics, and data-source filtering is monotone.

use std::collections::HashSet;

use proptest::prelude::*;

use super::common::{dictionary, sources};
use taxamatch::Finder;

proptest! {
    /// Invariant 7: results(q, D1) subset results(q, D1 union D2).
    #[test]
    fn source_filtering_is_monotone(
        extra_source in prop::option::of("[A-Z]"),
    ) {
        let finder = Finder::new(dictionary(&[
            ("cat", &["A"]),
            ("cot", &["B"]),
            ("cut", &["C"]),
        ]));

        let small = sources(&["A"]);
        let mut big = small.clone();
        if let Some(extra) = &extra_source {
            big.insert(extra.clone());
        }

        let small_hits: HashSet<String> = finder.find_all_matches("cat", &small).into_iter().collect();
        let big_hits: HashSet<String> = finder.find_all_matches("cat", &big).into_iter().collect();

        prop_assert!(small_hits.is_subset(&big_hits));
    }
}

/// Invariant 6: for the genus-only-eligible, single-token case, the result
/// is exactly what genus-only alone would produce — dispatch never
/// continues past it, even when it returns nothing.
#[test]
fn genus_only_result_is_never_overridden_by_later_strategies() {
    // "cot" is one edit from "cat" and would match under the verbatim
    // strategy if genus-only didn't short-circuit first; since "cat" isn't
    // an exact (genus-only) match for "cot", the dispatcher must still stop
    // right there and return nothing, never falling through to stem/verbatim.
    let finder = Finder::new(dictionary(&[("cot", &["A"])]));
    assert!(finder.find_all_matches("cat", &HashSet::new()).is_empty());
}

/// Invariant 6, stem-then-verbatim half: when stem finds nothing, verbatim
/// still runs and can still find a match.
#[test]
fn verbatim_runs_when_stem_is_empty() {
    let finder = Finder::new(dictionary(&[("proteus avibus", &["A"])]));
    let hits = finder.find_all_matches("proteus avibum", &HashSet::new());
    assert_eq!(hits, vec!["Proteus avibus".to_string()]);
}
