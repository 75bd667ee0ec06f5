//! Invariant 5 (the symmetric case): when `input` and `candidate` have the
//! same number of space-separated parts *and* each corresponding pair of
//! parts falls in the same edit-budget length tier, swapping the two
//! arguments gives the same verdict — both the per-part Levenshtein
//! distance and the allowance are unaffected by which side is "input".
//!
//! Full generality is intentionally not asserted here: the allowance table
//! is keyed on the *input* side's length only (see
//! `edit_budget::matching_threshold_parts`), so when a query/candidate pair
//! straddles a tier boundary (6 or 11 characters), the verdict can
//! genuinely depend on argument order. That asymmetry is deliberate.

use proptest::prelude::*;
use taxamatch::edit_budget::matching_threshold;

/// Words of a fixed length so both sides land in the same allowance tier
/// regardless of which one is passed as `input`.
fn same_length_word_pair() -> impl Strategy<Value = (String, String)> {
    (1usize..=12).prop_flat_map(|len| {
        let pattern = format!("[a-z]{{{len}}}");
        (
            prop::string::string_regex(&pattern).unwrap(),
            prop::string::string_regex(&pattern).unwrap(),
        )
    })
}

proptest! {
    #[test]
    fn swapping_args_agrees_when_lengths_match((a, b) in same_length_word_pair()) {
        prop_assert_eq!(matching_threshold(&a, &b), matching_threshold(&b, &a));
    }

    #[test]
    fn a_string_always_matches_itself(word in prop::string::string_regex("[a-z ]{1,20}").unwrap()) {
        prop_assert!(matching_threshold(&word, &word));
    }
}
