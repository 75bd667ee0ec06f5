//! Invariant 1: the k=2 Levenshtein DFA accepts exactly the strings within
//! edit distance 2 of the term it was built from.

use proptest::prelude::*;
use taxamatch::fuzzy::{build_levenshtein_nfa, levenshtein_distance};

fn accepts(term: &str, candidate: &str) -> bool {
    let dfa = build_levenshtein_nfa(term).to_dfa();
    let mut state = dfa.start();
    for ch in candidate.chars() {
        match dfa.next_state(state, ch) {
            Some(next) => state = next,
            None => return false,
        }
    }
    dfa.is_final(state)
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").unwrap()
}

proptest! {
    #[test]
    fn dfa_acceptance_matches_bounded_edit_distance(term in word_strategy(), candidate in word_strategy()) {
        let within_budget = levenshtein_distance(&term, &candidate) <= 2;
        prop_assert_eq!(accepts(&term, &candidate), within_budget);
    }

    #[test]
    fn the_term_itself_is_always_accepted(term in word_strategy()) {
        prop_assert!(accepts(&term, &term));
    }
}
