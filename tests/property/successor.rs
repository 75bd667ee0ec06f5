//! Invariant 2: `next_valid_string` returns the lexicographically smallest
//! accepted string >= its input, checked against a brute-force scan over a
//! small alphabet.

use proptest::prelude::*;
use taxamatch::fuzzy::build_levenshtein_nfa;

const ALPHABET: &[char] = &['a', 'b', 'c'];

/// Every string of length 0..=max_len over `ALPHABET`, in lexicographic order.
fn all_strings_up_to(max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next_frontier = Vec::new();
        for prefix in &frontier {
            for &c in ALPHABET {
                let mut s = prefix.clone();
                s.push(c);
                out.push(s.clone());
                next_frontier.push(s);
            }
        }
        frontier = next_frontier;
    }
    out.sort();
    out
}

fn brute_force_successor(dfa: &taxamatch::fuzzy::Dfa, input: &str) -> Option<String> {
    all_strings_up_to(input.len() + 3)
        .into_iter()
        .filter(|s| s.as_str() >= input)
        .find(|s| {
            let mut state = dfa.start();
            for c in s.chars() {
                match dfa.next_state(state, c) {
                    Some(next) => state = next,
                    None => return false,
                }
            }
            dfa.is_final(state)
        })
}

fn term_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,4}").unwrap()
}

fn input_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{1,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn successor_matches_brute_force_scan(term in term_strategy(), input in input_strategy()) {
        let dfa = build_levenshtein_nfa(&term).to_dfa();
        let found = dfa.next_valid_string(&input);
        let expected = brute_force_successor(&dfa, &input);
        prop_assert_eq!(found, expected);
    }
}
