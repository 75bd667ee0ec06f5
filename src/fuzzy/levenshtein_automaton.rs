//! Builds the Levenshtein NFA for a fixed edit distance k=2.
//!
//! States are `(position, errors)` pairs with `0 <= position <= term.len()`
//! and `0 <= errors <= k`. Five edge families connect them: exact match,
//! deletion from the input, insertion into the input, substitution, and
//! trailing-error padding once the whole term has been consumed.

use super::automaton::{Label, Nfa, StateId};
use std::collections::HashMap;

/// Fixed maximum edit distance this crate's automata accept.
pub const MAX_EDITS: usize = 2;

fn state_id(
    nfa: &mut Nfa,
    state_of: &mut HashMap<(usize, usize), StateId>,
    position: usize,
    errors: usize,
) -> StateId {
    *state_of
        .entry((position, errors))
        .or_insert_with(|| nfa.new_state())
}

/// Build the `(|term|+1) x (k+1)` grid NFA for `term`.
///
/// The caller determinises the result with [`Nfa::to_dfa`]; the resulting
/// DFA accepts exactly the strings within edit distance <= [`MAX_EDITS`] of
/// `term` by construction.
pub fn build_levenshtein_nfa(term: &str) -> Nfa {
    let chars: Vec<char> = term.chars().collect();
    let n = chars.len();
    let k = MAX_EDITS;

    let mut nfa = Nfa::new();
    let mut state_of: HashMap<(usize, usize), StateId> = HashMap::new();
    state_of.insert((0, 0), nfa.start_state());

    for i in 0..=n {
        for e in 0..=k {
            crate::contracts::check_dfa_state_bounds(i, e, n, k);
            let here = state_id(&mut nfa, &mut state_of, i, e);

            if i < n {
                let c = chars[i];
                let exact = state_id(&mut nfa, &mut state_of, i + 1, e);
                nfa.add_transition(here, Label::Char(c), exact);

                if e < k {
                    let deletion = state_id(&mut nfa, &mut state_of, i, e + 1);
                    nfa.add_transition(here, Label::Any, deletion);

                    let insertion = state_id(&mut nfa, &mut state_of, i + 1, e + 1);
                    nfa.add_transition(here, Label::Epsilon, insertion);

                    let substitution = state_id(&mut nfa, &mut state_of, i + 1, e + 1);
                    nfa.add_transition(here, Label::Any, substitution);
                }
            } else if e < k {
                let padded = state_id(&mut nfa, &mut state_of, n, e + 1);
                nfa.add_transition(here, Label::Any, padded);
            }

            if i == n {
                nfa.add_final(here);
            }
        }
    }

    nfa
}
