// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching primitives: a generic automaton, the Levenshtein automaton
//! built on top of it, the DFA-successor walk, and a plain bounded edit
//! distance used by the per-part verifier in `edit_budget`.

pub mod automaton;
pub mod levenshtein;
pub mod levenshtein_automaton;
pub mod successor;

pub use automaton::{Dfa, Label, Nfa, StateId};
pub use levenshtein::levenshtein_distance;
pub use levenshtein_automaton::build_levenshtein_nfa;
pub use successor::{intersect, SortedIndex};
