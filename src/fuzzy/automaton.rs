//! Generic NFA/DFA primitives over a `char` alphabet with `EPSILON` and `ANY` edges.
//!
//! The Levenshtein automaton (`levenshtein_automaton.rs`) is the only NFA this
//! crate builds, but the subset construction here is generic so that the
//! shape of the automaton stays separate from what it matches.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

/// Index of a state within an [`Nfa`] or a [`Dfa`]. Not meaningful across the two.
pub type StateId = usize;

/// An edge label: a concrete character, the empty transition, or "any character".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Epsilon,
    Any,
    Char(char),
}

/// A non-deterministic automaton with epsilon-closure and wildcard (`ANY`) edges.
#[derive(Debug, Default)]
pub struct Nfa {
    transitions: HashMap<StateId, HashMap<Label, HashSet<StateId>>>,
    final_states: HashSet<StateId>,
    start: StateId,
    next_state: StateId,
}

impl Nfa {
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
            final_states: HashSet::new(),
            start: 0,
            next_state: 1,
        }
    }

    pub fn start_state(&self) -> StateId {
        self.start
    }

    /// Allocate a fresh state id. State 0 is always the start state.
    pub fn new_state(&mut self) -> StateId {
        let id = self.next_state;
        self.next_state += 1;
        id
    }

    pub fn add_transition(&mut self, src: StateId, label: Label, dest: StateId) {
        self.transitions
            .entry(src)
            .or_default()
            .entry(label)
            .or_default()
            .insert(dest);
    }

    pub fn add_final(&mut self, state: StateId) {
        self.final_states.insert(state);
    }

    fn epsilon_closure(&self, states: &HashSet<StateId>) -> HashSet<StateId> {
        let mut result = states.clone();
        let mut frontier: Vec<StateId> = states.iter().copied().collect();
        while let Some(state) = frontier.pop() {
            if let Some(edges) = self.transitions.get(&state) {
                if let Some(dests) = edges.get(&Label::Epsilon) {
                    for &d in dests {
                        if result.insert(d) {
                            frontier.push(d);
                        }
                    }
                }
            }
        }
        result
    }

    fn is_final(&self, states: &HashSet<StateId>) -> bool {
        states.iter().any(|s| self.final_states.contains(s))
    }

    /// `next_state(S, c)`: epsilon-closure of the union of labelled and `ANY` edges from `S`.
    fn next_states(&self, states: &HashSet<StateId>, label: Label) -> HashSet<StateId> {
        let mut dest = HashSet::new();
        for s in states {
            if let Some(edges) = self.transitions.get(s) {
                if let Some(d) = edges.get(&label) {
                    dest.extend(d);
                }
                if let Some(d) = edges.get(&Label::Any) {
                    dest.extend(d);
                }
            }
        }
        self.epsilon_closure(&dest)
    }

    fn outgoing_labels(&self, states: &HashSet<StateId>) -> HashSet<Label> {
        let mut labels = HashSet::new();
        for s in states {
            if let Some(edges) = self.transitions.get(s) {
                labels.extend(edges.keys().copied());
            }
        }
        labels.remove(&Label::Epsilon);
        labels
    }

    /// Subset construction: determinise this NFA into a [`Dfa`].
    ///
    /// A labelled edge for `c` always wins over a state's default (`ANY`)
    /// edge; the default only fires for characters with no explicit edge.
    pub fn to_dfa(&self) -> Dfa {
        fn sorted_key(set: &HashSet<StateId>) -> Vec<StateId> {
            let mut v: Vec<StateId> = set.iter().copied().collect();
            v.sort_unstable();
            v
        }

        let start_set = self.epsilon_closure(&HashSet::from([self.start]));
        let mut state_ids: HashMap<Vec<StateId>, StateId> = HashMap::new();
        let mut dfa_states: Vec<DfaState> = Vec::new();

        state_ids.insert(sorted_key(&start_set), 0);
        dfa_states.push(DfaState::new(self.is_final(&start_set)));

        let mut queue: VecDeque<(StateId, HashSet<StateId>)> = VecDeque::new();
        queue.push_back((0, start_set));

        while let Some((id, nfa_states)) = queue.pop_front() {
            for label in self.outgoing_labels(&nfa_states) {
                let dest_set = self.next_states(&nfa_states, label);
                if dest_set.is_empty() {
                    continue;
                }
                let dest_key = sorted_key(&dest_set);
                let dest_id = match state_ids.get(&dest_key) {
                    Some(&existing) => existing,
                    None => {
                        let new_id = dfa_states.len();
                        dfa_states.push(DfaState::new(self.is_final(&dest_set)));
                        state_ids.insert(dest_key, new_id);
                        queue.push_back((new_id, dest_set));
                        new_id
                    }
                };
                match label {
                    Label::Any => dfa_states[id].default = Some(dest_id),
                    Label::Char(c) => {
                        dfa_states[id].labelled.insert(c, dest_id);
                    }
                    Label::Epsilon => unreachable!("epsilon edges never survive closure"),
                }
            }
        }

        Dfa {
            states: dfa_states,
            start: 0,
        }
    }
}

#[derive(Debug, Clone)]
struct DfaState {
    labelled: BTreeMap<char, StateId>,
    default: Option<StateId>,
    is_final: bool,
}

impl DfaState {
    fn new(is_final: bool) -> Self {
        Self {
            labelled: BTreeMap::new(),
            default: None,
            is_final,
        }
    }
}

/// A deterministic automaton: per-state labelled edges plus an optional
/// default (`ANY`) edge, as produced by [`Nfa::to_dfa`].
#[derive(Debug, Clone)]
pub struct Dfa {
    states: Vec<DfaState>,
    start: StateId,
}

impl Dfa {
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.states[state].is_final
    }

    /// Labelled edge for `c` if present, else the state's default edge.
    pub fn next_state(&self, state: StateId, c: char) -> Option<StateId> {
        let s = &self.states[state];
        s.labelled.get(&c).copied().or(s.default)
    }

    pub(crate) fn labelled_edges(&self, state: StateId) -> &BTreeMap<char, StateId> {
        &self.states[state].labelled
    }

    pub(crate) fn default_edge(&self, state: StateId) -> Option<StateId> {
        self.states[state].default
    }
}
