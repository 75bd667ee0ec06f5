// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate matching of scientific names against a pre-indexed
//! dictionary of canonical names, each tagged with data-source
//! identifiers.
//!
//! A query is accepted against a dictionary entry when it lies within edit
//! distance 2 of it (fixed, not configurable) and — if the caller supplied
//! a non-empty set of data sources — the entry originates from at least one
//! of them.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌───────────────┐   ┌──────────────────┐
//! │  stemmer   │   │  edit_budget  │   │       fuzzy       │
//! │ (Latin noun│   │ (per-part edit│   │ NFA/DFA, Levenshtein│
//! │  suffixes) │   │  budget)      │   │ automaton, successor│
//! └─────┬──────┘   └──────┬────────┘   └─────────┬─────────┘
//!       │                 │                      │
//!       └────────┬────────┴──────────┬───────────┘
//!                 ▼                   ▼
//!          ┌─────────────┐     ┌──────────────┐
//!          │ strategies  │────▶│    finder    │
//!          │ (four       │     │ (pipeline    │
//!          │  matchers)  │     │  dispatcher) │
//!          └─────────────┘     └──────────────┘
//! ```
//!
//! `types` underlies all of the above: [`Dictionary`] is the immutable
//! input corpus, and `StrategyIndex` is the per-strategy `transformed_key
//! -> {full_name}` lookup structure every strategy in `strategies` builds
//! once and queries read-only thereafter.
//!
//! # Usage
//!
//! ```
//! use std::collections::{HashMap, HashSet};
//! use taxamatch::{Dictionary, Finder};
//!
//! let mut entries = HashMap::new();
//! entries.insert("Homo sapiens".to_string(), HashSet::from(["gbif".to_string()]));
//!
//! let finder = Finder::new(Dictionary::new(entries));
//! let hits = finder.find_all_matches("homo sapien", &HashSet::new());
//! assert_eq!(hits, vec!["Homo sapiens".to_string()]);
//! ```
//!
//! # Scope
//!
//! Loading a dictionary from disk, mapping names to data sources, logging,
//! and request routing are all external collaborators' jobs; this crate
//! accepts a fully materialised [`Dictionary`] at construction and answers
//! queries synchronously. See `src/main.rs` for a small CLI harness that
//! plays the "load from disk" role.

pub mod contracts;
pub mod edit_budget;
pub mod finder;
pub mod fuzzy;
pub mod stemmer;
mod strategies;
pub mod types;
mod utils;

pub use finder::Finder;
pub use types::{DataSources, Dictionary};
