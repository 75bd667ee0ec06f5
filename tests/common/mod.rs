//! Shared test fixtures.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use taxamatch::Dictionary;

/// Build a [`Dictionary`] from `(full_name, &[source_ids])` pairs.
pub fn dictionary(pairs: &[(&str, &[&str])]) -> Dictionary {
    let mut entries = HashMap::new();
    for (name, sources) in pairs {
        entries.insert(
            (*name).to_string(),
            sources.iter().map(|s| s.to_string()).collect(),
        );
    }
    Dictionary::new(entries)
}

/// Build a `HashSet<String>` source filter from string slices; `&[]` means
/// "no filter".
pub fn sources(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}
