// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalisation and result presentation.

/// Strip leading/trailing whitespace, collapse internal whitespace runs to
/// a single space, and lowercase. Any further normalisation (the `j`/`v`
/// orthographic fold, stemming) is a per-strategy `transform`, not part of
/// this shared step.
pub fn normalize_query(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Capitalise the first character of `s`, leaving the rest untouched. A
/// presentation-only concern applied once, at the root `Finder`'s query
/// boundary; letter-bucket child `Finder`s never call this.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
