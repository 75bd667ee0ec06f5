// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A minimal Latin noun stemmer, used to fold inflectional endings out of
//! species and infraspecific epithets before fuzzy matching.
//!
//! Orthographic fold first (`j` -> `i`, `v` -> `u`, the two letterforms
//! classical Latin orthography treats as interchangeable with their modern
//! counterparts), then a fixed, ordered table of noun suffixes, longest
//! first. A stem shorter than two characters after stripping is rejected in
//! favor of leaving the word untouched — `"a"` is more likely a guessed
//! ending than a genuine one-letter stem.

use std::sync::OnceLock;
use std::collections::HashSet;

/// `-que` ("and") is enclitic in Latin and almost always strippable, but a
/// closed set of words end in `que` as part of the root itself (`atque`,
/// `usque`, and compounds of `torqueo`/`coquo` among them) and must be left
/// whole.
const QUE_EXCEPTIONS: &[&str] = &[
    "atque", "quoque", "neque", "itaque", "absque", "apsque", "abusque", "adaeque", "adusque",
    "denique", "deque", "susque", "oblique", "peraeque", "plenisque", "quandoque", "quisque",
    "quaeque", "cuiusque", "cuique", "quemque", "quamque", "quaque", "quique", "quorumque",
    "quarumque", "quibusque", "quosque", "quasque", "quotusquisque", "quousque", "ubique",
    "undique", "usque", "uterque", "utique", "utroque", "utribique", "torque", "coque",
    "concoque", "contorque", "detorque", "decoque", "excoque", "extorque", "obtorque", "optorque",
    "retorque", "recoque", "attorque", "incoque", "intorque", "praetorque",
];

fn que_exceptions() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| QUE_EXCEPTIONS.iter().copied().collect())
}

/// Ordered longest-match-first: a word ending in `"ibus"` must be tried
/// against `"ibus"` before the shorter `"us"` would otherwise match first.
const NOUN_SUFFIXES: &[&str] = &[
    "ibus", "ius", "ae", "am", "as", "em", "es", "ia", "is", "nt", "os", "ud", "um", "us", "a",
    "e", "i", "o", "u",
];

/// A word split into a stem and the suffix stripped from it. `suffix` is
/// empty when nothing was stripped (no ending matched, the matched ending
/// would have left too short a stem, or the word was a `-que` exception).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub stem: String,
    pub suffix: String,
}

/// `j -> i`, `v -> u` fold applied ahead of stemming and of verbatim
/// comparison alike.
pub fn orthographic_fold(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'j' => 'i',
            'v' => 'u',
            other => other,
        })
        .collect()
}

/// Strip a Latin noun ending from `word`, applying the orthographic fold
/// first. `word` is assumed already lowercased.
pub fn stemmize(word: &str) -> Word {
    let mut folded = orthographic_fold(word);

    if folded.ends_with("que") {
        if que_exceptions().contains(folded.as_str()) {
            return Word { stem: folded, suffix: String::new() };
        }
        folded.truncate(folded.len() - "que".len());
    }

    for suffix in NOUN_SUFFIXES {
        if let Some(stem) = folded.strip_suffix(suffix) {
            if stem.chars().count() >= 2 {
                return Word {
                    stem: stem.to_string(),
                    suffix: (*suffix).to_string(),
                };
            }
            break;
        }
    }

    Word {
        stem: folded,
        suffix: String::new(),
    }
}
