//! Invariant 4: stemming a word ending in a listed noun suffix, where
//! stripping leaves at least 2 characters, reconstructs the folded word as
//! `stem + suffix`.

use proptest::prelude::*;
use taxamatch::stemmer::stemmize;

const NOUN_SUFFIXES: &[&str] = &[
    "ibus", "ius", "ae", "am", "as", "em", "es", "ia", "is", "nt", "os", "ud", "um", "us", "a",
    "e", "i", "o", "u",
];

fn stem_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,10}").unwrap()
}

fn suffix_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(NOUN_SUFFIXES).prop_map(str::to_string)
}

proptest! {
    #[test]
    fn stem_plus_suffix_reconstructs_the_word(stem in stem_strategy(), suffix in suffix_strategy()) {
        // Build a word with no 'j'/'v' so orthographic folding is a no-op,
        // and whose stem doesn't itself end in a longer listed suffix that
        // would be tried first (the stem strategy draws from [a-z]{2,10}
        // without 'j'/'v' but may coincidentally end in one; skip those).
        let stem: String = stem.chars().filter(|c| *c != 'j' && *c != 'v').collect();
        if stem.chars().count() < 2 {
            return Ok(());
        }
        let word = format!("{stem}{suffix}");
        if NOUN_SUFFIXES.iter().any(|s| s.len() > suffix.len() && word.ends_with(s)) {
            return Ok(());
        }
        // "-que" unconditionally strips first, ahead of this suffix table,
        // for anything not on the fixed exceptions list (invariant 4 is
        // about the suffix table alone).
        if word.ends_with("que") {
            return Ok(());
        }

        let result = stemmize(&word);
        prop_assert_eq!(format!("{}{}", result.stem, result.suffix), word);
        prop_assert_eq!(result.suffix, suffix);
    }

    #[test]
    fn stems_shorter_than_two_chars_are_left_whole(suffix in suffix_strategy()) {
        // A single leading consonant plus a suffix leaves a 0- or 1-char
        // stem, which the stemmer refuses to strip down to.
        let word = format!("x{suffix}");
        if word.chars().count() - suffix.chars().count() >= 2 {
            return Ok(());
        }
        let result = stemmize(&word);
        prop_assert_eq!(result.stem, word);
        prop_assert_eq!(result.suffix, "");
    }
}
