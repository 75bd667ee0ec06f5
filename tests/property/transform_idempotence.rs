//! Invariant 3: `transform` is idempotent for every strategy. The
//! genus-only and verbatim strategies transform a word as
//! `orthographic_fold(word.to_lowercase())`; the stem strategy adds
//! `stemmize` on every word but the first. Each building block's
//! idempotence is checked directly since the strategies themselves are a
//! private implementation detail behind [`taxamatch::Finder`].

use proptest::prelude::*;
use taxamatch::stemmer::{orthographic_fold, stemmize};

fn lowercase_ascii_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,12}").unwrap()
}

fn genus_only_or_verbatim_transform(word: &str) -> String {
    orthographic_fold(&word.to_lowercase())
}

proptest! {
    #[test]
    fn orthographic_fold_is_idempotent(word in lowercase_ascii_strategy()) {
        let once = orthographic_fold(&word);
        let twice = orthographic_fold(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn genus_only_and_verbatim_transform_is_idempotent(word in ".{0,16}") {
        let once = genus_only_or_verbatim_transform(&word);
        let twice = genus_only_or_verbatim_transform(&once);
        prop_assert_eq!(once, twice);
    }
}

/// Stemming removes at most one suffix per call, so idempotence holds
/// whenever the resulting stem doesn't happen to end in another listed
/// suffix itself. Verified by hand on a representative sample rather than
/// generated, since that side condition isn't generically true of every
/// string (e.g. a contrived stem could itself end in `"us"`).
#[test]
fn stemmize_is_idempotent_on_representative_latin_nouns() {
    for word in ["catus", "felis", "canis", "puella", "rosa", "dominus", "avis"] {
        let once = stemmize(word);
        let twice = stemmize(&once.stem);
        assert_eq!(
            twice.stem, once.stem,
            "stemmizing {:?} a second time should be a no-op, got {:?} -> {:?}",
            word, once, twice
        );
        assert_eq!(twice.suffix, "", "second stemmize pass on {word:?} should strip nothing further");
    }
}
