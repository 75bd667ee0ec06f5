//! Scenario-style integration tests beyond the baseline scenarios in
//! `src/lib.rs`'s own `#[cfg(test)]` module (alongside the public-API
//! doctest): combinations of strategies with data-source filtering.

use std::collections::HashSet;

use super::common::{dictionary, sources};
use taxamatch::Finder;

#[test]
fn letter_bucket_match_respects_data_source_filter() {
    let finder = Finder::new(dictionary(&[
        ("escherichia coli", &["col"]),
        ("enterococcus coli", &["other"]),
    ]));
    let hits = finder.find_all_matches("e. coli", &sources(&["col"]));
    assert_eq!(hits, vec!["Escherichia coli".to_string()]);
}

#[test]
fn letter_bucket_match_excluded_by_data_source_filter() {
    let finder = Finder::new(dictionary(&[("escherichia coli", &["col"])]));
    let hits = finder.find_all_matches("e. coli", &sources(&["other"]));
    assert!(hits.is_empty());
}

#[test]
fn space_gluing_combines_with_data_source_filter() {
    let finder = Finder::new(dictionary(&[
        ("eurytellina tellinoides", &["gbif"]),
        ("eurytellina radiata", &["col"]),
    ]));
    let hits = finder.find_all_matches("eury tellina tellinoides", &sources(&["gbif"]));
    assert_eq!(hits, vec!["Eurytellina tellinoides".to_string()]);
}

#[test]
fn que_exception_word_stays_reachable_by_edit_distance() {
    // "denique" is a que-exception, so the stem strategy's dictionary
    // key keeps it whole. "demique" (one substitution away, and not
    // itself an exception) gets its trailing "que" stripped by the stem
    // strategy, so stem alone doesn't find it; the dispatcher falls
    // through to verbatim, which compares both words unstemmed and
    // finds the one-substitution match.
    let finder = Finder::new(dictionary(&[("rex denique", &["A"])]));
    let hits = finder.find_all_matches("rex demique", &HashSet::new());
    assert_eq!(hits, vec!["Rex denique".to_string()]);
}

#[test]
fn unknown_query_against_empty_dictionary_is_empty() {
    let finder = Finder::new(dictionary(&[]));
    assert!(finder.find_all_matches("anything", &HashSet::new()).is_empty());
}
