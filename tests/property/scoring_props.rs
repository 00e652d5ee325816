//! Properties of the generated-docs scorer.

use docrank::{
    is_generated_reference, score, GeneratedDocsScorer, ResultScorer, SearchResult,
    GENERATED_DOC_PENALTY,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// A single non-empty path segment without separators.
fn segment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9_.-]{1,10}").unwrap()
}

/// Zero or more leading directories.
fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 0..4).prop_map(|segs| {
        segs.iter().map(|s| format!("{}/", s)).collect::<String>()
    })
}

/// Paths that are generated reference pages by construction.
fn generated_path_strategy() -> impl Strategy<Value = String> {
    (
        prefix_strategy(),
        segment_strategy(),
        prop::collection::vec(segment_strategy(), 0..3),
    )
        .prop_map(|(prefix, module, nested)| {
            let nested: String = nested.iter().map(|s| format!("{}/", s)).collect();
            format!("{}reference/modules/{}/{}autodoc.html", prefix, module, nested)
        })
}

/// Arbitrary host scores, including negatives and huge values.
fn score_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![0.0..1000.0f64, -1000.0..0.0f64, Just(0.0), Just(f64::MAX)]
}

fn result_with(filename: Option<String>, score: f64) -> SearchResult {
    SearchResult::new("doc", "Title", "", "descr", score, filename)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every generated path scores the penalty, whatever came in.
    #[test]
    fn generated_paths_always_score_penalty(
        path in generated_path_strategy(),
        incoming in score_strategy(),
    ) {
        prop_assert!(is_generated_reference(&path), "{} should match", path);
        let result = result_with(Some(path), incoming);
        prop_assert_eq!(score(&result), GENERATED_DOC_PENALTY);
    }

    /// Output is either the penalty (on a match) or the input score (otherwise).
    #[test]
    fn override_or_identity(
        path in "[a-z/._]{0,40}",
        incoming in score_strategy(),
    ) {
        let result = result_with(Some(path.clone()), incoming);
        let out = GeneratedDocsScorer::default().score(&result);
        if is_generated_reference(&path) {
            prop_assert_eq!(out, GENERATED_DOC_PENALTY);
        } else {
            prop_assert_eq!(out.to_bits(), incoming.to_bits());
        }
    }

    /// Paths that don't end in the leaf are never demoted.
    #[test]
    fn other_leaves_pass_through(
        prefix in prefix_strategy(),
        leaf in "[a-z]{1,8}\\.html",
        incoming in score_strategy(),
    ) {
        prop_assume!(leaf != "autodoc.html");
        let path = format!("{}reference/modules/foo/{}", prefix, leaf);
        let result = result_with(Some(path), incoming);
        prop_assert_eq!(score(&result).to_bits(), incoming.to_bits());
    }

    /// Missing filenames never change the score.
    #[test]
    fn missing_filename_is_identity(incoming in score_strategy()) {
        let result = result_with(None, incoming);
        prop_assert_eq!(score(&result).to_bits(), incoming.to_bits());
    }

    /// Arbitrary unicode never panics and obeys override-or-identity.
    #[test]
    fn arbitrary_strings_never_panic(path in "\\PC{0,60}", incoming in score_strategy()) {
        let out = score(&result_with(Some(path), incoming));
        prop_assert!(out == GENERATED_DOC_PENALTY || out.to_bits() == incoming.to_bits());
    }

    /// Same input, same output.
    #[test]
    fn scoring_is_pure(path in generated_path_strategy(), incoming in score_strategy()) {
        let result = result_with(Some(path), incoming);
        let before = result.clone();
        let first = score(&result);
        let second = score(&result);
        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert_eq!(result, before);
    }
}
