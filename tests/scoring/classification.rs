//! Boundary cases for generated-docs detection.

use docrank::{is_generated_reference, GeneratedDocsPattern, GeneratedDocsScorer, ResultScorer};

use super::common::make_result;

#[test]
fn test_minimal_layout_matches() {
    assert!(is_generated_reference("reference/modules/foo/autodoc.html"));
}

#[test]
fn test_empty_module_name_is_not_generated() {
    assert!(!is_generated_reference("reference/modules//autodoc.html"));

    let result = make_result("Empty", 9.0, Some("reference/modules//autodoc.html"));
    assert_eq!(GeneratedDocsScorer::default().score(&result), 9.0);
}

#[test]
fn test_deeper_nesting_is_generated() {
    assert!(is_generated_reference("reference/modules/foo/bar/autodoc.html"));
    assert!(is_generated_reference("reference/modules/foo/bar/baz/autodoc.html"));
}

#[test]
fn test_leading_directories_allowed() {
    assert!(is_generated_reference("_build/html/reference/modules/foo/autodoc.html"));
    assert!(is_generated_reference("/reference/modules/foo/autodoc.html"));
}

#[test]
fn test_absolute_urls() {
    assert!(is_generated_reference(
        "https://docs.example.com/reference/modules/std/autodoc.html"
    ));
    assert!(!is_generated_reference(
        "https://docs.example.com/guides/std/autodoc.html"
    ));
}

#[test]
fn test_wrong_leaf_or_root() {
    assert!(!is_generated_reference("reference/modules/foo/autodoc.htm"));
    assert!(!is_generated_reference("reference/module/foo/autodoc.html"));
    assert!(!is_generated_reference("modules/reference/foo/autodoc.html"));
    assert!(!is_generated_reference("reference/modules/foo/autodoc.html/"));
}

#[test]
fn test_root_segments_are_case_sensitive() {
    assert!(!is_generated_reference("Reference/Modules/foo/autodoc.html"));
}

#[test]
fn test_pattern_accessors() {
    let pattern = GeneratedDocsPattern::default();
    assert_eq!(pattern.root().to_vec(), vec!["reference", "modules"]);
    assert_eq!(pattern.leaf(), "autodoc.html");
}

#[test]
fn test_query_and_fragment_characters_are_not_special() {
    assert!(is_generated_reference("a?b/reference/modules/foo/autodoc.html"));
    assert!(!is_generated_reference("reference/modules/foo/autodoc.html#Foo"));
    assert!(!is_generated_reference("reference/modules/foo/autodoc.html?q=foo"));
}

#[test]
fn test_module_segment_may_share_the_leaf_name() {
    assert!(is_generated_reference("reference/modules/autodoc.html/autodoc.html"));
}
