//! Host records in, effective scores out.

use docrank::{decode_result, score, GeneratedDocsScorer, ResultScorer, GENERATED_DOC_PENALTY};

#[test]
fn test_generated_reference_record_scores_penalty() {
    let result = decode_result(
        r#"["Foo class", "Foo", "", "A foo.", 10, "reference/modules/foo/autodoc.html"]"#,
    )
    .unwrap();
    assert_eq!(score(&result), -5.0);
}

#[test]
fn test_guide_record_keeps_score() {
    let result = decode_result(
        r##"["Intro", "Getting Started", "#intro", "Intro guide.", 87, "guide/intro.html"]"##,
    )
    .unwrap();
    assert_eq!(score(&result), 87.0);
}

#[test]
fn test_identity_example() {
    let result = decode_result(r#"["Doc", "Doc", "", "", 42, "guide/intro.html"]"#).unwrap();
    assert_eq!(GeneratedDocsScorer::default().score(&result), 42.0);
}

#[test]
fn test_null_filename_falls_through() {
    let result = decode_result(r#"["Doc", "Doc", "", "", 13, null]"#).unwrap();
    assert_eq!(score(&result), 13.0);
}

#[test]
fn test_numeric_filename_falls_through() {
    let result = decode_result(r#"["Doc", "Doc", "", "", 13, 404]"#).unwrap();
    assert_eq!(score(&result), 13.0);
}

#[test]
fn test_scoring_twice_gives_same_answer() {
    let scorer = GeneratedDocsScorer::default();
    let generated = decode_result(
        r#"["Foo class", "Foo", "", "A foo.", 10, "reference/modules/foo/autodoc.html"]"#,
    )
    .unwrap();
    assert_eq!(scorer.score(&generated), scorer.score(&generated));
    assert_eq!(scorer.score(&generated), GENERATED_DOC_PENALTY);
}

#[test]
fn test_free_function_agrees_with_default_scorer() {
    let scorer = GeneratedDocsScorer::default();
    for json in [
        r#"["a", "a", "", "", 1, "reference/modules/a/autodoc.html"]"#,
        r#"["b", "b", "", "", 2, "reference/modules//autodoc.html"]"#,
        r#"["c", "c", "", "", 3, "guide/c.html"]"#,
        r#"["d", "d", "", "", 4, null]"#,
    ] {
        let result = decode_result(json).unwrap();
        assert_eq!(score(&result), scorer.score(&result), "{}", json);
    }
}

#[test]
fn test_literal_filename_decides_the_score() {
    for (filename, expected) in [
        ("a?b/reference/modules/foo/autodoc.html", -5.0),
        ("reference/modules/std/autodoc.html#std.print", 42.0),
        ("reference/modules/std/autodoc.html?x=1", 42.0),
    ] {
        let json = serde_json::json!(["Doc", "Doc", "", "", 42, filename]).to_string();
        let result = decode_result(&json).unwrap();
        assert_eq!(score(&result), expected, "{}", filename);
    }
}
