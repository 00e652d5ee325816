//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so tests don't each invent their own.

#![doc(hidden)]

use crate::types::SearchResult;

/// A hand-written guide page with the given title and score.
pub fn make_guide(title: &str, score: f64) -> SearchResult {
    let slug = title.to_lowercase().replace(' ', "-");
    SearchResult {
        doc_name: format!("guide/{}", slug),
        title: title.to_string(),
        anchor: String::new(),
        descr: format!("Guide to {}", title),
        score,
        filename: Some(format!("guide/{}.html", slug)),
    }
}

/// A generated module page for `module`.
pub fn make_autodoc(module: &str, score: f64) -> SearchResult {
    SearchResult {
        doc_name: format!("reference/modules/{}/autodoc", module),
        title: module.to_string(),
        anchor: String::new(),
        descr: format!("API reference for {}", module),
        score,
        filename: Some(format!("reference/modules/{}/autodoc.html", module)),
    }
}

/// A result with an explicit filename, or none at all.
pub fn make_result(title: &str, score: f64, filename: Option<&str>) -> SearchResult {
    SearchResult {
        doc_name: title.to_string(),
        title: title.to_string(),
        anchor: String::new(),
        descr: String::new(),
        score,
        filename: filename.map(str::to_string),
    }
}
