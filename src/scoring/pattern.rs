// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which filenames are generated API reference pages?
//!
//! The rule works on path segments, not raw substrings. A filename is generated
//! reference documentation when:
//!
//! ```text
//! .../reference/modules/<module>/.../autodoc.html
//!     └──── root ─────┘ └ non-empty ┘  └─ leaf ─┘
//! ```
//!
//! - the last segment is exactly the leaf (`autodoc.html`),
//! - the root segments (`reference`, `modules`) appear consecutively somewhere
//!   before it,
//! - the segment right after the root is non-empty. Any name will do, even
//!   the leaf's own.
//!
//! Anything between the module segment and the leaf is allowed, so
//! `reference/modules/foo/bar/autodoc.html` still counts. Whole segments must
//! match: `myreference/modules/foo/autodoc.html` does not.
//!
//! The filename is matched literally. `?` and `#` are ordinary characters, so
//! `.../autodoc.html#std.print` does not end in the leaf and is not generated.
//! In a URL the scheme and host just become extra leading segments.

use std::sync::OnceLock;

use crate::types::SearchResult;

/// Default root segments under which generated module pages live.
pub const DEFAULT_ROOT: [&str; 2] = ["reference", "modules"];

/// Default leaf file name of a generated module page.
pub const DEFAULT_LEAF: &str = "autodoc.html";

/// Segment-based predicate for generated reference pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocsPattern {
    root: Vec<String>,
    leaf: String,
}

impl Default for GeneratedDocsPattern {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.iter().map(|s| (*s).to_string()).collect(),
            leaf: DEFAULT_LEAF.to_string(),
        }
    }
}

impl GeneratedDocsPattern {
    /// Build a pattern from explicit root segments and leaf name.
    ///
    /// No validation here; `ScoringConfig::validate` rejects empty or
    /// slash-containing segments before they get this far.
    pub fn new<I, S>(root: I, leaf: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.into_iter().map(Into::into).collect(),
            leaf: leaf.into(),
        }
    }

    pub fn root(&self) -> &[String] {
        &self.root
    }

    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// Does this path point at a generated reference page?
    pub fn matches(&self, path: &str) -> bool {
        let segments: Vec<&str> = path.split('/').collect();

        let Some((last, parents)) = segments.split_last() else {
            return false;
        };
        if *last != self.leaf {
            return false;
        }

        let root_len = self.root.len();
        // Need room for the root plus one module segment before the leaf.
        if parents.len() < root_len + 1 {
            return false;
        }

        (0..parents.len() - root_len).any(|start| {
            let window = &parents[start..start + root_len];
            let module = parents[start + root_len];
            !module.is_empty()
                && window
                    .iter()
                    .zip(self.root.iter())
                    .all(|(segment, expected)| *segment == expected.as_str())
        })
    }

    /// Classify a result by its filename. A missing filename never matches.
    pub fn matches_result(&self, result: &SearchResult) -> bool {
        result.filename().is_some_and(|path| self.matches(path))
    }
}

/// Shared default pattern.
fn default_pattern() -> &'static GeneratedDocsPattern {
    static DEFAULT: OnceLock<GeneratedDocsPattern> = OnceLock::new();
    DEFAULT.get_or_init(GeneratedDocsPattern::default)
}

/// Is this path a generated reference page under the default layout?
///
/// Shorthand for `GeneratedDocsPattern::default().matches(path)`.
pub fn is_generated_reference(path: &str) -> bool {
    default_pattern().matches(path)
}
