// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The scoring hook itself.
//!
//! Generated module pages repeat the same vocabulary over and over: parameter
//! names, "Returns", "Raises", the module boilerplate. The host's default
//! relevance can't tell that apart from a real content match, so every one of
//! those pages scores high for common terms and crowds out the hand-written
//! guides. Modelling that redundancy is hard. A flat penalty is not.
//!
//! # Key Invariant: Override or Identity
//!
//! For any result `r` and the default configuration:
//!
//! ```text
//! matches(r.filename)  =>  score(r) = GENERATED_DOC_PENALTY   (-5)
//! !matches(r.filename) =>  score(r) = r.score
//! ```
//!
//! There is no third outcome. The incoming score of a generated page is
//! ignored entirely, and a page that doesn't match is never touched.
//!
//! # Constants
//!
//! | Name                  | Value | Why this value |
//! |-----------------------|-------|----------------|
//! | GENERATED_DOC_PENALTY | -5.0  | Below every non-negative default score |

use crate::scoring::pattern::GeneratedDocsPattern;
use crate::types::SearchResult;

/// Score assigned to every generated reference page.
///
/// Default relevance scores are non-negative, so any negative constant sinks
/// these pages below all hand-written results in a descending sort.
pub const GENERATED_DOC_PENALTY: f64 = -5.0;

/// A pluggable result scorer.
///
/// Implementations must be pure: same input, same output, no I/O. That is what
/// lets the ranking harness score results in parallel without coordination.
pub trait ResultScorer: Send + Sync {
    /// The effective score for this result. Higher ranks higher.
    fn score(&self, result: &SearchResult) -> f64;
}

/// Closures are scorers.
///
/// ```ignore
/// let ranker = Ranker::new(|r: &SearchResult| r.score * 2.0);
/// ```
impl<F> ResultScorer for F
where
    F: Fn(&SearchResult) -> f64 + Send + Sync,
{
    fn score(&self, result: &SearchResult) -> f64 {
        self(result)
    }
}

/// The host's default relevance, unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultScorer;

impl ResultScorer for DefaultScorer {
    fn score(&self, result: &SearchResult) -> f64 {
        result.score
    }
}

/// Demotes generated reference pages, defers to the default score otherwise.
#[derive(Debug, Clone)]
pub struct GeneratedDocsScorer {
    pattern: GeneratedDocsPattern,
    penalty: f64,
}

impl Default for GeneratedDocsScorer {
    fn default() -> Self {
        Self {
            pattern: GeneratedDocsPattern::default(),
            penalty: GENERATED_DOC_PENALTY,
        }
    }
}

impl GeneratedDocsScorer {
    pub fn new(pattern: GeneratedDocsPattern, penalty: f64) -> Self {
        Self { pattern, penalty }
    }

    /// Same pattern, different penalty.
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn pattern(&self) -> &GeneratedDocsPattern {
        &self.pattern
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Would this result be demoted?
    pub fn is_demoted(&self, result: &SearchResult) -> bool {
        self.pattern.matches_result(result)
    }
}

impl ResultScorer for GeneratedDocsScorer {
    fn score(&self, result: &SearchResult) -> f64 {
        if self.pattern.matches_result(result) {
            self.penalty
        } else {
            result.score
        }
    }
}

/// Score one result with the default generated-docs rule.
pub fn score(result: &SearchResult) -> f64 {
    if crate::scoring::pattern::is_generated_reference(result.filename().unwrap_or("")) {
        GENERATED_DOC_PENALTY
    } else {
        result.score
    }
}
