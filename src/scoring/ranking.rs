// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored results get sorted.
//!
//! The ranker owns a scorer, handed in at construction. There is no global
//! registry to look one up in, so a ranker can never run before its scorer
//! exists and two rankers with different scorers can live side by side.
//!
//! Sort order:
//! 1. **Effective score** - descending, NaN last
//! 2. **Title** - case-insensitive alphabetical tiebreaker
//! 3. **Position** - original candidate order, for absolute determinism
//!
//! Nothing is ever dropped except by an explicit `limit`.

use std::cmp::Ordering;

use serde::Serialize;

use crate::scoring::core::ResultScorer;
use crate::types::SearchResult;

/// A candidate together with the score the scorer gave it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub result: SearchResult,
    /// What the scorer returned. Compare with `result.score` to see overrides.
    pub score: f64,
    /// Index in the candidate list as the host produced it.
    #[serde(skip)]
    pub position: usize,
}

impl RankedResult {
    /// Did the scorer change this result's score?
    pub fn is_overridden(&self) -> bool {
        self.score.to_bits() != self.result.score.to_bits()
    }
}

/// Summary of one ranking pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankStats {
    pub total: usize,
    pub overridden: usize,
}

/// Compare two ranked results.
///
/// Returns `Ordering::Less` when `a` should come first.
pub fn compare_ranked(a: &RankedResult, b: &RankedResult) -> Ordering {
    // Primary: score descending, NaN sorts after every number
    let by_score = match (a.score.is_nan(), b.score.is_nan()) {
        (false, false) => b.score.total_cmp(&a.score),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    };

    by_score
        .then_with(|| {
            // Secondary: title, case-insensitive
            let a_title = a.result.title.to_lowercase();
            let b_title = b.result.title.to_lowercase();
            a_title.cmp(&b_title)
        })
        .then_with(|| a.position.cmp(&b.position))
}

/// Applies an injected scorer to candidate lists.
#[derive(Debug, Clone)]
pub struct Ranker<S> {
    scorer: S,
    limit: Option<usize>,
}

impl<S: ResultScorer> Ranker<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            limit: None,
        }
    }

    /// Keep at most `limit` results after sorting.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score every candidate once and sort.
    pub fn rank(&self, results: Vec<SearchResult>) -> Vec<RankedResult> {
        let scored = results
            .into_iter()
            .enumerate()
            .map(|(position, result)| self.score_one(position, result))
            .collect();
        self.finish(scored)
    }

    /// Same output as [`Ranker::rank`], scoring on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn rank_parallel(&self, results: Vec<SearchResult>) -> Vec<RankedResult> {
        use rayon::prelude::*;

        let scored = results
            .into_par_iter()
            .enumerate()
            .map(|(position, result)| self.score_one(position, result))
            .collect();
        self.finish(scored)
    }

    fn score_one(&self, position: usize, result: SearchResult) -> RankedResult {
        let score = self.scorer.score(&result);
        RankedResult {
            result,
            score,
            position,
        }
    }

    fn finish(&self, mut ranked: Vec<RankedResult>) -> Vec<RankedResult> {
        ranked.sort_by(compare_ranked);

        let stats = rank_stats(&ranked);
        tracing::debug!(
            total = stats.total,
            overridden = stats.overridden,
            "ranked candidate results"
        );

        if let Some(limit) = self.limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

/// Count how many results the scorer overrode.
pub fn rank_stats(ranked: &[RankedResult]) -> RankStats {
    RankStats {
        total: ranked.len(),
        overridden: ranked.iter().filter(|r| r.is_overridden()).count(),
    }
}
