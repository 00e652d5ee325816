//! Result scoring hook for documentation search.
//!
//! Generated API reference pages (one `autodoc.html` per module) repeat the
//! same vocabulary on every page, so a default relevance scorer ranks them far
//! too high for common terms. This crate demotes them to a flat penalty and
//! leaves every other result's score alone.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌───────────────────┐
//! │  types.rs   │────▶│ scoring/pattern  │────▶│  scoring/core     │
//! │(SearchResult│     │ (segment-based   │     │ (ResultScorer,    │
//! │ JSON codec) │     │  predicate)      │     │  penalty = -5)    │
//! └─────────────┘     └──────────────────┘     └───────────────────┘
//!        │                                               │
//!        ▼                                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       scoring/ranking                           │
//! │      Ranker<S>: injected scorer, deterministic sort, limit      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use docrank::{GeneratedDocsScorer, Ranker, ResultScorer, SearchResult};
//!
//! let generated = SearchResult::new(
//!     "Foo class", "Foo", "", "A foo.", 10.0,
//!     Some("reference/modules/foo/autodoc.html".to_string()),
//! );
//! let guide = SearchResult::new(
//!     "Intro", "Getting Started", "#intro", "Intro guide.", 87.0,
//!     Some("guide/intro.html".to_string()),
//! );
//!
//! let scorer = GeneratedDocsScorer::default();
//! assert_eq!(scorer.score(&generated), -5.0);
//! assert_eq!(scorer.score(&guide), 87.0);
//!
//! let ranked = Ranker::new(scorer).rank(vec![generated, guide]);
//! assert_eq!(ranked[0].result.title, "Getting Started");
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod scoring;
pub mod testing;
mod types;

// Re-exports for public API
pub use config::ScoringConfig;
pub use error::{DocrankError, Result};
pub use scoring::pattern::{is_generated_reference, GeneratedDocsPattern};
pub use scoring::ranking::{compare_ranked, rank_stats, RankStats, RankedResult, Ranker};
pub use scoring::{score, DefaultScorer, GeneratedDocsScorer, ResultScorer, GENERATED_DOC_PENALTY};
pub use types::{decode_result, decode_results, SearchResult, RECORD_ARITY};
