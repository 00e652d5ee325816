// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the generated-docs predicate and scorer.
//!
//! Any filename, any score: the scorer returns either the penalty or the
//! incoming score, never anything else, and never panics.

#![no_main]

use arbitrary::Arbitrary;
use docrank::{
    is_generated_reference, GeneratedDocsScorer, ResultScorer, SearchResult, GENERATED_DOC_PENALTY,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    filename: Option<String>,
    score: f64,
}

fuzz_target!(|input: Input| {
    let generated = input
        .filename
        .as_deref()
        .map(is_generated_reference)
        .unwrap_or(false);

    let result = SearchResult::new("doc", "title", "", "", input.score, input.filename);
    let out = GeneratedDocsScorer::default().score(&result);

    // INVARIANT: override or identity
    if generated {
        assert_eq!(out, GENERATED_DOC_PENALTY);
    } else {
        assert_eq!(out.to_bits(), input.score.to_bits());
    }

    // INVARIANT: pure
    assert_eq!(out.to_bits(), GeneratedDocsScorer::default().score(&result).to_bits());
});
