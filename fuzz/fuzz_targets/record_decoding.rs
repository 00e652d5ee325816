// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for host record decoding.
//!
//! Arbitrary bytes either decode or return an error. Whatever decodes must
//! rank without losing a result.

#![no_main]

use docrank::{decode_results, GeneratedDocsScorer, Ranker};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(results) = decode_results(json) {
        let n = results.len();
        let ranked = Ranker::new(GeneratedDocsScorer::default()).rank(results);
        assert_eq!(ranked.len(), n, "ranking dropped a result");
    }
});
