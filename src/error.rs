// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the outer surfaces: record decoding, config loading, file I/O.
//!
//! Scoring and ranking never fail. A result the scorer cannot classify is
//! passed through with its original score, so nothing in `scoring` returns
//! a `Result`.

use std::io;

use thiserror::Error;

/// Everything that can go wrong before a result reaches the scorer.
#[derive(Error, Debug)]
pub enum DocrankError {
    /// Reading a records file or config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input was not valid JSON at all.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record had the wrong shape (arity, or a non-numeric score).
    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// A config file parsed but holds values the scorer cannot use.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl DocrankError {
    pub fn invalid_record<S: Into<String>>(index: usize, reason: S) -> Self {
        DocrankError::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        DocrankError::InvalidConfig(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DocrankError>;
