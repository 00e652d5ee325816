// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scorer configuration file.
//!
//! A small JSON document, every key optional:
//!
//! ```json
//! {
//!   "penalty": -5,
//!   "root": ["reference", "modules"],
//!   "leaf": "autodoc.html"
//! }
//! ```
//!
//! Unknown keys are rejected so a typo doesn't silently fall back to defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DocrankError, Result};
use crate::scoring::pattern::{GeneratedDocsPattern, DEFAULT_LEAF, DEFAULT_ROOT};
use crate::scoring::{GeneratedDocsScorer, GENERATED_DOC_PENALTY};

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default = "default_penalty")]
    pub penalty: f64,
    #[serde(default = "default_root")]
    pub root: Vec<String>,
    #[serde(default = "default_leaf")]
    pub leaf: String,
}

fn default_penalty() -> f64 {
    GENERATED_DOC_PENALTY
}

fn default_root() -> Vec<String> {
    DEFAULT_ROOT.iter().map(|s| (*s).to_string()).collect()
}

fn default_leaf() -> String {
    DEFAULT_LEAF.to_string()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            penalty: default_penalty(),
            root: default_root(),
            leaf: default_leaf(),
        }
    }
}

impl ScoringConfig {
    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded scoring config");
        Ok(config)
    }

    /// Parse and validate config JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of file values, then re-validate.
    pub fn with_overrides(mut self, penalty: Option<f64>) -> Result<Self> {
        if let Some(penalty) = penalty {
            self.penalty = penalty;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.penalty.is_finite() {
            return Err(DocrankError::invalid_config(format!(
                "penalty must be finite, got {}",
                self.penalty
            )));
        }
        if self.root.is_empty() {
            return Err(DocrankError::invalid_config("root must name at least one segment"));
        }
        for segment in self.root.iter().chain(std::iter::once(&self.leaf)) {
            validate_segment(segment)?;
        }
        Ok(())
    }

    pub fn pattern(&self) -> GeneratedDocsPattern {
        GeneratedDocsPattern::new(self.root.iter().cloned(), self.leaf.clone())
    }

    pub fn scorer(&self) -> GeneratedDocsScorer {
        GeneratedDocsScorer::new(self.pattern(), self.penalty)
    }
}

fn validate_segment(segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(DocrankError::invalid_config("path segments must not be empty"));
    }
    if segment.contains('/') {
        return Err(DocrankError::invalid_config(format!(
            "path segment {:?} must not contain '/'",
            segment
        )));
    }
    Ok(())
}
