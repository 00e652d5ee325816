// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate search results as the host engine hands them over.
//!
//! The host speaks in positional six-element arrays:
//!
//! ```text
//! [docName, title, anchor, descr, score, filename]
//! ```
//!
//! `SearchResult` names those slots and keeps the same order on the wire. The
//! string slots decode leniently: `null` or a non-string becomes `""`, and for
//! `filename` becomes `None`. A missing filename can then never match the
//! generated-docs pattern, which is exactly the fallthrough the scorer wants.
//! Only the numeric `score` slot and the arity are strict, because there is no
//! sensible score to fall back to.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DocrankError, Result};

/// Number of positional fields in a host record.
pub const RECORD_ARITY: usize = 6;

/// One candidate result, prior to final ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Identifier of the containing document.
    pub doc_name: String,
    /// Display title.
    pub title: String,
    /// In-page anchor, often empty.
    pub anchor: String,
    /// Short description or snippet.
    pub descr: String,
    /// Relevance assigned by the host's default scorer.
    pub score: f64,
    /// Path or URL of the source file. `None` when the host sent no string.
    pub filename: Option<String>,
}

impl SearchResult {
    pub fn new(
        doc_name: impl Into<String>,
        title: impl Into<String>,
        anchor: impl Into<String>,
        descr: impl Into<String>,
        score: f64,
        filename: Option<String>,
    ) -> Self {
        Self {
            doc_name: doc_name.into(),
            title: title.into(),
            anchor: anchor.into(),
            descr: descr.into(),
            score,
            filename,
        }
    }

    /// The filename as a borrowed str, if there is one.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Build a result from the host's positional values.
    ///
    /// Errors are plain strings; callers attach the record index.
    pub fn from_values(values: &[Value]) -> std::result::Result<Self, String> {
        if values.len() != RECORD_ARITY {
            return Err(format!(
                "expected {} fields, got {}",
                RECORD_ARITY,
                values.len()
            ));
        }

        let score = score_from_value(&values[4])?;

        Ok(Self {
            doc_name: lenient_string(&values[0]),
            title: lenient_string(&values[1]),
            anchor: lenient_string(&values[2]),
            descr: lenient_string(&values[3]),
            score,
            filename: values[5].as_str().map(str::to_string),
        })
    }
}

fn lenient_string(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

fn score_from_value(value: &Value) -> std::result::Result<f64, String> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| format!("score {} is not representable as f64", n)),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(score) if score.is_finite() => Ok(score),
            Ok(_) => Err(format!("score {:?} is not a finite number", s)),
            Err(_) => Err(format!("score {:?} is not numeric", s)),
        },
        other => Err(format!("score must be a number, got {}", json_kind(other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Serialize for SearchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (
            &self.doc_name,
            &self.title,
            &self.anchor,
            &self.descr,
            self.score,
            &self.filename,
        )
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SearchResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<Value>::deserialize(deserializer)?;
        SearchResult::from_values(&values).map_err(de::Error::custom)
    }
}

/// Decode a JSON array of host records.
///
/// Reports the index of the first record that fails, so a bad line in a large
/// dump is easy to find.
pub fn decode_results(json: &str) -> Result<Vec<SearchResult>> {
    let raw: Vec<Value> = serde_json::from_str(json)?;

    raw.iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Array(values) => SearchResult::from_values(values)
                .map_err(|reason| DocrankError::invalid_record(index, reason)),
            other => Err(DocrankError::invalid_record(
                index,
                format!("expected an array, got {}", json_kind(other)),
            )),
        })
        .collect()
}

/// Decode a single host record.
pub fn decode_result(json: &str) -> Result<SearchResult> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(values) => SearchResult::from_values(&values)
            .map_err(|reason| DocrankError::invalid_record(0, reason)),
        other => Err(DocrankError::invalid_record(
            0,
            format!("expected an array, got {}", json_kind(&other)),
        )),
    }
}
