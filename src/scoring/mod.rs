// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidate results get their numbers.
//!
//! Three layers, each testable alone. `pattern` decides whether a filename is
//! a generated reference page. `core` turns that decision into a score. The
//! `ranking` harness applies whatever scorer it was given to a result list.

mod core;
pub mod pattern;
pub mod ranking;

pub use self::core::*;
