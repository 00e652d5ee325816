// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docrank command-line interface.
//!
//! Three subcommands: `rank` to score and sort a dump of host records,
//! `score` to score a single record, and `classify` to check which paths the
//! generated-docs rule would demote. All of them take the same scorer config.

pub mod display;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docrank",
    about = "Demote generated API reference pages in documentation search results",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Scorer options shared by every subcommand.
#[derive(Args, Clone, Debug)]
pub struct ScorerArgs {
    /// Path to a JSON scoring config (penalty, root, leaf)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the penalty given to generated reference pages
    #[arg(long, allow_hyphen_values = true)]
    pub penalty: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and sort a JSON array of host records
    Rank {
        /// File holding the records; reads stdin when omitted or "-"
        file: Option<String>,

        #[command(flatten)]
        scorer: ScorerArgs,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Score a single JSON record, e.g. '["Intro", "Intro", "", "", 87, "guide/intro.html"]'
    Score {
        /// The record as a six-element JSON array
        record: String,

        #[command(flatten)]
        scorer: ScorerArgs,
    },

    /// Report whether each path is a generated reference page
    Classify {
        /// Paths or URLs to classify
        #[arg(required = true)]
        paths: Vec<String>,

        #[command(flatten)]
        scorer: ScorerArgs,
    },
}
