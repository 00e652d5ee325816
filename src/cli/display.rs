// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the docrank CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `DOCRANK_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and switches colors off when stdout is not a TTY.

use std::sync::OnceLock;

use docrank::{RankStats, RankedResult};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    // 1. Explicit override
    if let Ok(theme) = std::env::var("DOCRANK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Truncate to `max_len` chars, adding a ... prefix if needed
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let count = path.chars().count();
    if count <= max_len {
        path.to_string()
    } else {
        let tail: String = path.chars().skip(count + 3 - max_len).collect();
        format!("...{}", tail)
    }
}

/// Truncate to `max_len` chars, adding a ... suffix if needed
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// A titled section of a box: its label and content lines.
pub struct Section<'a> {
    pub label: &'a str,
    pub rows: Vec<String>,
}

/// Render sections as one box, each label on its own rule:
///
/// ```text
/// ┌─ LABEL ─────────┐
/// │ content         │
/// ├─ LABEL ─────────┤
/// │ content         │
/// └─────────────────┘
/// ```
pub fn render_box(sections: &[Section]) -> Vec<String> {
    let border = border_color();
    let mut lines = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        let (left, right) = if i == 0 { ('┌', '┐') } else { ('├', '┤') };
        let label_part = format!("─ {} ", themed(CYAN, &[BOLD], section.label));
        let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
        lines.push(format!(
            "{}{}{}{}{}{}{}{}",
            border,
            left,
            reset(),
            label_part,
            border,
            "─".repeat(remaining),
            right,
            reset()
        ));
        for content in &section.rows {
            let pad = BOX_WIDTH.saturating_sub(visible_len(content));
            lines.push(format!(
                "{}│{}{}{}{}│{}",
                border,
                reset(),
                content,
                " ".repeat(pad),
                border,
                reset()
            ));
        }
    }
    lines.push(format!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset()));
    lines
}

fn border_color() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded effective score. Overridden scores show in red.
pub fn score_value(score: f64, overridden: bool) -> String {
    let text = format!("{:>8.2}", score);
    if overridden {
        themed(RED, &[BOLD], &text)
    } else if score >= 50.0 {
        themed(GREEN, &[], &text)
    } else {
        themed(YELLOW, &[], &text)
    }
}

/// Label for a classification verdict
pub fn verdict_label(generated: bool) -> String {
    if generated {
        themed(RED, &[BOLD], "generated")
    } else {
        themed(GREEN, &[], "authored ")
    }
}

pub fn error_prefix() -> String {
    themed(RED, &[BOLD], "error:")
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Boxed table of ranked results with a summary footer.
pub fn print_ranked(ranked: &[RankedResult], stats: RankStats) {
    for line in render_box(&ranked_sections(ranked, stats)) {
        println!("{}", line);
    }
}

fn ranked_sections(ranked: &[RankedResult], stats: RankStats) -> Vec<Section<'static>> {
    let mut rows: Vec<String> = ranked
        .iter()
        .enumerate()
        .map(|(rank, entry)| {
            let filename = entry.result.filename().unwrap_or("-");
            format!(
                " {:>3} {} {} {}",
                rank + 1,
                score_value(entry.score, entry.is_overridden()),
                pad_right(&truncate_text(&entry.result.title, 28), 28),
                themed(GRAY, &[], &truncate_path(filename, 37)),
            )
        })
        .collect();
    if rows.is_empty() {
        rows.push(themed(GRAY, &[], "  no results"));
    }

    let summary = format!(
        "  {} results, {} overridden by the scorer",
        stats.total, stats.overridden
    );
    vec![
        Section {
            label: "RANKED RESULTS",
            rows,
        },
        Section {
            label: "SUMMARY",
            rows: vec![summary],
        },
    ]
}

/// One line per path: verdict then the path.
pub fn print_classification(path: &str, generated: bool) {
    println!("{}  {}", verdict_label(generated), path);
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
