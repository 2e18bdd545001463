// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the tahqiq CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Colors are dropped
//! when stdout is not a TTY or `NO_COLOR` is set, so piped output is plain.
//!
//! # Theme detection order
//!
//! 1. `TAHQIQ_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme
//!
//! Arabic text carries combining marks that occupy no column, so widths are
//! measured with `visible_len`, which skips both ANSI escapes and marks.

use std::sync::OnceLock;
use tahqiq::normalize::chars::is_mark;
use tahqiq::{
    FabricationAnalysis, MatchType, SearchHit, Surah, ValidationResult, Verse, VerseRange,
};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("TAHQIQ_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light.
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
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
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
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, if colors are on.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Terminal columns `s` occupies: no ANSI escapes, no combining marks.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape && !is_mark(c) && !is_combining(c) {
            len += 1;
        }
    }
    len
}

/// Combining marks outside the Arabic tables `is_mark` covers.
fn is_combining(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{200B}'..='\u{200F}')
}

/// Greedy word wrap to `width` visible columns.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && visible_len(&line) + 1 + visible_len(word) > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{}{}{}{}│{}", border, reset(), content, " ".repeat(pad), border, reset());
}

/// One `row` per wrapped line, indented by one column.
pub fn wrapped_rows(text: &str) {
    for line in wrap(text, BOX_WIDTH - 2) {
        row(&format!(" {}", line));
    }
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}┌{}{}{}{}┐{}", border, reset(), label_part, border, "─".repeat(remaining), reset());
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}├{}{}{}{}┤{}", border, reset(), label_part, border, "─".repeat(remaining), reset());
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

fn border() -> String {
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

/// Color-coded verdict badge.
pub fn verdict_badge(match_type: MatchType) -> String {
    let label = format!("[{}]", match_type.to_string().to_uppercase());
    match match_type {
        MatchType::Exact => themed(GREEN, &[BOLD], &label),
        MatchType::Normalized => themed(BLUE, &[BOLD], &label),
        MatchType::None => themed(RED, &[BOLD], &label),
    }
}

/// Fabrication ratio as a percentage: green at 0, yellow below half, red above.
pub fn ratio_colored(ratio: f64) -> String {
    let text = format!("{:.1}%", ratio * 100.0);
    if ratio == 0.0 {
        themed(GREEN, &[BOLD], &text)
    } else if ratio < 0.5 {
        themed(YELLOW, &[BOLD], &text)
    } else {
        themed(RED, &[BOLD], &text)
    }
}

/// `label: value` with a dimmed label.
fn field(label: &str, value: &str) -> String {
    format!(" {} {}", themed(GRAY, &[DIM], &format!("{:<12}", label)), value)
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_validation(result: &ValidationResult) {
    section_top("VERDICT");
    row(&format!(" {}", verdict_badge(result.match_type)));
    if let Some(reference) = &result.reference {
        row(&field("reference", reference));
    }
    if let Some(verse) = &result.matched_verse {
        if verse.page > 0 {
            row(&field("page / juz", &format!("{} / {}", verse.page, verse.juz)));
        }
    }
    if let Some(index) = result.mismatch_index {
        row(&field("diverges at", &format!("character {}", index)));
    }

    if let Some(input) = &result.normalized_input {
        section_mid("NORMALIZED INPUT");
        wrapped_rows(input);
    }
    if let Some(expected) = &result.expected_normalized {
        section_mid("EXPECTED");
        wrapped_rows(expected);
    }
    if let Some(verse) = &result.matched_verse {
        section_mid("VERSE");
        wrapped_rows(&verse.text);
    }

    if !result.suggestions.is_empty() {
        section_mid("ALSO MATCHES");
        for suggestion in &result.suggestions {
            row(&format!(" {}", suggestion.reference));
        }
    }
    if let Some(matches) = &result.variant_matches {
        section_mid("RIWAYAT");
        for m in matches {
            row(&format!(
                " {:<8} {:<6} {}",
                m.riwaya.to_string(),
                m.verse.reference(),
                verdict_badge(m.match_type)
            ));
        }
    }
    section_bot();
}

pub fn print_fabrication(analysis: &FabricationAnalysis) {
    section_top("FABRICATION");
    row(&field(
        "fabricated",
        &format!(
            "{} of {} words ({})",
            analysis.stats.fabricated_words,
            analysis.stats.total_words,
            ratio_colored(analysis.stats.fabricated_ratio)
        ),
    ));
    section_mid("WORDS");
    let marked: Vec<String> = analysis
        .words
        .iter()
        .map(|w| {
            if w.is_fabricated {
                themed(RED, &[BOLD], &format!("[{}]", w.word))
            } else {
                w.word.clone()
            }
        })
        .collect();
    wrapped_rows(&marked.join(" "));
    section_bot();
}

pub fn print_verse(verse: &Verse) {
    section_top(&verse.reference());
    wrapped_rows(&verse.text);
    if verse.page > 0 {
        row(&field("page / juz", &format!("{} / {}", verse.page, verse.juz)));
    }
    section_bot();
}

pub fn print_range(range: &VerseRange) {
    let label = match (range.verses.first(), range.verses.last()) {
        (Some(first), Some(last)) => format!("{}:{}-{}", first.surah, first.ayah, last.ayah),
        _ => "RANGE".to_string(),
    };
    section_top(&label);
    for verse in &range.verses {
        wrapped_rows(&format!("{} ({})", verse.text, verse.ayah));
    }
    section_bot();
}

pub fn print_surah(surah: &Surah) {
    section_top(&format!("SURAH {}", surah.number));
    row(&field("name", &surah.name));
    row(&field("english", &surah.english_name));
    row(&field("verses", &surah.verses_count.to_string()));
    row(&field("revelation", &surah.revelation_type.to_string()));
    section_bot();
}

pub fn print_search(query: &str, hits: &[SearchHit]) {
    section_top("SEARCH");
    row(&field("query", query));
    row(&field("results", &hits.len().to_string()));
    for hit in hits {
        section_mid(&format!("{}  {:.2}", hit.verse.reference(), hit.similarity));
        wrapped_rows(&hit.verse.text);
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
