//! Small text helpers for screen rendering.

use chrono::{DateTime, Local, Utc};
use ratatui::style::Color;
use textwrap::{wrap, Options};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display name derived from a category slug.
///
/// Hyphens become spaces and the first letter of every word is capitalized:
/// `"protocol-calls"` becomes `"Protocol Calls"`.
pub fn title_case_slug(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for ch in spaced.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    out
}

/// Timestamp in the reader's local time, e.g. `"May 1, 2024 10:00"`.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%b %-d, %Y %H:%M").to_string()
}

/// Date only, for list rows.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%b %-d, %Y").to_string()
}

/// Cut `text` to at most `max` terminal columns, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        cut.push(ch);
        used += w;
    }
    cut.push('…');
    cut
}

/// Word wrap to `width` columns. Existing line breaks are kept and
/// over-long words are split.
///
/// Indented lines (code blocks, quoted output) are preformatted and kept
/// as they are.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let options = Options::new(width.max(1)).break_words(true);
    let mut lines = Vec::new();
    for raw in text.lines() {
        if raw.starts_with([' ', '\t']) {
            lines.push(raw.to_string());
            continue;
        }
        lines.extend(wrap(raw, &options).into_iter().map(|cow| cow.into_owned()));
    }
    lines
}

/// Parse a Discourse category color (`"0088CC"`, optionally with `#`).
pub fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    let expanded = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => hex.to_string(),
        _ => return None,
    };
    let value = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Color::Rgb(
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ))
}
