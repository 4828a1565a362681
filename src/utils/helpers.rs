//! Helper functions and utilities
//!
//! This module contains text and date helpers shared by the models.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

fn block_tag_pattern() -> &'static Regex {
    static BLOCK: OnceLock<Regex> = OnceLock::new();
    BLOCK.get_or_init(|| {
        Regex::new(r"(?is)</?(?:p|br|div|li|ul|ol|h[1-6]|blockquote|table|tr|td|th|hr)\b[^>]*>")
            .expect("static regex")
    })
}

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("static regex"))
}

fn whitespace_pattern() -> &'static Regex {
    static WS: OnceLock<Regex> = OnceLock::new();
    WS.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

/// Truncate text to a maximum number of characters with ellipsis
///
/// The result never exceeds `max_length` characters; limits too small to
/// hold the ellipsis get a plain cut.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else if max_length < 3 {
        text.chars().take(max_length).collect()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept.trim_end())
    }
}

/// Strip HTML tags from rich-text content and collapse whitespace
///
/// Block and break tags separate words; inline tags vanish so that markup
/// inside a word or before punctuation leaves the text intact.
pub fn strip_html(html: &str) -> String {
    let text = block_tag_pattern().replace_all(html, " ");
    let text = tag_pattern().replace_all(&text, "");
    let text = decode_basic_entities(&text);
    whitespace_pattern().replace_all(&text, " ").trim().to_string()
}

/// Decode the handful of entities the rich-text editor emits
fn decode_basic_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Parse a `dateCreated` value from the backend
///
/// Accepts RFC 3339 timestamps and naive ISO-8601 timestamps, which are
/// taken to be UTC.
pub fn parse_backend_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}
