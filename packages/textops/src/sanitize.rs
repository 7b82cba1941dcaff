//! Cleanup for raw model completions.
//!
//! Models decorate their answers with conversational preambles, markdown
//! fences, stray quoting, and links. The passes here strip that decoration
//! down to the text a task actually asked for.

use lazy_static::lazy_static;
use regex::Regex;

/// Preamble labels the models prepend despite being told not to.
/// Longest variants first so a shorter phrase never shadows a longer one.
const LABEL_PHRASES: [&str; 12] = [
    "berikut adalah teks yang sudah dikoreksi",
    "berikut teks yang telah diparafrase",
    "berikut adalah hasil parafrase",
    "teks yang sudah diparafrase",
    "teks yang sudah parafrase",
    "teks sudah diparafrase",
    "teks sudah parafrase",
    "teks yang diperbaiki",
    "hasil parafrase",
    "hasil koreksi",
    "daftar pustaka",
    "sitasi",
];

lazy_static! {
    /// Hyperlinks, stopping at whitespace and common wrapping delimiters.
    static ref URL_REGEX: Regex = Regex::new(r#"https?://[^\s"'<>)\]}]*"#).unwrap();

    /// List markers and stray quoting at the start of the text.
    static ref LEADING_MARKER_REGEX: Regex = Regex::new(r#"^(\d+\.\s*|\*\s*|-\s*|['"`])"#).unwrap();

    /// Emphasis pairs that wrap nothing.
    static ref EMPTY_EMPHASIS_REGEX: Regex = Regex::new(r"<i>\s*</i>").unwrap();
}

/// Strip conversational and markdown decoration from a raw completion.
///
/// The passes run repeatedly until the text stops changing, so the result is
/// a fixed point: `sanitize(sanitize(x)) == sanitize(x)` for every input.
/// Every pass either leaves the text unchanged or makes it strictly shorter,
/// which guarantees the loop terminates.
pub fn sanitize(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn sanitize_pass(text: &str) -> String {
    let text = strip_code_fences(text.trim());
    let text = strip_label_phrase(text);
    let text = URL_REGEX.replace_all(text, "");
    let text = replace_smart_quotes(&text);
    let text = normalize_emphasis(&text);
    let text = LEADING_MARKER_REGEX.replace(&text, "");
    trim_surrounding_quotes(text.trim()).trim().to_string()
}

fn strip_code_fences(text: &str) -> &str {
    text.trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
}

/// Drop one leading label phrase, matched case-insensitively.
///
/// A phrase only counts when it is followed by a colon, whitespace, or the
/// end of the text, so words that merely begin with a phrase are kept.
fn strip_label_phrase(text: &str) -> &str {
    for phrase in LABEL_PHRASES {
        if let Some(rest) = strip_phrase_prefix(text, phrase) {
            return rest;
        }
    }
    text
}

fn strip_phrase_prefix<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    let bytes = text.as_bytes();
    if bytes.len() < phrase.len() {
        return None;
    }
    // The phrases are pure ASCII, so a matching prefix is ASCII too and
    // slicing at the phrase boundary cannot split a multi-byte character.
    if !bytes[..phrase.len()].eq_ignore_ascii_case(phrase.as_bytes()) {
        return None;
    }
    let rest = &text[phrase.len()..];
    let mut chars = rest.chars();
    match chars.next() {
        None => Some(rest),
        Some(':') => Some(chars.as_str()),
        Some(c) if c.is_whitespace() => Some(chars.as_str()),
        _ => None,
    }
}

/// Delete smart double quotes and turn smart single quotes into apostrophes.
fn replace_smart_quotes(text: &str) -> String {
    text.replace(['\u{201C}', '\u{201D}'], "")
        .replace(['\u{2018}', '\u{2019}'], "'")
}

/// Normalize both italic spellings to `<i>` and drop degenerate pairs.
fn normalize_emphasis(text: &str) -> String {
    let text = text.replace("<em>", "<i>").replace("</em>", "</i>");
    let text = text.replace("<i><i>", "<i>").replace("</i></i>", "</i>");
    EMPTY_EMPHASIS_REGEX.replace_all(&text, "").into_owned()
}

fn trim_surrounding_quotes(text: &str) -> &str {
    let quotes: &[char] = &['"', '\'', '`'];
    let mut result = text;
    if let Some(stripped) = result.strip_prefix(quotes) {
        result = stripped;
    }
    if let Some(stripped) = result.strip_suffix(quotes) {
        result = stripped;
    }
    result
}
