//! Structured extraction out of sanitized completion text.
//!
//! The analysis tasks ask for a bare JSON object but still receive prose
//! around it often enough that parsing has to hunt for the object first.

use serde::de::DeserializeOwned;

use crate::error::{PipelineError, Result};

/// Words that open an introductory label rather than a citation entry.
const CITATION_LABEL_WORDS: [&str; 4] = ["sitasi", "daftar pustaka", "berikut", "contoh"];

/// The span from the first `{` to the last `}`, when both exist.
pub fn json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse a typed object out of sanitized completion text.
///
/// Tries the brace-delimited span first, then the whole text. Shape
/// mismatches surface as extraction errors instead of guessed values.
pub fn extract_object<T: DeserializeOwned>(text: &str) -> Result<T> {
    if let Some(span) = json_span(text) {
        if let Ok(value) = serde_json::from_str(span) {
            return Ok(value);
        }
    }
    serde_json::from_str(text.trim()).map_err(|e| {
        PipelineError::Extraction(format!("completion is not the expected JSON shape: {}", e))
    })
}

/// Pick the line that most plausibly is the citation itself.
///
/// When several newline-delimited blocks survive sanitization, prefer the
/// first one that does not read as an introductory label. This is a
/// heuristic; when every block looks like a label the first block wins.
pub fn pick_citation_block(text: &str) -> Option<&str> {
    let blocks: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    blocks
        .iter()
        .find(|block| !looks_like_label(block))
        .or_else(|| blocks.first())
        .copied()
}

fn looks_like_label(block: &str) -> bool {
    if block.ends_with(':') {
        return true;
    }
    let lowered = block.to_lowercase();
    CITATION_LABEL_WORDS
        .iter()
        .any(|word| lowered.starts_with(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DetectionReport;

    const PURE_JSON: &str = r#"{
        "predictability_score": 80,
        "uniformity_score": 70,
        "generality_score": 60,
        "analysis_summary": "Gaya penulisan cukup seragam."
    }"#;

    #[test]
    fn test_json_span_picks_outermost_braces() {
        let span = json_span("intro {\"a\": {\"b\": 1}} outro").unwrap();
        assert_eq!(span, "{\"a\": {\"b\": 1}}");
    }

    #[test]
    fn test_json_span_requires_both_braces() {
        assert!(json_span("tidak ada objek").is_none());
        assert!(json_span("} terbalik {").is_none());
    }

    #[test]
    fn test_extract_embedded_json_matches_pure_json() {
        let pure: DetectionReport = extract_object(PURE_JSON).unwrap();

        let wrapped = format!("Tentu! Berikut analisisnya:\n{}\nSemoga membantu.", PURE_JSON);
        let embedded: DetectionReport = extract_object(&wrapped).unwrap();

        assert_eq!(pure, embedded);
    }

    #[test]
    fn test_missing_key_is_an_extraction_error() {
        let result: Result<DetectionReport> =
            extract_object(r#"{"predictability_score": 80, "analysis_summary": "ok"}"#);
        assert!(matches!(result, Err(PipelineError::Extraction(_))));
    }

    #[test]
    fn test_non_integer_score_is_an_extraction_error() {
        let result: Result<DetectionReport> = extract_object(
            r#"{
                "predictability_score": 80.5,
                "uniformity_score": 70,
                "generality_score": 60,
                "analysis_summary": "ok"
            }"#,
        );
        assert!(matches!(result, Err(PipelineError::Extraction(_))));
    }

    #[test]
    fn test_pick_citation_block_skips_label_lines() {
        let text = "Berikut sitasi yang diminta:\nIbrahim, A. (2004). Judul. <i>Jurnal Hukum</i>.";
        assert_eq!(
            pick_citation_block(text),
            Some("Ibrahim, A. (2004). Judul. <i>Jurnal Hukum</i>.")
        );
    }

    #[test]
    fn test_pick_citation_block_falls_back_to_first_block() {
        assert_eq!(
            pick_citation_block("Daftar pustaka tersedia:"),
            Some("Daftar pustaka tersedia:")
        );
    }

    #[test]
    fn test_pick_citation_block_empty_input_yields_none() {
        assert_eq!(pick_citation_block(""), None);
        assert_eq!(pick_citation_block("\n  \n"), None);
    }
}
