//! Sentence splitting and scoring for the plagiarism-likelihood task.
//!
//! This task is a prompt trick, not a corpus search: every sentence is shown
//! to the model, which answers with a plausible source URL or a fixed
//! not-found token. The result has no precision or recall guarantee and is
//! reported as an estimate only.

use crate::prompts::NOT_FOUND_TOKEN;

/// Summary used when the input is too short to probe at all.
pub const SHORT_TEXT_SUMMARY: &str = "Teks terlalu singkat.";

/// Bounds for the per-sentence probe batch.
#[derive(Debug, Clone)]
pub struct PlagiarismConfig {
    /// Inputs with fewer sentences than this short-circuit to a zero score.
    pub min_sentences: usize,
    /// At most this many sentences are probed per request.
    pub max_checked: usize,
}

impl Default for PlagiarismConfig {
    fn default() -> Self {
        Self {
            min_sentences: 3,
            max_checked: 5,
        }
    }
}

/// Split text into sentences on runs of terminal punctuation.
///
/// Each sentence keeps its terminal punctuation. A trailing fragment without
/// terminal punctuation is dropped, as are chunks that contain nothing but
/// punctuation.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut in_terminal_run = false;

    for c in text.chars() {
        let terminal = matches!(c, '.' | '!' | '?');
        if !terminal && in_terminal_run {
            push_sentence(&mut sentences, &mut current);
            in_terminal_run = false;
        }
        current.push(c);
        if terminal {
            in_terminal_run = true;
        }
    }
    if in_terminal_run {
        push_sentence(&mut sentences, &mut current);
    }
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let sentence = current.trim();
    if sentence.chars().any(|c| !matches!(c, '.' | '!' | '?')) {
        sentences.push(sentence.to_string());
    }
    current.clear();
}

/// Read a probe reply: a URL means the sentence was flagged, anything else
/// (the not-found token included) means it was not.
///
/// Probe replies are read raw, without sanitization, because the URL is the
/// payload here rather than decoration.
pub fn parse_probe_reply(reply: &str) -> Option<String> {
    let reply = reply.trim();
    if reply.is_empty() || reply == NOT_FOUND_TOKEN || !reply.starts_with("http") {
        return None;
    }
    Some(reply.to_string())
}

/// Percentage of checked sentences that were flagged, rounded to nearest.
pub fn score(flagged: usize, checked: usize) -> u8 {
    if checked == 0 {
        return 0;
    }
    (100.0 * flagged as f64 / checked as f64).round() as u8
}

pub fn summary_for_score(score: u8) -> &'static str {
    if score > 50 {
        "Terdeteksi potensi plagiarisme signifikan."
    } else if score > 10 {
        "Ditemukan beberapa kalimat yang cocok."
    } else {
        "Selamat! Tulisan Anda sebagian besar unik."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_keeps_terminal_punctuation() {
        let sentences = split_sentences("Hukum itu tegas. Apakah adil? Tentu saja!");
        assert_eq!(
            sentences,
            vec!["Hukum itu tegas.", "Apakah adil?", "Tentu saja!"]
        );
    }

    #[test]
    fn test_split_drops_unterminated_trailing_fragment() {
        let sentences = split_sentences("Kalimat pertama selesai. Kalimat kedua belum");
        assert_eq!(sentences, vec!["Kalimat pertama selesai."]);
    }

    #[test]
    fn test_split_groups_terminal_runs() {
        let sentences = split_sentences("Benarkah...? Ya!!");
        assert_eq!(sentences, vec!["Benarkah...?", "Ya!!"]);
    }

    #[test]
    fn test_split_drops_punctuation_only_chunks() {
        assert!(split_sentences("...").is_empty());
        assert!(split_sentences("  . ! ?  ").is_empty());
        assert_eq!(split_sentences(".!?abc."), vec!["abc."]);
    }

    #[test]
    fn test_split_empty_input_yields_no_sentences() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_parse_probe_reply_accepts_only_urls() {
        assert_eq!(
            parse_probe_reply("  https://contoh.com/artikel \n"),
            Some("https://contoh.com/artikel".to_string())
        );
        assert_eq!(parse_probe_reply("TIDAK_DITEMUKAN"), None);
        assert_eq!(parse_probe_reply("Mungkin ada di internet."), None);
        assert_eq!(parse_probe_reply(""), None);
    }

    #[test]
    fn test_score_rounds_and_handles_empty_batch() {
        assert_eq!(score(0, 0), 0);
        assert_eq!(score(0, 5), 0);
        assert_eq!(score(1, 3), 33);
        assert_eq!(score(2, 3), 67);
        assert_eq!(score(5, 5), 100);
    }

    #[test]
    fn test_summary_thresholds() {
        assert_eq!(summary_for_score(51), "Terdeteksi potensi plagiarisme signifikan.");
        assert_eq!(summary_for_score(50), "Ditemukan beberapa kalimat yang cocok.");
        assert_eq!(summary_for_score(11), "Ditemukan beberapa kalimat yang cocok.");
        assert_eq!(summary_for_score(10), "Selamat! Tulisan Anda sebagian besar unik.");
        assert_eq!(summary_for_score(0), "Selamat! Tulisan Anda sebagian besar unik.");
    }
}
