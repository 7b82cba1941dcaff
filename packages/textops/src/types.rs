//! Task options and structured result shapes.

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Paraphrase register selected by the caller.
///
/// Unrecognized values deserialize to `Standard` rather than erroring, which
/// keeps older front-end builds working when modes are renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParaphraseMode {
    Formal,
    Creative,
    Simple,
    Mahasiswa,
    #[default]
    #[serde(other)]
    Standard,
}

impl ParaphraseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParaphraseMode::Standard => "standard",
            ParaphraseMode::Formal => "formal",
            ParaphraseMode::Creative => "creative",
            ParaphraseMode::Simple => "simple",
            ParaphraseMode::Mahasiswa => "mahasiswa",
        }
    }
}

/// Document category for citation formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationKind {
    Jurnal,
    Skripsi,
    Makalah,
    #[serde(other)]
    Other,
}

impl CitationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CitationKind::Jurnal => "jurnal",
            CitationKind::Skripsi => "skripsi",
            CitationKind::Makalah => "makalah",
            CitationKind::Other => "other",
        }
    }
}

/// Source material for citation generation: pasted text or an uploaded file.
#[derive(Debug, Clone)]
pub enum CitationSource {
    /// Plain text pasted by the user
    Text(String),

    /// Base64 file payload with its MIME type
    File { data: String, mime_type: String },
}

/// Paraphrase result with the model that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paraphrase {
    pub model_used: String,
    pub text: String,
}

/// Writing-style scores returned by the AI-detection task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReport {
    pub predictability_score: u8,
    pub uniformity_score: u8,
    pub generality_score: u8,
    pub analysis_summary: String,
}

impl DetectionReport {
    /// Check that every score sits in the 0-100 contract range.
    pub fn validate(&self) -> Result<()> {
        for (name, score) in [
            ("predictability_score", self.predictability_score),
            ("uniformity_score", self.uniformity_score),
            ("generality_score", self.generality_score),
        ] {
            if score > 100 {
                return Err(PipelineError::Extraction(format!(
                    "{} out of range: {}",
                    name, score
                )));
            }
        }
        Ok(())
    }
}

/// Authenticity review with the sentences that read as machine-written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticityReport {
    pub overall_impression: String,
    pub problematic_sentences: Vec<String>,
    pub authenticity_score: u8,
}

impl AuthenticityReport {
    pub fn validate(&self) -> Result<()> {
        if self.authenticity_score > 100 {
            return Err(PipelineError::Extraction(format!(
                "authenticity_score out of range: {}",
                self.authenticity_score
            )));
        }
        Ok(())
    }

    /// Drop flagged sentences that are not literal substrings of the source.
    ///
    /// The model is instructed to quote complete sentences verbatim, but
    /// fabricated quotes must not reach the caller.
    pub fn retain_verbatim(&mut self, source: &str) {
        self.problematic_sentences = self
            .problematic_sentences
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && source.contains(s.as_str()))
            .collect();
    }
}

/// Aggregated plagiarism estimate over the probed sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlagiarismReport {
    pub plagiarism_score: u8,
    pub summary: String,
    pub sources_found: usize,
    pub plagiarized_sources: Vec<PlagiarizedSource>,
}

/// One probed sentence together with the source the model named for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlagiarizedSource {
    pub sentence: String,
    pub source: String,
}
