//! The Pipeline - one parameterized flow behind every writing task.
//!
//! Control flow: task parameters -> prompt template -> completion call ->
//! sanitizer -> extraction/validation -> assembled result. Tasks differ only
//! in their prompt, generation settings, and result shape, so they share this
//! single code path instead of one handler-sized copy each.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::completion::{CompletionClient, CompletionRequest, InlineDocument, ModelPolicy};
use crate::error::{PipelineError, Result};
use crate::extract::{extract_object, pick_citation_block};
use crate::plagiarism::{self, PlagiarismConfig};
use crate::prompts;
use crate::sanitize::sanitize;
use crate::types::{
    AuthenticityReport, CitationKind, CitationSource, DetectionReport, Paraphrase, ParaphraseMode,
    PlagiarismReport, PlagiarizedSource,
};

/// The writing-task pipeline over a completion backend.
///
/// # Example
///
/// ```rust,ignore
/// let pipeline = Pipeline::new(Arc::new(backend));
///
/// let result = pipeline
///     .paraphrase(ParaphraseMode::Formal, "Teks asli.", None)
///     .await?;
/// println!("{}: {}", result.model_used, result.text);
/// ```
pub struct Pipeline {
    client: Arc<dyn CompletionClient>,
    models: ModelPolicy,
    plagiarism: PlagiarismConfig,
}

impl Pipeline {
    /// Create a pipeline with default model and batch policies.
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            models: ModelPolicy::default(),
            plagiarism: PlagiarismConfig::default(),
        }
    }

    /// Replace the model allow-list policy.
    pub fn with_model_policy(mut self, models: ModelPolicy) -> Self {
        self.models = models;
        self
    }

    /// Replace the plagiarism batch bounds.
    pub fn with_plagiarism_config(mut self, config: PlagiarismConfig) -> Self {
        self.plagiarism = config;
        self
    }

    /// The model used when a request carries no valid override.
    pub fn default_model(&self) -> &str {
        &self.models.default_model
    }

    /// Resolve a request-level model override to the effective model.
    pub fn resolve_model(&self, requested: Option<&str>) -> String {
        self.models.resolve(requested)
    }

    /// Rewrite text in the register selected by `mode`.
    pub async fn paraphrase(
        &self,
        mode: ParaphraseMode,
        text: &str,
        model_override: Option<&str>,
    ) -> Result<Paraphrase> {
        require_text(text)?;
        let model = self.models.resolve(model_override);
        debug!(mode = mode.as_str(), model = %model, "paraphrasing");

        let request =
            CompletionRequest::new(model.as_str(), prompts::format_paraphrase_prompt(mode, text))
                .with_temperature(0.1)
                .with_candidate_count(1);
        let cleaned = self.complete_and_sanitize(&request).await?;

        Ok(Paraphrase {
            model_used: model,
            text: cleaned,
        })
    }

    /// Score how machine-written the text reads.
    pub async fn detect_ai(&self, text: &str) -> Result<DetectionReport> {
        require_text(text)?;
        let model = self.models.resolve(None);

        let request =
            CompletionRequest::new(model.as_str(), prompts::format_detection_prompt(text))
                .with_temperature(0.1);
        let cleaned = self.complete_and_sanitize(&request).await?;

        let report: DetectionReport = extract_object(&cleaned)?;
        report.validate()?;
        Ok(report)
    }

    /// Review text for residual machine-sounding style.
    ///
    /// Flagged sentences that are not literal substrings of the input are
    /// dropped before the report is returned.
    pub async fn check_authenticity(&self, text: &str) -> Result<AuthenticityReport> {
        require_text(text)?;
        let model = self.models.resolve(None);

        let request =
            CompletionRequest::new(model.as_str(), prompts::format_authenticity_prompt(text));
        let cleaned = self.complete_and_sanitize(&request).await?;

        let mut report: AuthenticityReport = extract_object(&cleaned)?;
        report.validate()?;
        report.retain_verbatim(text);
        Ok(report)
    }

    /// Produce one formatted bibliography entry for a document.
    pub async fn generate_citation(
        &self,
        kind: CitationKind,
        source: CitationSource,
    ) -> Result<Vec<String>> {
        let model = self.models.resolve(None);
        let request = match source {
            CitationSource::Text(text) => {
                if text.trim().is_empty() {
                    return Err(PipelineError::InvalidInput(
                        "citation source text must not be empty".to_string(),
                    ));
                }
                CompletionRequest::new(
                    model.as_str(),
                    prompts::format_citation_prompt(kind, Some(&text)),
                )
            }
            CitationSource::File { data, mime_type } => {
                if data.is_empty() {
                    return Err(PipelineError::InvalidInput(
                        "citation document data must not be empty".to_string(),
                    ));
                }
                CompletionRequest::new(model.as_str(), prompts::format_citation_prompt(kind, None))
                    .with_document(InlineDocument { data, mime_type })
            }
        }
        .with_temperature(0.1)
        .with_safety_disabled();

        let cleaned = self.complete_and_sanitize(&request).await?;
        let block = pick_citation_block(&cleaned).ok_or_else(PipelineError::empty_completion)?;
        let citation = block.replace(['"', '\'', '`'], "").trim().to_string();
        if citation.is_empty() {
            return Err(PipelineError::empty_completion());
        }

        debug!(kind = kind.as_str(), model = %model, "citation generated");
        Ok(vec![citation])
    }

    /// Rewrite robotic text into natural-sounding prose.
    pub async fn humanize(&self, text: &str) -> Result<String> {
        require_text(text)?;
        let model = self.models.resolve(None);

        let request = CompletionRequest::new(model.as_str(), prompts::format_humanize_prompt(text));
        self.complete_and_sanitize(&request).await
    }

    /// Fix typos and grammar and expand common abbreviations.
    pub async fn correct_text(&self, text: &str) -> Result<String> {
        require_text(text)?;
        let model = self.models.resolve(None);

        let request =
            CompletionRequest::new(model.as_str(), prompts::format_correction_prompt(text))
                .with_temperature(0.2);
        self.complete_and_sanitize(&request).await
    }

    /// Estimate how much of the text matches online sources.
    ///
    /// One probe per sentence, issued concurrently and bounded by
    /// [`PlagiarismConfig::max_checked`]. A failed probe is skipped: it
    /// neither flags its sentence nor counts toward the denominator.
    pub async fn check_plagiarism(&self, text: &str) -> Result<PlagiarismReport> {
        require_text(text)?;

        let sentences = plagiarism::split_sentences(text);
        if sentences.len() < self.plagiarism.min_sentences {
            debug!(sentences = sentences.len(), "input too short to probe");
            return Ok(PlagiarismReport {
                plagiarism_score: 0,
                summary: plagiarism::SHORT_TEXT_SUMMARY.to_string(),
                sources_found: 0,
                plagiarized_sources: Vec::new(),
            });
        }

        let model = self.models.resolve(None);
        let batch: Vec<String> = sentences
            .into_iter()
            .take(self.plagiarism.max_checked)
            .collect();

        // Probes are independent, so fan out and aggregate once all complete.
        let probes = batch.iter().map(|sentence| {
            let request =
                CompletionRequest::new(model.as_str(), prompts::format_probe_prompt(sentence));
            async move { (sentence, self.client.complete(&request).await) }
        });
        let replies = join_all(probes).await;

        let mut checked = 0usize;
        let mut flagged = Vec::new();
        for (sentence, reply) in replies {
            match reply {
                Ok(reply) => {
                    checked += 1;
                    if let Some(source) = plagiarism::parse_probe_reply(&reply) {
                        flagged.push(PlagiarizedSource {
                            sentence: sentence.clone(),
                            source,
                        });
                    }
                }
                Err(e) => {
                    warn!(error = %e, "sentence probe failed, skipping");
                }
            }
        }

        let score = plagiarism::score(flagged.len(), checked);
        let report = PlagiarismReport {
            plagiarism_score: score,
            summary: plagiarism::summary_for_score(score).to_string(),
            sources_found: flagged.len(),
            plagiarized_sources: flagged,
        };
        info!(
            checked,
            sources = report.sources_found,
            score = report.plagiarism_score,
            "plagiarism check complete"
        );
        Ok(report)
    }

    async fn complete_and_sanitize(&self, request: &CompletionRequest) -> Result<String> {
        let raw = self.client.complete(request).await?;
        let cleaned = sanitize(&raw);
        if cleaned.is_empty() {
            return Err(PipelineError::empty_completion());
        }
        Ok(cleaned)
    }
}

fn require_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "text must not be empty".to_string(),
        ));
    }
    Ok(())
}
