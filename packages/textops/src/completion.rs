//! Completion backend abstraction.
//!
//! The pipeline talks to the text-completion service through the
//! [`CompletionClient`] trait so tests can substitute a scripted backend
//! (see [`crate::testing::MockCompletion`]).

use async_trait::async_trait;

use crate::error::Result;

/// Model identifiers a request-level override may select.
pub const ALLOWED_MODELS: [&str; 3] = ["gemini-2.5-flash", "gemini-2.5-pro", "gemini-2.0-flash"];

/// Model used when no valid override is supplied.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// A text-completion backend.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one completion call and return the raw completion text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// One completion call, already resolved to a concrete model.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Resolved model identifier
    pub model: String,

    /// Full instruction text, payload included
    pub prompt: String,

    /// Optional inline document sent alongside the prompt
    pub document: Option<InlineDocument>,

    /// Sampling temperature, when the task pins one
    pub temperature: Option<f32>,

    /// Candidate count, when the task pins one
    pub candidate_count: Option<u32>,

    /// Turn off the provider's per-category content blocking
    pub disable_safety: bool,
}

impl CompletionRequest {
    /// Create a request for the given model and prompt.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            document: None,
            temperature: None,
            candidate_count: None,
            disable_safety: false,
        }
    }

    /// Attach an inline document.
    pub fn with_document(mut self, document: InlineDocument) -> Self {
        self.document = Some(document);
        self
    }

    /// Set sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set candidate count.
    pub fn with_candidate_count(mut self, count: u32) -> Self {
        self.candidate_count = Some(count);
        self
    }

    /// Disable content-safety blocking.
    pub fn with_safety_disabled(mut self) -> Self {
        self.disable_safety = true;
        self
    }
}

/// Base64 document payload with its MIME type.
#[derive(Debug, Clone)]
pub struct InlineDocument {
    pub data: String,
    pub mime_type: String,
}

/// Allow-listed model identifiers and the fallback default.
///
/// Resolution happens before the completion call so the effective model can
/// be reported back to the caller.
#[derive(Debug, Clone)]
pub struct ModelPolicy {
    pub allowed: Vec<String>,
    pub default_model: String,
}

impl Default for ModelPolicy {
    fn default() -> Self {
        Self {
            allowed: ALLOWED_MODELS.iter().map(|m| m.to_string()).collect(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ModelPolicy {
    /// Change the default model; identifiers outside the allow-list are ignored.
    pub fn with_default(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        if self.allowed.iter().any(|m| *m == model) {
            self.default_model = model;
        }
        self
    }

    /// Resolve an optional request-level override to an effective model.
    ///
    /// Unknown identifiers fall back to the default rather than erroring.
    pub fn resolve(&self, requested: Option<&str>) -> String {
        match requested.map(str::trim) {
            Some(model) if self.allowed.iter().any(|m| m == model) => model.to_string(),
            _ => self.default_model.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_accepts_allowed_model() {
        let policy = ModelPolicy::default();
        assert_eq!(policy.resolve(Some("gemini-2.5-pro")), "gemini-2.5-pro");
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        let policy = ModelPolicy::default();
        assert_eq!(policy.resolve(Some("  gemini-2.0-flash ")), "gemini-2.0-flash");
    }

    #[test]
    fn test_unknown_model_falls_back_to_default() {
        let policy = ModelPolicy::default();
        assert_eq!(policy.resolve(Some("gpt-4o")), DEFAULT_MODEL);
        assert_eq!(policy.resolve(None), DEFAULT_MODEL);
    }

    #[test]
    fn test_with_default_rejects_unknown_model() {
        let policy = ModelPolicy::default().with_default("llama-3");
        assert_eq!(policy.default_model, DEFAULT_MODEL);

        let policy = ModelPolicy::default().with_default("gemini-2.0-flash");
        assert_eq!(policy.default_model, "gemini-2.0-flash");
    }
}
