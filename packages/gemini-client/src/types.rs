//! Gemini generateContent request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Request
// =============================================================================

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns (a single user turn for one-shot prompts)
    pub contents: Vec<Content>,

    /// Sampling settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,

    /// Per-category content-safety thresholds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_settings: Option<Vec<SafetySetting>>,
}

impl GenerateContentRequest {
    /// Create a single-turn user request from a text prompt.
    pub fn from_text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part::text(prompt)],
            }],
            ..Default::default()
        }
    }

    /// Attach an inline document (base64 payload with MIME type) to the user turn.
    pub fn with_inline_data(mut self, data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        if let Some(content) = self.contents.last_mut() {
            content.parts.push(Part::inline_data(data, mime_type));
        }
        self
    }

    /// Set sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .temperature = Some(temperature);
        self
    }

    /// Set the number of candidates to generate.
    pub fn with_candidate_count(mut self, count: u32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .candidate_count = Some(count);
        self
    }

    /// Disable content-safety blocking for every category.
    pub fn with_safety_disabled(mut self) -> Self {
        self.safety_settings = Some(SafetySetting::block_none());
        self
    }
}

/// A conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Turn role ("user" or "model")
    pub role: String,

    /// Turn payload parts
    pub parts: Vec<Part>,
}

/// One part of a turn: either text or an inline document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// Text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// Inline document part (base64 payload with MIME type).
    pub fn inline_data(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Base64-encoded document payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Sampling settings.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<u32>,
}

/// Per-category content-safety threshold.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

impl SafetySetting {
    /// All four moderated categories set to BLOCK_NONE.
    pub fn block_none() -> Vec<SafetySetting> {
        [
            "HARM_CATEGORY_HARASSMENT",
            "HARM_CATEGORY_HATE_SPEECH",
            "HARM_CATEGORY_SEXUALLY_EXPLICIT",
            "HARM_CATEGORY_DANGEROUS_CONTENT",
        ]
        .iter()
        .map(|category| SafetySetting {
            category: category.to_string(),
            threshold: "BLOCK_NONE".to_string(),
        })
        .collect()
    }
}

// =============================================================================
// Response
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptFeedback {
    pub block_reason: Option<String>,
}
