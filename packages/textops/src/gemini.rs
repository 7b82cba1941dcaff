//! Gemini-backed completion client.
//!
//! Adapts the pure [`gemini_client::GeminiClient`] to the [`CompletionClient`]
//! trait and maps its error taxonomy onto [`PipelineError`]. This is the only
//! module that knows the provider's wire format; the pipeline above it deals
//! exclusively in [`CompletionRequest`] values.

use async_trait::async_trait;
use gemini_client::{Content, GeminiClient, GeminiError, GenerateContentRequest, Part};

use crate::completion::{CompletionClient, CompletionRequest};
use crate::error::{PipelineError, Result};

/// Completion backend over the Gemini `generateContent` API.
#[derive(Clone)]
pub struct GeminiCompletion {
    client: GeminiClient,
}

impl GeminiCompletion {
    /// Wrap an already-configured client.
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(GeminiClient::from_env()?))
    }
}

/// Lower a completion request onto the Gemini wire shape.
///
/// When a document rides along it becomes the first part of the user turn,
/// ahead of the instruction text, so the model reads the source material
/// before the task description.
fn wire_request(request: &CompletionRequest) -> GenerateContentRequest {
    let mut wire = match &request.document {
        Some(document) => GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::inline_data(document.data.as_str(), document.mime_type.as_str()),
                    Part::text(request.prompt.as_str()),
                ],
            }],
            ..Default::default()
        },
        None => GenerateContentRequest::from_text(request.prompt.as_str()),
    };

    if let Some(temperature) = request.temperature {
        wire = wire.with_temperature(temperature);
    }
    if let Some(count) = request.candidate_count {
        wire = wire.with_candidate_count(count);
    }
    if request.disable_safety {
        wire = wire.with_safety_disabled();
    }

    wire
}

#[async_trait]
impl CompletionClient for GeminiCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let wire = wire_request(request);
        let text = self.client.generate(&request.model, &wire).await?;
        Ok(text)
    }
}

impl From<GeminiError> for PipelineError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::Blocked { reason } => PipelineError::Blocked { reason },
            GeminiError::Api { status, message } => PipelineError::Upstream { status, message },
            GeminiError::NoContent { finish_reason } => PipelineError::EmptyCompletion {
                reason: finish_reason,
            },
            GeminiError::Network(message) => PipelineError::Upstream {
                status: 502,
                message,
            },
            GeminiError::Parse(message) => PipelineError::Upstream {
                status: 502,
                message,
            },
            GeminiError::Config(message) => PipelineError::Upstream {
                status: 500,
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::InlineDocument;

    #[test]
    fn test_text_request_is_a_single_user_part() {
        let request = CompletionRequest::new("gemini-2.5-flash", "Parafrasekan teks ini.");
        let wire = wire_request(&request);

        assert_eq!(wire.contents.len(), 1);
        assert_eq!(wire.contents[0].role, "user");
        assert_eq!(wire.contents[0].parts.len(), 1);
        assert_eq!(
            wire.contents[0].parts[0].text.as_deref(),
            Some("Parafrasekan teks ini.")
        );
        assert!(wire.generation_config.is_none());
        assert!(wire.safety_settings.is_none());
    }

    #[test]
    fn test_document_part_precedes_the_instruction_text() {
        let request = CompletionRequest::new("gemini-2.5-flash", "Buatkan sitasi.")
            .with_document(InlineDocument {
                data: "aGFsbw==".to_string(),
                mime_type: "application/pdf".to_string(),
            });
        let wire = wire_request(&request);

        let parts = &wire.contents[0].parts;
        assert_eq!(parts.len(), 2);
        let inline = parts[0].inline_data.as_ref().unwrap();
        assert_eq!(inline.data, "aGFsbw==");
        assert_eq!(inline.mime_type, "application/pdf");
        assert_eq!(parts[1].text.as_deref(), Some("Buatkan sitasi."));
    }

    #[test]
    fn test_generation_settings_are_forwarded() {
        let request = CompletionRequest::new("gemini-2.5-flash", "Parafrasekan teks ini.")
            .with_temperature(0.1)
            .with_candidate_count(1)
            .with_safety_disabled();
        let wire = wire_request(&request);

        let config = wire.generation_config.unwrap();
        assert_eq!(config.temperature, Some(0.1));
        assert_eq!(config.candidate_count, Some(1));
        assert!(wire.safety_settings.is_some());
    }

    #[test]
    fn test_provider_errors_map_onto_pipeline_errors() {
        let blocked = PipelineError::from(GeminiError::Blocked {
            reason: "SAFETY".to_string(),
        });
        assert!(matches!(
            blocked,
            PipelineError::Blocked { ref reason } if reason == "SAFETY"
        ));

        let api = PipelineError::from(GeminiError::Api {
            status: 429,
            message: "rate limited".to_string(),
        });
        assert!(matches!(api, PipelineError::Upstream { status: 429, .. }));

        let empty = PipelineError::from(GeminiError::NoContent {
            finish_reason: "MAX_TOKENS".to_string(),
        });
        assert!(matches!(
            empty,
            PipelineError::EmptyCompletion { ref reason } if reason == "MAX_TOKENS"
        ));

        let network = PipelineError::from(GeminiError::Network("timeout".to_string()));
        assert!(matches!(network, PipelineError::Upstream { status: 502, .. }));

        let config = PipelineError::from(GeminiError::Config("no key".to_string()));
        assert!(matches!(config, PipelineError::Upstream { status: 500, .. }));
    }
}
