//! Testing utilities including a scripted completion backend.
//!
//! These are useful for testing applications that use the pipeline without
//! making real model or network calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::completion::{CompletionClient, CompletionRequest};
use crate::error::{PipelineError, Result};

/// A scripted completion backend for testing.
///
/// Replies and failures are matched by substring against the outgoing
/// prompt, in registration order, so one mock can script several concurrent
/// probes. Unmatched prompts fall back to the default reply.
#[derive(Default)]
pub struct MockCompletion {
    /// Scripted replies: prompt substring -> reply text
    replies: Arc<RwLock<Vec<(String, String)>>>,

    /// Scripted failures: prompt substring -> error to produce
    failures: Arc<RwLock<Vec<(String, ScriptedFailure)>>>,

    /// Reply used when nothing matches
    default_reply: Arc<RwLock<Option<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<CompletionCall>>>,
}

/// Failure a scripted prompt should produce.
#[derive(Debug, Clone)]
pub enum ScriptedFailure {
    /// Content-safety block with the given reason
    Blocked { reason: String },

    /// Upstream HTTP failure with the given status
    Upstream { status: u16, message: String },
}

impl ScriptedFailure {
    fn to_error(&self) -> PipelineError {
        match self {
            ScriptedFailure::Blocked { reason } => PipelineError::Blocked {
                reason: reason.clone(),
            },
            ScriptedFailure::Upstream { status, message } => PipelineError::Upstream {
                status: *status,
                message: message.clone(),
            },
        }
    }
}

/// Record of a call made to the mock backend.
#[derive(Debug, Clone)]
pub struct CompletionCall {
    pub model: String,
    pub prompt: String,
    pub has_document: bool,
}

impl MockCompletion {
    /// Create a new mock backend with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a reply for prompts containing `needle`.
    pub fn with_reply(self, needle: impl Into<String>, reply: impl Into<String>) -> Self {
        self.replies
            .write()
            .unwrap()
            .push((needle.into(), reply.into()));
        self
    }

    /// Script a failure for prompts containing `needle`.
    pub fn with_failure(self, needle: impl Into<String>, failure: ScriptedFailure) -> Self {
        self.failures
            .write()
            .unwrap()
            .push((needle.into(), failure));
        self
    }

    /// Set the reply used when no script matches.
    pub fn with_default_reply(self, reply: impl Into<String>) -> Self {
        *self.default_reply.write().unwrap() = Some(reply.into());
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.calls.write().unwrap().push(CompletionCall {
            model: request.model.clone(),
            prompt: request.prompt.clone(),
            has_document: request.document.is_some(),
        });

        // Failures win over replies scripted for the same prompt.
        let failure = self
            .failures
            .read()
            .unwrap()
            .iter()
            .find(|(needle, _)| request.prompt.contains(needle))
            .map(|(_, failure)| failure.clone());
        if let Some(failure) = failure {
            return Err(failure.to_error());
        }

        let reply = self
            .replies
            .read()
            .unwrap()
            .iter()
            .find(|(needle, _)| request.prompt.contains(needle))
            .map(|(_, reply)| reply.clone());
        if let Some(reply) = reply {
            return Ok(reply);
        }

        Ok(self
            .default_reply
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "OK".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_scripted_reply_and_records_call() {
        let mock = MockCompletion::new().with_reply("parafrase", "Teks yang baru.");

        let request = CompletionRequest::new("gemini-2.5-flash", "Tolong parafrase ini.");
        let reply = mock.complete(&request).await.unwrap();

        assert_eq!(reply, "Teks yang baru.");
        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, "gemini-2.5-flash");
        assert!(calls[0].prompt.contains("parafrase"));
        assert!(!calls[0].has_document);
    }

    #[tokio::test]
    async fn test_mock_failures_win_over_replies() {
        let mock = MockCompletion::new()
            .with_reply("kalimat", "https://contoh.com")
            .with_failure(
                "kalimat",
                ScriptedFailure::Upstream {
                    status: 500,
                    message: "internal".to_string(),
                },
            );

        let request = CompletionRequest::new("gemini-2.5-flash", "kalimat uji");
        let result = mock.complete(&request).await;

        assert!(matches!(
            result,
            Err(PipelineError::Upstream { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_mock_falls_back_to_default_reply() {
        let mock = MockCompletion::new();

        let request = CompletionRequest::new("gemini-2.5-flash", "tanpa skrip");
        assert_eq!(mock.complete(&request).await.unwrap(), "OK");

        mock.clear_calls();
        assert!(mock.calls().is_empty());
    }
}
