//! Pure Google Gemini REST API client
//!
//! A clean, minimal client for the Gemini `generateContent` API with no
//! domain-specific logic. Supports text prompts, inline document payloads,
//! per-request generation settings, and a bounded retry on transient
//! upstream failures.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerateContentRequest};
//!
//! let client = GeminiClient::from_env()?;
//!
//! let request = GenerateContentRequest::from_text("Parafrasekan teks berikut: ...")
//!     .with_temperature(0.1);
//!
//! let text = client.generate("gemini-2.5-flash", &request).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

/// Public endpoint for the generative-language API.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Per-request timeout for generateContent calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Placeholder substituted for the credential in upstream error bodies.
const REDACTED_KEY: &str = "[REDACTED_KEY]";

/// Statuses worth one more attempt (rate limit, temporary overload).
fn is_transient(status: u16) -> bool {
    status == 429 || status == 503
}

/// Bounded retry for transient upstream failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Additional attempts after the first call
    pub max_retries: u32,

    /// Fixed delay before each retry
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            backoff: Duration::from_millis(600),
        }
    }
}

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    retry: RetryPolicy,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for stubs and proxies).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate a completion for the given request.
    ///
    /// On HTTP 429 or 503 the call is retried after a fixed delay, bounded by
    /// the configured policy. The returned text joins every text part of the
    /// first candidate.
    pub async fn generate(&self, model: &str, request: &GenerateContentRequest) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.generate_once(model, request).await {
                Err(GeminiError::Api { status, .. })
                    if is_transient(status) && attempt < self.retry.max_retries =>
                {
                    attempt += 1;
                    warn!(
                        status,
                        attempt,
                        backoff_ms = self.retry.backoff.as_millis() as u64,
                        "Transient Gemini failure, retrying"
                    );
                    tokio::time::sleep(self.retry.backoff).await;
                }
                other => return other,
            }
        }
    }

    async fn generate_once(&self, model: &str, request: &GenerateContentRequest) -> Result<String> {
        let start = std::time::Instant::now();

        // The credential travels in a header, never the URL, so transport
        // errors that echo the URL cannot leak it.
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let response = self
            .http_client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(self.redact(&e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = self.redact(&error_text);
            warn!(status = %status, error = %message, "Gemini API error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: types::GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        if let Some(feedback) = body.prompt_feedback {
            if let Some(reason) = feedback.block_reason {
                warn!(reason = %reason, "Gemini blocked the prompt");
                return Err(GeminiError::Blocked { reason });
            }
        }

        let Some(candidate) = body.candidates.into_iter().next() else {
            return Err(GeminiError::NoContent {
                finish_reason: "UNKNOWN".to_string(),
            });
        };

        let finish_reason = candidate
            .finish_reason
            .unwrap_or_else(|| "UNKNOWN".to_string());

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
            .trim()
            .to_string();

        if text.is_empty() {
            return Err(GeminiError::NoContent { finish_reason });
        }

        debug!(
            model = %model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini completion"
        );

        Ok(text)
    }

    /// Replace the credential with a placeholder wherever it appears.
    fn redact(&self, message: &str) -> String {
        if self.api_key.is_empty() {
            return message.to_string();
        }
        message.replace(&self.api_key, REDACTED_KEY)
    }
}
