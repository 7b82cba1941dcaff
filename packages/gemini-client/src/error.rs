//! Error types for the Gemini client.

use thiserror::Error;

/// Result type for Gemini client operations.
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Gemini client errors.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, rate limit, invalid request)
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Prompt rejected by the provider's content-safety filter
    #[error("Prompt blocked by safety filter: {reason}")]
    Blocked { reason: String },

    /// 2xx response that carried no usable candidate text
    #[error("No output from model (finish reason: {finish_reason})")]
    NoContent { finish_reason: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GeminiError {
    /// Upstream HTTP status for API errors, if this error carries one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GeminiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
