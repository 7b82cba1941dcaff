//! Error types for the pipeline.

use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Pipeline errors.
///
/// Every task run ends in one of these or a success; handlers map the
/// variants onto HTTP statuses at the service boundary.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required field is missing or unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The provider's content-safety filter refused the prompt
    #[error("Prompt blocked by safety filter: {reason}")]
    Blocked { reason: String },

    /// The completion service failed (transport error, non-2xx, bad body)
    #[error("Completion service failure ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// The completion carried no usable text, or nothing survived sanitation
    #[error("No usable completion ({reason})")]
    EmptyCompletion { reason: String },

    /// Sanitized text could not be parsed into the expected shape
    #[error("Extraction failed: {0}")]
    Extraction(String),
}

impl PipelineError {
    /// Shorthand for the post-sanitation empty result.
    pub fn empty_completion() -> Self {
        PipelineError::EmptyCompletion {
            reason: "empty completion".to_string(),
        }
    }
}
