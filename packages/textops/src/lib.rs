//! Writing-Task Completion Pipeline
//!
//! A library that turns free-form LLM completions into the constrained
//! outputs of Indonesian academic-writing tasks: paraphrasing, AI detection,
//! authenticity review, citation generation, humanizing, text correction,
//! and plagiarism checking.
//!
//! # Design Philosophy
//!
//! **"Prompt precisely, trust nothing back"**
//!
//! - One parameterized pipeline, not one module per task
//! - Prompts carry the task; the transport stays generic
//! - Every completion is sanitized before anything reads it
//! - Structured outputs are validated, never assumed
//! - Library handles the flow, the server handles HTTP
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use textops::{ParaphraseMode, Pipeline};
//! use textops::testing::MockCompletion;
//!
//! let client = Arc::new(MockCompletion::new().with_default_reply("Hasil parafrase."));
//! let pipeline = Pipeline::new(client);
//!
//! // Paraphrase with the default model
//! let result = pipeline.paraphrase(ParaphraseMode::Formal, "Teks asli.", None).await?;
//! println!("{} ({})", result.text, result.model_used);
//!
//! // Callers may request a model; unknown names fall back to the default
//! let pinned = pipeline
//!     .paraphrase(ParaphraseMode::Standard, "Teks asli.", Some("gemini-2.5-pro"))
//!     .await?;
//! ```
//!
//! # Modules
//!
//! - [`completion`] - Completion transport abstraction (trait, request, model policy)
//! - [`types`] - Task inputs and reports
//! - [`prompts`] - Indonesian task instructions and formatters
//! - [`sanitize`] - Completion cleanup (labels, links, quotes, emphasis)
//! - [`extract`] - JSON recovery from prose-wrapped completions
//! - [`pipeline`] - The task pipeline itself
//! - [`plagiarism`] - Sentence splitting and scoring for the plagiarism check
//! - [`testing`] - Mock completion client for tests

pub mod completion;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod plagiarism;
pub mod prompts;
pub mod sanitize;
pub mod testing;
pub mod types;

#[cfg(feature = "gemini")]
pub mod gemini;

// Re-export core types at crate root
pub use completion::{
    CompletionClient, CompletionRequest, InlineDocument, ModelPolicy, ALLOWED_MODELS,
    DEFAULT_MODEL,
};
pub use error::{PipelineError, Result};
pub use types::{
    AuthenticityReport, CitationKind, CitationSource, DetectionReport, Paraphrase, ParaphraseMode,
    PlagiarismReport, PlagiarizedSource,
};

// Re-export the pipeline and its knobs
pub use pipeline::Pipeline;
pub use plagiarism::PlagiarismConfig;
pub use sanitize::sanitize;

#[cfg(feature = "gemini")]
pub use gemini::GeminiCompletion;

// Re-export testing utilities
pub use testing::MockCompletion;
