// Tulisku - API Core
//
// Backend API for the Indonesian academic-writing assistant. Every task
// endpoint forwards user text through one Gemini-backed completion pipeline
// (paraphrase, AI detection, authenticity review, citation generation,
// humanizing, text correction, plagiarism checking) and answers with the
// constrained JSON shape the front-end expects.

pub mod config;
pub mod server;

pub use config::*;
