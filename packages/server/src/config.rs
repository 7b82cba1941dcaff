use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use textops::ModelPolicy;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Absent credential is not a boot failure; task endpoints answer 500
    /// until it is configured.
    pub gemini_api_key: Option<String>,
    pub models: ModelPolicy,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let models = match env::var("GEMINI_MODEL") {
            Ok(name) => ModelPolicy::default().with_default(name.trim()),
            Err(_) => ModelPolicy::default(),
        };

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            models,
        })
    }
}
