// HTTP routes
pub mod analysis;
pub mod citation;
pub mod health;
pub mod writing;

pub use analysis::*;
pub use citation::*;
pub use health::*;
pub use writing::*;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;

use crate::server::error::ApiError;

/// Body shape shared by the text-only task endpoints.
#[derive(Debug, Deserialize)]
pub struct TextBody {
    pub text: Option<String>,
}

/// Unwrap a JSON body and require a non-blank `text` field.
fn required_text(payload: Result<Json<TextBody>, JsonRejection>) -> Result<String, ApiError> {
    let Json(body) = payload.map_err(|_| ApiError::bad_body())?;
    match body.text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ApiError::missing_field("Teks dibutuhkan.")),
    }
}
