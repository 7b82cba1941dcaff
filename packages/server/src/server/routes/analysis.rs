//! Analysis endpoints: AI detection, authenticity review, plagiarism check.

use axum::extract::rejection::JsonRejection;
use axum::extract::Extension;
use axum::Json;
use textops::{AuthenticityReport, DetectionReport, PlagiarismReport};

use super::{required_text, TextBody};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// POST /api/ai-detector
pub async fn detection_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<TextBody>, JsonRejection>,
) -> Result<Json<DetectionReport>, ApiError> {
    let text = required_text(payload)?;
    let pipeline = state.pipeline()?;

    let report = pipeline.detect_ai(&text).await?;
    Ok(Json(report))
}

/// POST /api/check-authenticity
pub async fn authenticity_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<TextBody>, JsonRejection>,
) -> Result<Json<AuthenticityReport>, ApiError> {
    let text = required_text(payload)?;
    let pipeline = state.pipeline()?;

    let report = pipeline.check_authenticity(&text).await?;
    Ok(Json(report))
}

/// POST /api/plagiarism-checker
pub async fn plagiarism_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<TextBody>, JsonRejection>,
) -> Result<Json<PlagiarismReport>, ApiError> {
    let text = required_text(payload)?;
    let pipeline = state.pipeline()?;

    let report = pipeline.check_plagiarism(&text).await?;
    Ok(Json(report))
}
