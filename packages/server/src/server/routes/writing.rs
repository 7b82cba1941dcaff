//! Text-rewriting endpoints: paraphrase, humanize, text correction.

use axum::extract::rejection::JsonRejection;
use axum::extract::Extension;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use textops::ParaphraseMode;
use uuid::Uuid;

use super::{required_text, TextBody};
use crate::server::app::AppState;
use crate::server::debug::DebugBundle;
use crate::server::error::{hint_for_status, ApiError};

#[derive(Debug, Deserialize)]
pub struct ParaphraseBody {
    pub mode: Option<ParaphraseMode>,
    pub text: Option<String>,
    pub model: Option<String>,
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Serialize)]
pub struct ParaphraseResponse {
    pub model_used: String,
    pub paraphrased_text: String,
}

/// POST /api/paraphrase
///
/// The one endpoint with extras: a request-level model override, the
/// `X-Debug-Id` / `X-Model-Used` response headers, upstream-status hints on
/// errors, and an opt-in debug bundle.
pub async fn paraphrase_handler(
    Extension(state): Extension<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    payload: Result<Json<ParaphraseBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload.map_err(|_| ApiError::bad_body())?;

    let Some(mode) = body.mode else {
        return Err(ApiError::missing_field("Mode dan teks dibutuhkan"));
    };
    let text = match body.text.as_deref() {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(ApiError::missing_field("Mode dan teks dibutuhkan")),
    };

    let pipeline = state.pipeline()?;
    let model = pipeline.resolve_model(body.model.as_deref());

    match pipeline.paraphrase(mode, text, body.model.as_deref()).await {
        Ok(result) => {
            let response = (
                [
                    ("X-Debug-Id", Uuid::new_v4().to_string()),
                    ("X-Model-Used", result.model_used.clone()),
                ],
                Json(ParaphraseResponse {
                    model_used: result.model_used,
                    paraphrased_text: result.text,
                }),
            );
            Ok(response.into_response())
        }
        Err(error) => {
            let api_error = ApiError::from(error);
            let hint = hint_for_status(api_error.upstream_status);
            let debug = body.debug.then(|| {
                DebugBundle::new(
                    &model,
                    &method,
                    uri.path(),
                    &headers,
                    api_error.upstream_status,
                    Some(api_error.message.as_str()),
                )
            });
            Err(api_error.with_hint(hint).with_debug(debug))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HumanizeResponse {
    pub humanized_text: String,
}

/// POST /api/humanize-text
pub async fn humanize_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<TextBody>, JsonRejection>,
) -> Result<Json<HumanizeResponse>, ApiError> {
    let text = required_text(payload)?;
    let pipeline = state.pipeline()?;

    let humanized = pipeline.humanize(&text).await?;
    Ok(Json(HumanizeResponse {
        humanized_text: humanized,
    }))
}

#[derive(Debug, Serialize)]
pub struct CorrectionResponse {
    pub corrected_text: String,
}

/// POST /api/text-corrector
pub async fn correction_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<TextBody>, JsonRejection>,
) -> Result<Json<CorrectionResponse>, ApiError> {
    let text = required_text(payload)?;
    let pipeline = state.pipeline()?;

    let corrected = pipeline.correct_text(&text).await?;
    Ok(Json(CorrectionResponse {
        corrected_text: corrected,
    }))
}
