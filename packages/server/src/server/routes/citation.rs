//! Citation generation endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use textops::{CitationKind, CitationSource};

use crate::server::app::AppState;
use crate::server::error::ApiError;

const MISSING_SOURCE: &str = "Tipe dokumen dan file/teks dokumen dibutuhkan.";

#[derive(Debug, Deserialize)]
pub struct CitationBody {
    #[serde(rename = "type")]
    pub kind: Option<CitationKind>,
    pub text: Option<String>,
    /// Base64 document payload.
    pub file: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CitationResponse {
    pub citations: Vec<String>,
}

/// POST /api/generate-citation
pub async fn citation_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<CitationBody>, JsonRejection>,
) -> Result<Json<CitationResponse>, ApiError> {
    let Json(body) = payload.map_err(|_| ApiError::bad_body())?;

    let Some(kind) = body.kind else {
        return Err(ApiError::missing_field(MISSING_SOURCE));
    };

    // An uploaded file (with its MIME type) wins over pasted text.
    let source = match (body.file, body.mime_type, body.text) {
        (Some(file), Some(mime_type), _) if !file.is_empty() => CitationSource::File {
            data: file,
            mime_type,
        },
        (_, _, Some(text)) if !text.trim().is_empty() => CitationSource::Text(text),
        _ => return Err(ApiError::missing_field(MISSING_SOURCE)),
    };

    let pipeline = state.pipeline()?;
    let citations = pipeline.generate_citation(kind, source).await?;
    Ok(Json(CitationResponse { citations }))
}
