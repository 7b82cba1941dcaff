//! Error-to-response mapping at the handler boundary.
//!
//! Every failure leaves the service as a JSON body with an `error` key;
//! no handler lets a bodyless status escape. Messages are the user-facing
//! Indonesian strings the front-end displays verbatim.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use textops::PipelineError;

use crate::server::debug::DebugBundle;

/// JSON error body: `{error}` plus the paraphrase-only extras.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugBundle>,
}

/// An error ready to leave the service as a JSON response.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// HTTP status observed on the provider side, when one exists.
    pub upstream_status: Option<u16>,
    pub hint: Option<String>,
    pub debug: Option<DebugBundle>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            upstream_status: None,
            hint: None,
            debug: None,
        }
    }

    /// Wrong HTTP verb on a task route.
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Metode tidak diizinkan")
    }

    /// The upstream credential was never configured.
    pub fn missing_credential() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Kunci API belum diatur")
    }

    /// Malformed or missing JSON request body.
    pub fn bad_body() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Body tidak valid (JSON)")
    }

    /// Missing required request field.
    pub fn missing_field(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn with_hint(mut self, hint: Option<&str>) -> Self {
        self.hint = hint.map(str::to_string);
        self
    }

    pub fn with_debug(mut self, debug: Option<DebugBundle>) -> Self {
        self.debug = debug;
        self
    }
}

impl From<PipelineError> for ApiError {
    fn from(error: PipelineError) -> Self {
        match error {
            PipelineError::InvalidInput(message) => Self::new(StatusCode::BAD_REQUEST, message),
            PipelineError::Blocked { reason } => {
                let mut api = Self::new(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("Konten ditolak oleh kebijakan keamanan AI ({}).", reason),
                );
                // The block arrives in a 2xx provider response.
                api.upstream_status = Some(200);
                api
            }
            PipelineError::Upstream { status, message } => {
                let code = StatusCode::from_u16(status)
                    .ok()
                    .filter(|code| code.is_client_error() || code.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                let mut api = Self::new(code, message);
                api.upstream_status = Some(status);
                api
            }
            PipelineError::EmptyCompletion { reason } => {
                let mut api = Self::new(
                    StatusCode::BAD_GATEWAY,
                    format!("Tidak ada keluaran dari model ({}).", reason),
                );
                api.upstream_status = Some(200);
                api
            }
            PipelineError::Extraction(detail) => {
                tracing::error!(error = %detail, "completion could not be parsed");
                Self::new(
                    StatusCode::BAD_GATEWAY,
                    "AI memberikan respons yang tidak terduga. Coba lagi.",
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            hint: self.hint,
            debug: self.debug,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Paraphrase troubleshooting hint keyed on the upstream status.
pub fn hint_for_status(status: Option<u16>) -> Option<&'static str> {
    match status? {
        401 | 403 => Some("Periksa API key & restrictions (IP/referrer) di Google AI Studio."),
        404 => Some("Cek path endpoint atau MODEL_ID."),
        405 => Some("Method harus POST ke Function."),
        429 => Some("Rate limit. Coba ulang sebentar lagi."),
        400 => Some("Payload tidak valid. Cek struktur JSON."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_passes_through_when_valid() {
        let api = ApiError::from(PipelineError::Upstream {
            status: 429,
            message: "rate limited".to_string(),
        });
        assert_eq!(api.status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(api.upstream_status, Some(429));
    }

    #[test]
    fn test_nonsense_upstream_status_becomes_502() {
        let api = ApiError::from(PipelineError::Upstream {
            status: 302,
            message: "redirected".to_string(),
        });
        assert_eq!(api.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_blocked_maps_to_422() {
        let api = ApiError::from(PipelineError::Blocked {
            reason: "SAFETY".to_string(),
        });
        assert_eq!(api.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(api.message.contains("SAFETY"));
    }

    #[test]
    fn test_empty_completion_names_the_finish_reason() {
        let api = ApiError::from(PipelineError::EmptyCompletion {
            reason: "MAX_TOKENS".to_string(),
        });
        assert_eq!(api.status, StatusCode::BAD_GATEWAY);
        assert_eq!(api.message, "Tidak ada keluaran dari model (MAX_TOKENS).");
    }

    #[test]
    fn test_hints_cover_the_known_statuses() {
        assert!(hint_for_status(Some(401)).unwrap().contains("API key"));
        assert!(hint_for_status(Some(429)).unwrap().contains("Rate limit"));
        assert_eq!(hint_for_status(Some(500)), None);
        assert_eq!(hint_for_status(None), None);
    }
}
