use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    model: String,
}

/// Liveness endpoint
///
/// Always answers 200, even without a configured credential, so a
/// misconfigured deploy stays observable. `status` flips to `degraded`
/// while task endpoints would answer 500.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    let status = if state.pipeline.is_some() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        model: state.default_model.clone(),
    })
}
