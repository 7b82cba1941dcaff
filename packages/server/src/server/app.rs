//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use gemini_client::GeminiClient;
use textops::{GeminiCompletion, ModelPolicy, Pipeline};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::error::ApiError;
use crate::server::routes::{
    authenticity_handler, citation_handler, correction_handler, detection_handler, health_handler,
    humanize_handler, paraphrase_handler, plagiarism_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Absent when no credential is configured; task routes answer 500.
    pub pipeline: Option<Arc<Pipeline>>,
    pub default_model: String,
}

impl AppState {
    /// The pipeline, or the configuration error every task route returns
    /// while the credential is missing.
    pub fn pipeline(&self) -> Result<&Arc<Pipeline>, ApiError> {
        self.pipeline
            .as_ref()
            .ok_or_else(ApiError::missing_credential)
    }
}

/// JSON-bodied fallback for wrong verbs on task routes.
async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Build the Axum application router
///
/// The server boots even without a credential so `/health` can report a
/// misconfigured deploy; task routes answer 500 until the key arrives.
pub fn build_app(gemini_api_key: Option<String>, models: ModelPolicy) -> Router {
    let default_model = models.default_model.clone();

    let pipeline = gemini_api_key.map(|key| {
        let client = Arc::new(GeminiCompletion::new(GeminiClient::new(key)));
        Arc::new(Pipeline::new(client).with_model_policy(models))
    });

    build_router(AppState {
        pipeline,
        default_model,
    })
}

/// Assemble routes and layers around prepared state. Split out so tests can
/// drive the router with a scripted pipeline.
pub fn build_router(app_state: AppState) -> Router {
    // CORS configuration - any origin, mirroring the public API contract
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route(
            "/api/paraphrase",
            post(paraphrase_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/ai-detector",
            post(detection_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/check-authenticity",
            post(authenticity_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/generate-citation",
            post(citation_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/humanize-text",
            post(humanize_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/text-corrector",
            post(correction_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/plagiarism-checker",
            post(plagiarism_handler).fallback(method_not_allowed),
        )
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
