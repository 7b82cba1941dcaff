//! Retry and redaction behavior against a local stub upstream.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use gemini_client::{GeminiClient, GeminiError, GenerateContentRequest, RetryPolicy};

const MODEL: &str = "gemini-2.5-flash";

async fn spawn_stub(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn stub_client(addr: SocketAddr, api_key: &str) -> GeminiClient {
    GeminiClient::new(api_key)
        .with_base_url(format!("http://{}", addr))
        .with_retry_policy(RetryPolicy {
            max_retries: 1,
            backoff: Duration::from_millis(10),
        })
}

fn success_body() -> String {
    r#"{"candidates":[{"content":{"parts":[{"text":"halo dunia"}]},"finishReason":"STOP"}]}"#
        .to_string()
}

#[tokio::test]
async fn rate_limited_call_succeeds_on_retry() {
    let hits = Arc::new(AtomicUsize::new(0));
    let handler_hits = hits.clone();

    let router = Router::new().route(
        "/models/:model_call",
        post(move || {
            let hits = handler_hits.clone();
            async move {
                if hits.fetch_add(1, Ordering::SeqCst) == 0 {
                    (
                        StatusCode::TOO_MANY_REQUESTS,
                        r#"{"error":{"message":"quota exceeded"}}"#.to_string(),
                    )
                } else {
                    (StatusCode::OK, success_body())
                }
            }
        }),
    );

    let addr = spawn_stub(router).await;
    let client = stub_client(addr, "test-key");

    let text = client
        .generate(MODEL, &GenerateContentRequest::from_text("halo"))
        .await
        .unwrap();

    assert_eq!(text, "halo dunia");
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn persistent_rate_limit_fails_after_bounded_retry() {
    let hits = Arc::new(AtomicUsize::new(0));
    let handler_hits = hits.clone();

    let router = Router::new().route(
        "/models/:model_call",
        post(move || {
            let hits = handler_hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    r#"{"error":{"message":"quota exceeded"}}"#.to_string(),
                )
            }
        }),
    );

    let addr = spawn_stub(router).await;
    let client = stub_client(addr, "test-key");

    let err = client
        .generate(MODEL, &GenerateContentRequest::from_text("halo"))
        .await
        .unwrap_err();

    assert!(matches!(err, GeminiError::Api { status: 429, .. }));
    // one initial call plus exactly one retry
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn non_transient_failure_is_not_retried() {
    let hits = Arc::new(AtomicUsize::new(0));
    let handler_hits = hits.clone();

    let router = Router::new().route(
        "/models/:model_call",
        post(move || {
            let hits = handler_hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (
                    StatusCode::BAD_REQUEST,
                    r#"{"error":{"message":"invalid request"}}"#.to_string(),
                )
            }
        }),
    );

    let addr = spawn_stub(router).await;
    let client = stub_client(addr, "test-key");

    let err = client
        .generate(MODEL, &GenerateContentRequest::from_text("halo"))
        .await
        .unwrap_err();

    assert!(matches!(err, GeminiError::Api { status: 400, .. }));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn upstream_error_echoing_credential_is_redacted() {
    let router = Router::new().route(
        "/models/:model_call",
        post(|| async {
            (
                StatusCode::FORBIDDEN,
                r#"{"error":{"message":"API key sk-rahasia-999 is not authorized"}}"#.to_string(),
            )
        }),
    );

    let addr = spawn_stub(router).await;
    let client = stub_client(addr, "sk-rahasia-999");

    let err = client
        .generate(MODEL, &GenerateContentRequest::from_text("halo"))
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(!message.contains("sk-rahasia-999"));
    assert!(message.contains("[REDACTED_KEY]"));
}

#[tokio::test]
async fn blocked_prompt_is_distinct_from_failure() {
    let router = Router::new().route(
        "/models/:model_call",
        post(|| async {
            (
                StatusCode::OK,
                r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#.to_string(),
            )
        }),
    );

    let addr = spawn_stub(router).await;
    let client = stub_client(addr, "test-key");

    let err = client
        .generate(MODEL, &GenerateContentRequest::from_text("halo"))
        .await
        .unwrap_err();

    assert!(matches!(err, GeminiError::Blocked { ref reason } if reason == "SAFETY"));
}

#[tokio::test]
async fn empty_candidates_report_finish_reason() {
    let router = Router::new().route(
        "/models/:model_call",
        post(|| async {
            (
                StatusCode::OK,
                r#"{"candidates":[{"content":{"parts":[]},"finishReason":"MAX_TOKENS"}]}"#
                    .to_string(),
            )
        }),
    );

    let addr = spawn_stub(router).await;
    let client = stub_client(addr, "test-key");

    let err = client
        .generate(MODEL, &GenerateContentRequest::from_text("halo"))
        .await
        .unwrap_err();

    assert!(matches!(err, GeminiError::NoContent { ref finish_reason } if finish_reason == "MAX_TOKENS"));
}

#[tokio::test]
async fn credential_travels_in_header_not_url() {
    let captured = Arc::new(std::sync::Mutex::new(None::<String>));
    let handler_captured = captured.clone();

    let router = Router::new().route(
        "/models/:model_call",
        post(move |headers: axum::http::HeaderMap| {
            let captured = handler_captured.clone();
            async move {
                let key = headers
                    .get("x-goog-api-key")
                    .and_then(|v| v.to_str().ok())
                    .map(|v| v.to_string());
                *captured.lock().unwrap() = key;
                (StatusCode::OK, success_body())
            }
        }),
    );

    let addr = spawn_stub(router).await;
    let client = stub_client(addr, "test-key");

    client
        .generate(MODEL, &GenerateContentRequest::from_text("halo"))
        .await
        .unwrap();

    assert_eq!(captured.lock().unwrap().as_deref(), Some("test-key"));
}
