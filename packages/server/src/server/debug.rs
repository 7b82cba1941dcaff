//! Paraphrase debug bundle assembly.
//!
//! When a paraphrase request carries `debug: true`, error responses include
//! a diagnostic snapshot of the exchange. Header sampling is allow-listed;
//! the `authorization` header never enters the bundle, and the upstream
//! excerpt is truncated and arrives already credential-redacted.

use std::collections::BTreeMap;

use axum::http::{HeaderMap, Method};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// Headers worth echoing back to the caller for diagnosis.
const SAMPLED_HEADERS: [&str; 4] = ["origin", "referer", "user-agent", "content-type"];

/// Truncation cap for the upstream body excerpt.
const PREVIEW_LIMIT: usize = 600;

/// Diagnostic snapshot attached to paraphrase error responses on request.
#[derive(Debug, Clone, Serialize)]
pub struct DebugBundle {
    pub request_id: String,
    pub server_time: String,
    pub endpoint: String,
    pub model_used: String,
    pub http_method: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_upstream: Option<u16>,
    pub headers_sample: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_preview: Option<String>,
}

impl DebugBundle {
    pub fn new(
        model: &str,
        method: &Method,
        path: &str,
        headers: &HeaderMap,
        status_upstream: Option<u16>,
        upstream_preview: Option<&str>,
    ) -> Self {
        let headers_sample = SAMPLED_HEADERS
            .iter()
            .filter_map(|name| {
                headers
                    .get(*name)
                    .and_then(|value| value.to_str().ok())
                    .map(|value| (name.to_string(), value.to_string()))
            })
            .collect();

        Self {
            request_id: Uuid::new_v4().to_string(),
            server_time: Utc::now().to_rfc3339(),
            endpoint: format!(
                "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
                model
            ),
            model_used: model.to_string(),
            http_method: method.to_string(),
            path: path.to_string(),
            status_upstream,
            headers_sample,
            upstream_preview: upstream_preview.map(truncate_preview),
        }
    }
}

fn truncate_preview(text: &str) -> String {
    if text.len() <= PREVIEW_LIMIT {
        return text.to_string();
    }
    let mut end = PREVIEW_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_authorization_header_is_never_sampled() {
        let mut headers = HeaderMap::new();
        headers.insert("origin", HeaderValue::from_static("https://contoh.id"));
        headers.insert("authorization", HeaderValue::from_static("Bearer rahasia"));
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let bundle = DebugBundle::new(
            "gemini-2.5-flash",
            &Method::POST,
            "/api/paraphrase",
            &headers,
            Some(429),
            None,
        );

        assert_eq!(
            bundle.headers_sample.get("origin").map(String::as_str),
            Some("https://contoh.id")
        );
        assert!(!bundle.headers_sample.contains_key("authorization"));
        assert_eq!(bundle.status_upstream, Some(429));
        assert_eq!(bundle.http_method, "POST");
        assert!(bundle.endpoint.ends_with("gemini-2.5-flash:generateContent"));
    }

    #[test]
    fn test_long_previews_are_truncated() {
        let long = "x".repeat(2 * PREVIEW_LIMIT);
        let truncated = truncate_preview(&long);
        assert_eq!(truncated.len(), PREVIEW_LIMIT + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_short_previews_pass_through() {
        assert_eq!(truncate_preview("singkat"), "singkat");
    }
}
