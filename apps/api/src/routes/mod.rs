pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::warn;

use crate::questions::handlers;
use crate::state::AppState;

/// Room for multipart framing and the job description on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    // Larger than the file cap so oversized uploads reach validation and get a clear 413.
    let body_limit = request_body_limit(state.config.limits.max_file_size_bytes);

    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/generate-questions",
            post(handlers::handle_generate_questions),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Saturates so a huge configured file cap cannot overflow.
fn request_body_limit(max_file_size_bytes: usize) -> usize {
    max_file_size_bytes
        .saturating_mul(2)
        .saturating_add(MULTIPART_OVERHEAD_BYTES)
}

/// CORS restricted to the configured frontend origins.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            // A wildcard cannot be combined with credentials.
            Ok(value) if value != "*" => Some(value),
            _ => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, RequestLimits};
    use crate::llm_client::LlmClient;

    const BOUNDARY: &str = "interview-api-test-boundary";
    const JD: &str = "Backend engineer with Golang and Kubernetes experience.";

    fn test_router(limits: RequestLimits) -> Router {
        let state = AppState {
            llm: Arc::new(LlmClient::new(None).unwrap()),
            config: Config {
                limits,
                ..Config::default()
            },
        };
        build_router(state)
    }

    /// Builds a multipart body from (field name, optional filename, content) parts.
    fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, filename, content) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            let disposition = match filename {
                Some(file) => {
                    format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{file}\"\r\n")
                }
                None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n"),
            };
            body.extend_from_slice(disposition.as_bytes());
            body.extend_from_slice(b"\r\n");
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    async fn post_form(router: Router, parts: &[(&str, Option<&str>, &[u8])]) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/generate-questions")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn error_code(body: &Value) -> &str {
        body["error"]["code"].as_str().unwrap_or_default()
    }

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let router = test_router(RequestLimits::default());
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_non_pdf_upload_is_rejected() {
        let router = test_router(RequestLimits::default());
        let (status, body) = post_form(
            router,
            &[
                ("resume", Some("resume.docx"), b"not a pdf"),
                ("job_description", None, JD.as_bytes()),
            ],
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_job_description_is_rejected() {
        let router = test_router(RequestLimits::default());
        let (status, body) =
            post_form(router, &[("resume", Some("resume.pdf"), b"%PDF-1.4")]).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_short_job_description_is_rejected() {
        let router = test_router(RequestLimits::default());
        let (status, body) = post_form(
            router,
            &[
                ("resume", Some("resume.pdf"), b"%PDF-1.4"),
                ("job_description", None, b"Rust dev"),
            ],
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_oversized_file_is_payload_too_large() {
        let router = test_router(RequestLimits {
            max_file_size_bytes: 16,
            ..RequestLimits::default()
        });
        let (status, body) = post_form(
            router,
            &[
                ("resume", Some("resume.pdf"), &[b'x'; 100]),
                ("job_description", None, JD.as_bytes()),
            ],
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(error_code(&body), "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_an_extraction_error() {
        let router = test_router(RequestLimits::default());
        let (status, body) = post_form(
            router,
            &[
                ("resume", Some("resume.pdf"), b"this is not really a pdf"),
                ("job_description", None, JD.as_bytes()),
            ],
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), "EXTRACTION_ERROR");
    }

    #[test]
    fn test_cors_layer_skips_invalid_origins() {
        // Must not panic on a header-invalid origin.
        let _layer = cors_layer(&[
            "http://localhost:3000".to_string(),
            "bad\norigin".to_string(),
            "*".to_string(),
        ]);
    }

    #[test]
    fn test_body_limit_saturates_for_huge_file_caps() {
        assert_eq!(request_body_limit(1_024), 2_048 + MULTIPART_OVERHEAD_BYTES);
        assert_eq!(request_body_limit(usize::MAX), usize::MAX);
        assert_eq!(request_body_limit(usize::MAX / 2 + 1), usize::MAX);
    }
}
