//! Exercises [`HttpBackend`] against an in-process axum server.

use std::net::SocketAddr;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use dashaway_analysis::{AnalysisBackend, AnalysisError, HttpBackend};
use dashaway_core::models::segment::SegmentKind;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct Incoming {
    text: String,
}

async fn process(headers: HeaderMap, Json(body): Json<Incoming>) -> Response {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("anonymous")
        .to_string();

    match body.text.as_str() {
        "quota" => (
            StatusCode::FORBIDDEN,
            Json(json!({ "detail": "You have used your 1 free try. Sign up for more." })),
        )
            .into_response(),
        "coded" => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "detail": "Slow down", "code": "quota_exceeded" })),
        )
            .into_response(),
        "forbidden" => (
            StatusCode::FORBIDDEN,
            Json(json!({ "detail": "Account suspended" })),
        )
            .into_response(),
        "boom" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "Internal server error" })),
        )
            .into_response(),
        "garbled" => (StatusCode::OK, "not json").into_response(),
        text => Json(json!({
            "segments": [
                { "type": "text", "content": auth },
                { "type": "em_dash", "content": "\u{2014}", "suggestions": [",", ";"] },
                { "type": "text", "content": text },
            ],
            "readability_score": 9.1,
        }))
        .into_response(),
    }
}

async fn spawn_server() -> SocketAddr {
    let app = Router::new().route("/api/process", post(process));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn backend() -> HttpBackend {
    let addr = spawn_server().await;
    HttpBackend::new(format!("http://{addr}/")).unwrap()
}

#[test]
fn process_url_joins_base_without_double_slash() {
    let backend = HttpBackend::new("http://localhost:8000/").unwrap();
    assert_eq!(backend.process_url(), "http://localhost:8000/api/process");
}

#[tokio::test]
async fn success_parses_segments_and_score() {
    let backend = backend().await;
    let response = backend.process("hello", None).await.unwrap();

    assert_eq!(response.readability_score, Some(9.1));
    assert_eq!(response.segments.len(), 3);
    assert_eq!(response.segments[0].kind, SegmentKind::Plain);
    assert_eq!(response.segments[0].content, "anonymous");
    assert_eq!(response.segments[1].kind, SegmentKind::EmDash);
    assert_eq!(response.segments[1].suggestions, [",", ";"]);
    assert!(response.segments[2].suggestions.is_empty());
    assert_eq!(response.segments[2].content, "hello");
}

#[tokio::test]
async fn bearer_token_is_sent_as_authorization_header() {
    let backend = backend().await;
    let response = backend.process("hello", Some("abc123")).await.unwrap();
    assert_eq!(response.segments[0].content, "Bearer abc123");
}

#[tokio::test]
async fn quota_phrase_on_403_is_quota_exceeded() {
    let backend = backend().await;
    let err = backend.process("quota", None).await.unwrap_err();
    assert!(matches!(err, AnalysisError::QuotaExceeded { .. }));
    assert_eq!(err.user_message(), None);
}

#[tokio::test]
async fn structured_quota_code_wins_at_any_status() {
    let backend = backend().await;
    let err = backend.process("coded", None).await.unwrap_err();
    assert!(matches!(err, AnalysisError::QuotaExceeded { .. }));
}

#[tokio::test]
async fn other_403_is_a_plain_failure() {
    let backend = backend().await;
    let err = backend.process("forbidden", None).await.unwrap_err();
    assert_eq!(
        err,
        AnalysisError::RequestFailed {
            status: 403,
            message: "Account suspended".to_string()
        }
    );
}

#[tokio::test]
async fn server_error_carries_detail() {
    let backend = backend().await;
    let err = backend.process("boom", None).await.unwrap_err();
    assert_eq!(err.user_message().as_deref(), Some("Internal server error"));
}

#[tokio::test]
async fn malformed_success_body_is_invalid_response() {
    let backend = backend().await;
    let err = backend.process("garbled", None).await.unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidResponse(_)));
}

#[tokio::test]
async fn connection_refused_is_network_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(format!("http://{addr}")).unwrap();
    let err = backend.process("hello", None).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Network(_)));
}
