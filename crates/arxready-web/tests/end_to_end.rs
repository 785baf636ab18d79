//! Web UI wired to the real HTTP client, talking to a fake evaluation service.

mod common;

use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

use arxready_common::config::EvaluatorConfig;
use arxready_common::Config;
use arxready_evaluator::HttpEvaluator;
use arxready_test_utils::pretty_assertions::assert_eq;
use arxready_test_utils::{unreachable_base_url, FakeEvaluator, FakeResponse, MultipartBody, SAMPLE_PDF};
use arxready_web::dropzone::SUBMISSION_FAILED_MESSAGE;

use common::{app, get, submit, Outcome, RecordingEvaluator};

fn http_app(base_url: String) -> axum::Router {
    let evaluator = HttpEvaluator::new(&EvaluatorConfig { base_url, timeout_secs: Some(10) }).unwrap();
    app(Arc::new(evaluator))
}

fn paper() -> MultipartBody {
    MultipartBody::new().file("file", "paper.pdf", Some("application/pdf"), SAMPLE_PDF)
}

#[tokio::test]
async fn test_upload_is_forwarded_as_file_field() {
    let fake = FakeEvaluator::start(FakeResponse::Verdict(true)).await;
    let (status, html) = submit(http_app(fake.base_url()), paper()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("This paper is ready for arXiv"));

    let uploads = fake.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].field, "file");
    assert_eq!(uploads[0].file_name.as_deref(), Some("paper.pdf"));
    assert_eq!(uploads[0].content_type.as_deref(), Some("application/pdf"));
}

#[tokio::test]
async fn test_empty_submission_never_reaches_service() {
    let fake = FakeEvaluator::start(FakeResponse::Verdict(true)).await;
    let (status, _) = submit(http_app(fake.base_url()), MultipartBody::new().empty_file("file")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fake.request_count(), 0);
}

#[tokio::test]
async fn test_service_error_status_shows_generic_message() {
    let fake = FakeEvaluator::start(FakeResponse::Status(
        400,
        "Could not extract any text from the file.".to_string(),
    ))
    .await;
    let (status, html) = submit(http_app(fake.base_url()), paper()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(fake.request_count(), 1);
    assert!(html.contains(SUBMISSION_FAILED_MESSAGE));
    assert!(!html.contains("Could not extract any text"));
}

#[tokio::test]
async fn test_unreachable_service_shows_generic_message() {
    let (status, html) = submit(http_app(unreachable_base_url().await), paper()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains(r#"data-view="upload""#));
    assert!(html.contains(SUBMISSION_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_health_is_local_only() {
    let (status, body) = get(http_app(unreachable_base_url().await), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_status_reports_evaluator_reachability() {
    let fake = FakeEvaluator::start(FakeResponse::Verdict(true)).await;
    let (_, body) = get(http_app(fake.base_url()), "/api/status").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["evaluator"]["reachable"], true);
    assert_eq!(json["evaluator"]["url"], format!("{}/evaluate-paper", fake.base_url()));
    assert!(json["evaluator"].get("error").is_none());

    let (_, body) = get(http_app(unreachable_base_url().await), "/api/status").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["evaluator"]["reachable"], false);
    assert!(json["evaluator"]["error"].is_string());
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let router = app(RecordingEvaluator::new(Outcome::Verdict(true)));

    let (status, js) = get(router.clone(), "/static/js/dropzone.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(js.contains("X-Requested-With"));
    assert!(js.contains("throw new Error('no verdict in response')"));

    let (status, _) = get(router, "/static/css/main.css").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_state_from_config_uses_configured_service() {
    let fake = FakeEvaluator::start(FakeResponse::Verdict(false)).await;
    let mut config = Config::default();
    config.evaluator.base_url = fake.base_url();

    let state = arxready_web::state::AppState::from_config(config).unwrap();
    let (_, html) = submit(arxready_web::router::build_router(state), paper()).await;

    assert!(html.contains("This paper is not ready for arXiv"));
    assert_eq!(fake.request_count(), 1);
}
