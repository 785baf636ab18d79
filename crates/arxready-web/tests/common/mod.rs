#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use arxready_common::{Config, PaperFile, Verdict};
use arxready_evaluator::{Evaluator, EvaluatorError};
use arxready_test_utils::MultipartBody;
use arxready_web::router::build_router;
use arxready_web::state::AppState;

/// What the in-process evaluator answers.
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Verdict(bool),
    Status(u16),
}

/// Evaluator double that counts calls and keeps the last paper it saw.
pub struct RecordingEvaluator {
    outcome: Outcome,
    calls: AtomicUsize,
    last: Mutex<Option<PaperFile>>,
}

impl RecordingEvaluator {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_paper(&self) -> Option<PaperFile> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl Evaluator for RecordingEvaluator {
    async fn evaluate(&self, paper: &PaperFile) -> Result<Verdict, EvaluatorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(paper.clone());
        match self.outcome {
            Outcome::Verdict(approved) => Ok(Verdict { approved }),
            Outcome::Status(status) => Err(EvaluatorError::Status {
                status,
                body: "{\"detail\":\"test failure\"}".to_string(),
            }),
        }
    }

    async fn health(&self) -> Result<bool, EvaluatorError> {
        Ok(true)
    }

    fn endpoint(&self) -> String {
        "memory://recording".to_string()
    }
}

pub fn app(evaluator: Arc<dyn Evaluator>) -> Router {
    app_with_config(Config::default(), evaluator)
}

pub fn app_with_config(config: Config, evaluator: Arc<dyn Evaluator>) -> Router {
    build_router(AppState::new(config, evaluator).unwrap())
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, req).await
}

pub async fn submit(app: Router, body: MultipartBody) -> (StatusCode, String) {
    send(app, submit_request(body, false)).await
}

pub async fn submit_fragment(app: Router, body: MultipartBody) -> (StatusCode, String) {
    send(app, submit_request(body, true)).await
}

fn submit_request(body: MultipartBody, fragment: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/submit")
        .header(header::CONTENT_TYPE, MultipartBody::content_type());
    if fragment {
        builder = builder.header("X-Requested-With", "fetch");
    }
    builder.body(Body::from(body.build())).unwrap()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}
