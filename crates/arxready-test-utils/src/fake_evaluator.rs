//! In-process stand-in for the external evaluation service.

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the fake service answers to `POST /evaluate-paper`.
#[derive(Debug, Clone)]
pub enum FakeResponse {
    /// 200 with `{"approved": <bool>, "detail": "..."}`.
    Verdict(bool),
    /// Arbitrary status with a FastAPI-style `{"detail": ...}` body.
    Status(u16, String),
    /// 200 with the given body served as `application/json`.
    RawBody(String),
}

/// One multipart part as the fake service saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedUpload {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
struct Recorded {
    requests: usize,
    parts: Vec<ReceivedUpload>,
}

#[derive(Clone)]
struct FakeState {
    response: FakeResponse,
    recorded: Arc<Mutex<Recorded>>,
}

/// A fake evaluation service bound to `127.0.0.1:0`. Shuts down on drop.
pub struct FakeEvaluator {
    addr: SocketAddr,
    recorded: Arc<Mutex<Recorded>>,
    handle: JoinHandle<()>,
}

impl FakeEvaluator {
    pub async fn start(response: FakeResponse) -> Self {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let state = FakeState { response, recorded: Arc::clone(&recorded) };

        let app = Router::new()
            .route("/evaluate-paper", post(evaluate_paper))
            .route("/health", get(health))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake evaluator");
        let addr = listener.local_addr().expect("fake evaluator address");
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("fake evaluator stopped: {e}");
            }
        });

        Self { addr, recorded, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of `POST /evaluate-paper` requests received.
    pub fn request_count(&self) -> usize {
        self.recorded.lock().expect("fake evaluator state").requests
    }

    /// Every multipart part received, across all requests.
    pub fn uploads(&self) -> Vec<ReceivedUpload> {
        self.recorded.lock().expect("fake evaluator state").parts.clone()
    }
}

impl Drop for FakeEvaluator {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A base URL nothing is listening on, for exercising transport failures.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

async fn evaluate_paper(State(state): State<FakeState>, mut multipart: Multipart) -> Response {
    let mut parts = Vec::new();
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().unwrap_or_default().to_string();
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = match field.bytes().await {
                    Ok(b) => b.to_vec(),
                    Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
                };
                parts.push(ReceivedUpload { field: name, file_name, content_type, bytes });
            }
            Ok(None) => break,
            Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        }
    }

    {
        let mut recorded = state.recorded.lock().expect("fake evaluator state");
        recorded.requests += 1;
        recorded.parts.extend(parts);
    }

    match state.response {
        FakeResponse::Verdict(approved) => {
            Json(json!({ "approved": approved, "detail": "fake evaluator" })).into_response()
        }
        FakeResponse::Status(code, detail) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({ "detail": detail }))).into_response()
        }
        FakeResponse::RawBody(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
