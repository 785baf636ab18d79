//! Liveness of this server and reachability of the evaluation service.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::state::SharedState;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub status: &'static str,
    pub version: &'static str,
    pub evaluator: EvaluatorStatus,
}

#[derive(Debug, Serialize)]
pub struct EvaluatorStatus {
    pub url: String,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn api_status(State(state): State<SharedState>) -> Json<StatusReport> {
    let url = state.evaluator.endpoint();
    let (reachable, error) = match state.evaluator.health().await {
        Ok(up) => (up, None),
        Err(e) => {
            warn!("Evaluator health probe failed: {e}");
            (false, Some(e.to_string()))
        }
    };

    Json(StatusReport {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        evaluator: EvaluatorStatus { url, reachable, error },
    })
}
