//! reqwest-backed evaluator: one unauthenticated multipart POST per paper.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

use arxready_common::config::EvaluatorConfig;
use arxready_common::{PaperFile, Verdict};

use crate::error::EvaluatorError;
use crate::Evaluator;

pub const EVALUATE_PATH: &str = "/evaluate-paper";
pub const HEALTH_PATH: &str = "/health";

/// Form field the service reads the upload from.
const FILE_FIELD: &str = "file";

/// Longest response body excerpt carried into errors and logs.
const BODY_EXCERPT_LEN: usize = 512;

/// Evaluation service client.
pub struct HttpEvaluator {
    base_url: String,
    client: Client,
}

impl HttpEvaluator {
    pub fn new(config: &EvaluatorConfig) -> Result<Self, EvaluatorError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(EvaluatorError::Client)?;

        Ok(Self::with_client(&config.base_url, client))
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn evaluate_url(&self) -> String {
        format!("{}{}", self.base_url, EVALUATE_PATH)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_PATH)
    }
}

#[async_trait]
impl Evaluator for HttpEvaluator {
    async fn evaluate(&self, paper: &PaperFile) -> Result<Verdict, EvaluatorError> {
        let part = reqwest::multipart::Part::bytes(paper.bytes.clone())
            .file_name(paper.name.clone())
            .mime_str(paper.mime())
            .map_err(|e| EvaluatorError::InvalidPart(e.to_string()))?;

        let form = reqwest::multipart::Form::new().part(FILE_FIELD, part);

        debug!(
            file = %paper.name,
            kind = %paper.kind,
            bytes = paper.len(),
            "Submitting paper to {}",
            self.evaluate_url()
        );

        let resp = self.client
            .post(self.evaluate_url())
            .multipart(form)
            .send()
            .await
            .map_err(EvaluatorError::Transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(EvaluatorError::Transport)?;

        if !status.is_success() {
            let body = excerpt(&body);
            warn!(status = status.as_u16(), "Evaluator rejected {}: {}", paper.name, body);
            return Err(EvaluatorError::Status { status: status.as_u16(), body });
        }

        let verdict: Verdict = serde_json::from_str(&body).map_err(|e| {
            EvaluatorError::Decode(format!("{e} (body: {})", excerpt(&body)))
        })?;

        info!(file = %paper.name, approved = verdict.approved, "Evaluator verdict received");
        Ok(verdict)
    }

    async fn health(&self) -> Result<bool, EvaluatorError> {
        let resp = self.client
            .get(self.health_url())
            .send()
            .await
            .map_err(EvaluatorError::Transport)?;

        Ok(resp.status().is_success())
    }

    fn endpoint(&self) -> String {
        self.evaluate_url()
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
