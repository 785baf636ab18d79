//! arxready-evaluator: client for the external paper evaluation service.
//!
//! The service classifies an uploaded paper and answers with a single boolean
//! verdict. This crate only transports the file and decodes the answer; the
//! model itself lives outside this workspace.

pub mod client;
pub mod error;

pub use client::{HttpEvaluator, EVALUATE_PATH, HEALTH_PATH};
pub use error::EvaluatorError;

use arxready_common::{PaperFile, Verdict};
use async_trait::async_trait;

/// Anything that can turn a paper into a verdict.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Submit one paper. Exactly one request per call; no retry.
    async fn evaluate(&self, paper: &PaperFile) -> Result<Verdict, EvaluatorError>;

    /// Whether the service answers its health probe with a 2xx.
    async fn health(&self) -> Result<bool, EvaluatorError>;

    /// Human-readable location of the service, for status output.
    fn endpoint(&self) -> String;
}
