use thiserror::Error;

/// Why a submission failed. Users see one message regardless of the variant;
/// the distinction exists for logs.
#[derive(Debug, Error)]
pub enum EvaluatorError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Evaluator request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Evaluator returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode evaluator response: {0}")]
    Decode(String),

    #[error("Invalid upload part: {0}")]
    InvalidPart(String),
}

impl EvaluatorError {
    /// The HTTP status, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            EvaluatorError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
