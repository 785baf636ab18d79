//! The upload widget's state: at most one selected paper, a loading flag, an
//! optional error message, and the verdict once one arrives.

use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;
use tracing::warn;

use arxready_common::{DroppedFile, PaperFile, Verdict};

/// The only message a failed submission ever shows.
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Failed to evaluate the paper. Please try again or contact support.";

pub const IDLE_PROMPT: &str = "Drag and drop a PDF or TXT file here to upload";
pub const DRAG_ACTIVE_PROMPT: &str = "Drop the file here...";

/// Why a drop did not change the selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropRejection {
    #[error("Please upload exactly one file. {count} were dropped.")]
    TooManyFiles { count: usize },

    #[error("Only PDF and TXT files are accepted. {name} is neither.")]
    UnsupportedType { name: String },
}

/// What a freshly rendered page shows. A rendered form never carries a file,
/// so a retained selection is reported as `reselect` and the prompt stays idle.
/// Enabling Submit and the in-flight label are left to the client script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    Upload {
        prompt: String,
        reselect: Option<String>,
        error: Option<String>,
        rejection: Option<String>,
    },
    Result {
        approved: bool,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Dropzone {
    file: Option<PaperFile>,
    loading: bool,
    error: Option<String>,
    verdict: Option<Verdict>,
    rejection: Option<DropRejection>,
}

impl Dropzone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&PaperFile> {
        self.file.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn rejection(&self) -> Option<&DropRejection> {
        self.rejection.as_ref()
    }

    /// Offer files to the widget. An empty drop changes nothing; a rejected
    /// drop leaves the current selection in place.
    pub fn on_drop(&mut self, files: Vec<DroppedFile>) -> Result<(), DropRejection> {
        let mut files: Vec<DroppedFile> = files.into_iter().filter(|f| !f.is_blank()).collect();

        let result = match files.len() {
            0 => return Ok(()),
            1 => {
                let candidate = files.remove(0);
                let name = candidate.name.clone();
                match PaperFile::from_dropped(candidate) {
                    Some(paper) => {
                        self.file = Some(paper);
                        self.error = None;
                        Ok(())
                    }
                    None => Err(DropRejection::UnsupportedType { name }),
                }
            }
            count => Err(DropRejection::TooManyFiles { count }),
        };

        self.rejection = result.as_ref().err().cloned();
        result
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.loading
    }

    /// Start a submission. Returns the paper to send, or `None` when there is
    /// nothing to send or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<&PaperFile> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.file.as_ref()
    }

    /// Settle the in-flight submission. Failures keep the selection so the
    /// user can resubmit.
    pub fn finish<E: Display>(&mut self, outcome: Result<Verdict, E>) {
        self.loading = false;
        match outcome {
            Ok(verdict) => {
                self.verdict = Some(verdict);
                self.error = None;
            }
            Err(e) => {
                warn!("Paper submission failed: {e}");
                self.error = Some(SUBMISSION_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// "Submit Another Paper".
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn view(&self) -> View {
        if let Some(verdict) = self.verdict {
            return View::Result { approved: verdict.approved };
        }

        View::Upload {
            prompt: IDLE_PROMPT.to_string(),
            reselect: self.file.as_ref().map(|f| f.name.clone()),
            error: self.error.clone(),
            rejection: self.rejection.as_ref().map(|r| r.to_string()),
        }
    }
}
