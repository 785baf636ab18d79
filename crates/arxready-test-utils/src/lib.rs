//! arxready-test-utils: fixtures shared by the workspace test suites.
//!
//! - [`FakeEvaluator`]: a real HTTP server on an ephemeral port that speaks the
//!   evaluation service's `/evaluate-paper` and `/health` routes.
//! - [`MultipartBody`]: builds `multipart/form-data` request bodies for driving
//!   the web router in-process.

pub mod fake_evaluator;
pub mod multipart;

pub use fake_evaluator::{unreachable_base_url, FakeEvaluator, FakeResponse, ReceivedUpload};
pub use multipart::MultipartBody;

// Re-exported so test crates share one assertion style.
pub use pretty_assertions;

/// Minimal PDF header bytes; enough for anything that only sniffs the type.
pub const SAMPLE_PDF: &[u8] = b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\n%%EOF\n";

pub const SAMPLE_TEXT: &str = "This paper presents a new approach to quantum field theory that unifies \
gravitational and electromagnetic forces.";
