//! arxready-common: Shared types, errors, and configuration used across all arxready crates.

pub mod config;
pub mod entities;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use entities::{DroppedFile, PaperFile, PaperKind, Verdict};
pub use error::{ArxreadyError, Result};
