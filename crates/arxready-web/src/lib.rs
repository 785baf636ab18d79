//! arxready-web: "Is your paper ready for arXiv?" web UI.
//! Provides:
//!   - The upload page with its drag-and-drop Dropzone
//!   - The submit action that forwards one paper to the evaluation service
//!   - The Yes / No result view
//!   - Liveness and evaluator status endpoints

pub mod dropzone;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;
