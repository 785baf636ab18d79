//! HTTP handlers for all web routes.

pub mod system;
pub mod upload;
