//! Shared application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

use arxready_common::Config;
use arxready_evaluator::{Evaluator, HttpEvaluator};

use crate::views::Templates;

/// Shared state injected into every Axum handler. Immutable after startup;
/// each request builds its own `Dropzone`.
pub struct AppState {
    pub evaluator: Arc<dyn Evaluator>,
    pub templates: Templates,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, evaluator: Arc<dyn Evaluator>) -> anyhow::Result<Self> {
        let templates = Templates::new()?;
        Ok(Self { evaluator, templates, config })
    }

    /// State backed by the real evaluation service named in `config`.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let evaluator = Arc::new(HttpEvaluator::new(&config.evaluator)?);
        Self::new(config, evaluator)
    }

    /// The configured static directory, or the one shipped with this crate
    /// when the configured path does not exist.
    pub fn static_dir(&self) -> PathBuf {
        let configured = PathBuf::from(&self.config.server.static_dir);
        if configured.is_dir() {
            return configured;
        }
        let bundled = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"));
        warn!(
            "Static directory {} not found, serving {}",
            configured.display(),
            bundled.display()
        );
        bundled
    }
}

pub type SharedState = Arc<AppState>;
