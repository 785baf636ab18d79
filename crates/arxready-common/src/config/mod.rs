//! Configuration loading for arxready.
//! Reads arxready.toml from the current directory or the path in ARXREADY_CONFIG.
//! A missing file is not an error: every field has a default.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ArxreadyError, Result};

pub const CONFIG_PATH_ENV: &str = "ARXREADY_CONFIG";
pub const BIND_ENV: &str = "ARXREADY_BIND";
pub const EVALUATOR_URL_ENV: &str = "ARXREADY_EVALUATOR_URL";
pub const DEFAULT_CONFIG_PATH: &str = "arxready.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Upper bound on the multipart request body, in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_bind()             -> String { "127.0.0.1:3000".to_string() }
fn default_static_dir()       -> String { "static".to_string() }
fn default_max_upload_bytes() -> usize  { 32 * 1024 * 1024 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind:             default_bind(),
            static_dir:       default_static_dir(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    #[serde(default = "default_evaluator_url")]
    pub base_url: String,
    /// Unset means the request waits for as long as the service takes.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_evaluator_url() -> String { "http://localhost:8000".to_string() }

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self { base_url: default_evaluator_url(), timeout_secs: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "arxready=debug,info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}


impl Config {
    /// Load configuration from arxready.toml, then apply environment overrides.
    /// Checks ARXREADY_CONFIG first, then the current directory.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&path).exists() {
            info!("Loading configuration from {}", path);
            Self::from_path(Path::new(&path))?
        } else {
            debug!("No config file at {}, using defaults", path);
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| ArxreadyError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Apply ARXREADY_BIND / ARXREADY_EVALUATOR_URL on top of file values.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(BIND_ENV).filter(|v| !v.trim().is_empty()) {
            self.server.bind = bind.trim().to_string();
        }
        if let Some(url) = lookup(EVALUATOR_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.evaluator.base_url = url.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        let url = self.evaluator.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ArxreadyError::Config(format!(
                "evaluator.base_url must be an http(s) URL, got {:?}",
                self.evaluator.base_url
            )));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(ArxreadyError::Config(
                "server.max_upload_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|_| {
            ArxreadyError::Config(format!("invalid server.bind address {:?}", self.server.bind))
        })
    }
}
