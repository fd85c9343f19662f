pub mod api;
pub mod config;
pub mod error;
pub mod exa;
pub mod llm;
pub mod moderation;
pub mod summarizer;
pub mod tags;

use std::sync::Arc;
use config::Config;
use error::{AppError, Result};
use summarizer::Summarizer;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    summarizer: std::result::Result<Arc<Summarizer>, String>,
}

impl AppState {
    /// Builds the collaborator clients once. A missing credential does not stop
    /// the server; every summarize request reports it instead.
    pub fn new(config: Config) -> Self {
        let summarizer = Summarizer::from_config(&config)
            .map(Arc::new)
            .map_err(|e| e.to_string());
        Self {
            config: Arc::new(config),
            summarizer,
        }
    }

    pub fn with_summarizer(config: Config, summarizer: Summarizer) -> Self {
        Self {
            config: Arc::new(config),
            summarizer: Ok(Arc::new(summarizer)),
        }
    }

    pub fn summarizer(&self) -> Result<&Summarizer> {
        self.summarizer
            .as_deref()
            .map_err(|msg| AppError::ConfigError(msg.clone()))
    }

    pub fn startup_error(&self) -> Option<&str> {
        self.summarizer.as_ref().err().map(String::as_str)
    }
}
