//! Application configuration
//!
//! Configuration loaded from .speaker-directory.toml, with the API URL
//! overridable from the environment.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable that replaces `api_base_url`
pub const API_URL_ENV: &str = "SPEAKERS_API_URL";

/// How favorite updates are reconciled with the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Apply locally, send the update, never look back.
    /// A failed update leaves the local flag ahead of the backend.
    #[default]
    Optimistic,

    /// Track in-flight updates per speaker and roll the flag back when
    /// the latest update for that speaker fails
    Reconcile,
}

/// Application configuration loaded from .speaker-directory.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the speaker backend (without `/api/speakers`)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Transport timeout in seconds (unset = transport default)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Favorite update reconciliation
    #[serde(default)]
    pub sync_mode: SyncMode,

    /// Initial state of the Saturday filter
    #[serde(default = "default_true")]
    pub show_saturday: bool,

    /// Initial state of the Sunday filter
    #[serde(default = "default_true")]
    pub show_sunday: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: None,
            sync_mode: SyncMode::default(),
            show_saturday: true,
            show_sunday: true,
        }
    }
}

impl AppConfig {
    /// Load config from file (CWD, then home, then config dir) or use
    /// defaults, then apply environment overrides
    pub fn load() -> Self {
        let config = Self::from_file().unwrap_or_else(|| {
            log::debug!("Using default app config");
            Self::default()
        });
        config.with_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    fn from_file() -> Option<Self> {
        let content = crate::load_config_file()?;
        match toml::from_str(&content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    }

    /// Replace the API URL when an override is present and non-empty
    pub fn with_api_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            log::info!("API URL overridden by {}: {}", API_URL_ENV, url);
            self.api_base_url = url;
        }
        self
    }

    /// Transport timeout, if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
