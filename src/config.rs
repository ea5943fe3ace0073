//! Configuration file support
//!
//! Loads configuration from TOML file at ~/.config/checkmate/config.toml
//! Falls back to defaults if the file doesn't exist or can't be parsed.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants;
use crate::paths::config_file_path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service connection settings
    pub api: ApiConfig,

    /// Toast and desktop notification settings
    pub notifications: NotificationConfig,

    /// Terminal UI settings
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Service base URL, e.g. https://checkmate.example.com/api
    pub base_url: String,

    /// Timeout for HTTP client requests (seconds)
    pub timeout_secs: u64,

    /// Access token for authorized requests (overrides the saved session)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_API_URL.to_string(),
            timeout_secs: constants::HTTP_CLIENT_TIMEOUT_SECS,
            token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a toast stays on screen (milliseconds)
    pub toast_ms: u64,

    /// Also announce a finished registration on the desktop
    pub desktop: bool,

    /// Duration for desktop notification display (milliseconds)
    pub desktop_timeout_ms: i32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_ms: constants::TOAST_TIMEOUT_MS,
            desktop: false,
            desktop_timeout_ms: constants::DESKTOP_NOTIFICATION_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Redraw interval when idle (milliseconds)
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: constants::EVENT_POLL_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => config.sanitized(),
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Replace values that would make the client unusable
    fn sanitized(mut self) -> Self {
        if self.api.timeout_secs == 0 {
            tracing::warn!(
                "api.timeout_secs = 0 would fail every request, using {}",
                constants::HTTP_CLIENT_TIMEOUT_SECS
            );
            self.api.timeout_secs = constants::HTTP_CLIENT_TIMEOUT_SECS;
        }
        if self.ui.tick_ms < constants::MIN_TICK_MS {
            tracing::warn!(
                "ui.tick_ms = {} is too short, using {}",
                self.ui.tick_ms,
                constants::MIN_TICK_MS
            );
            self.ui.tick_ms = constants::MIN_TICK_MS;
        }
        self
    }

    /// Apply command line / environment overrides
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Generate example configuration content
    pub fn example_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}
