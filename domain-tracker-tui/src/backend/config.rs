//! Application configuration
//!
//! Read from `<config_dir>/domain-tracker/config.toml`. Every field has a
//! default, so a missing file or a partial file is fine.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use domain_tracker_core::ApiConfig;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// Directory name under the platform config and data dirs.
const APP_DIR: &str = "domain-tracker";
const CONFIG_FILE: &str = "config.toml";

/// Overrides `api_base_url`.
pub const ENV_API_URL: &str = "DOMAIN_TRACKER_API_URL";
/// Overrides `log_level`.
pub const ENV_LOG: &str = "DOMAIN_TRACKER_LOG";

/// Platform config directory for this app.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Platform data directory for this app (session file, logs).
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend base URL, without `/api`.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Retries for GET/PUT/DELETE.
    pub max_retries: u32,
    /// Default `EnvFilter` directive; `RUST_LOG` still wins.
    pub log_level: String,
    pub log_dir: PathBuf,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api = ApiConfig::default();
        Self {
            api_base_url: api.base_url,
            request_timeout_secs: api.request_timeout_secs,
            max_retries: api.max_retries,
            log_level: "info".to_string(),
            log_dir: data_dir().join("logs"),
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// Load the config file and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&config_dir().join(CONFIG_FILE))?;
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `DOMAIN_TRACKER_*` overrides. Blank values are ignored.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        let non_blank = |key| var(key).filter(|v: &String| !v.trim().is_empty());
        if let Some(url) = non_blank(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(level) = non_blank(ENV_LOG) {
            self.log_level = level;
        }
    }

    /// Settings for the backend client.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base_url.clone(),
            request_timeout_secs: self.request_timeout_secs,
            max_retries: self.max_retries,
            ..ApiConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.ends_with("domain-tracker/logs"));
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = AppConfig::parse(
            r#"
            api_base_url = "https://domains.example.com"
            max_retries = 0
            theme = "light"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://domains.example.com");
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(AppConfig::parse("max_retries = \"many\"").is_err());
    }

    #[test]
    fn env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_API_URL, "http://10.0.0.5:5000"),
            (ENV_LOG, "domain_tracker_api=debug"),
        ]
        .into();
        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| (*v).to_string()));
        assert_eq!(config.api_base_url, "http://10.0.0.5:5000");
        assert_eq!(config.log_level, "domain_tracker_api=debug");
    }

    #[test]
    fn blank_env_override_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|_| Some("  ".to_string()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "request_timeout_secs = 5\nlog_dir = \"/tmp/dt-logs\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/dt-logs"));

        let api = config.api_config();
        assert_eq!(api.request_timeout_secs, 5);
        assert_eq!(api.connect_timeout_secs, ApiConfig::default().connect_timeout_secs);
    }
}
