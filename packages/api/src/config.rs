//! # Backend configuration: `config.toml`
//!
//! Tells the client where the account API lives.
//!
//! ```toml
//! base_url = "http://localhost:3002"
//! request_timeout_secs = 30   # 0 disables the timeout
//! ```
//!
//! ## Resolution
//!
//! | Target | Order |
//! |--------|-------|
//! | Native | `ACCOUNT_API_URL` (a `.env` file is honoured), then `<config_dir>/account-portal/config.toml`, then defaults |
//! | WASM | `ACCOUNT_API_URL` at compile time, then defaults |
//!
//! Every field has a serde default, so a missing or partial file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use crate::error::ApiError;

/// Environment variable overriding [`ApiConfig::base_url`].
pub const BASE_URL_ENV: &str = "ACCOUNT_API_URL";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the account API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds. 0 disables it. Native only.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3002".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn filename() -> &'static str {
        "config.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Full URL for an endpoint path such as `/user/details`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Platform location of the config file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("account-portal").join(Self::filename()))
    }

    /// Read a config file. A missing file is `Ok(None)`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &Path) -> Result<Option<Self>, ApiError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Some(Self::from_toml(&contents)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve the configuration for this process. Problems with the config
    /// file are logged and fall back to defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let mut config = match Self::config_path() {
            Some(path) => match Self::from_file(&path) {
                Ok(found) => found.unwrap_or_default(),
                Err(e) => {
                    tracing::warn!("ignoring {}: {e}", path.display());
                    Self::default()
                }
            },
            None => Self::default(),
        };

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }
        config
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        match option_env!("ACCOUNT_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ApiConfig::from_toml("").unwrap(), ApiConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ApiConfig::from_toml(r#"base_url = "https://accounts.example.com""#).unwrap();
        assert_eq!(config.base_url, "https://accounts.example.com");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ApiConfig::new("http://10.0.0.5:3002").with_timeout(0);
        let parsed = ApiConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(
            ApiConfig::new("http://localhost:3002/").endpoint("/user/details"),
            "http://localhost:3002/user/details"
        );
        assert_eq!(
            ApiConfig::default().endpoint("/user/logout"),
            "http://localhost:3002/user/logout"
        );
    }

    #[test]
    fn test_from_file() {
        let dir = std::env::temp_dir().join(format!("account_portal_cfg_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("absent.toml");
        assert_eq!(ApiConfig::from_file(&missing).unwrap(), None);

        let good = dir.join("good.toml");
        std::fs::write(&good, "request_timeout_secs = 5\n").unwrap();
        let config = ApiConfig::from_file(&good).unwrap().unwrap();
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.base_url, "http://localhost:3002");

        let bad = dir.join("bad.toml");
        std::fs::write(&bad, "request_timeout_secs = \"soon\"\n").unwrap();
        assert!(matches!(ApiConfig::from_file(&bad), Err(ApiError::Config(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
