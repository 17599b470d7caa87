#![allow(missing_docs)]
//! Plugin configuration.
//!
//! The host hands the plugin a JSON object; `kalshi` being present is what
//! enables it. [`PluginConfig::from_env`] builds the same shape from
//! `KALSHI_*` environment variables (and a `.env` file, if one exists).

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_KALSHI_API_URL, KALSHI_BASE_URL_ENV, KALSHI_ENABLED_ENV};
use crate::error::{KalshiError, Result};

/// Settings for the Kalshi API client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KalshiConfig {
    #[serde(rename = "baseUrl", alias = "base_url", default)]
    pub base_url: Option<String>,
}

impl KalshiConfig {
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    /// Configured base URL, falling back to the production endpoint.
    #[must_use]
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_KALSHI_API_URL)
    }
}

/// Top-level configuration section owned by this plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub kalshi: Option<KalshiConfig>,
}

impl PluginConfig {
    /// Parse the host-supplied JSON config.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
            .map_err(|e| KalshiError::config_error(format!("Invalid plugin config: {e}")))
    }

    /// Build the config from the environment.
    ///
    /// Kalshi is enabled when `KALSHI_ENABLED` is truthy or `KALSHI_BASE_URL`
    /// is set.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var(KALSHI_BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        let enabled = std::env::var(KALSHI_ENABLED_ENV)
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        if !enabled && base_url.is_none() {
            tracing::debug!("Kalshi plugin disabled: no {KALSHI_ENABLED_ENV} or {KALSHI_BASE_URL_ENV}");
            return Self::default();
        }

        Self {
            kalshi: Some(KalshiConfig { base_url }),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.kalshi.is_some()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(KALSHI_ENABLED_ENV);
        std::env::remove_var(KALSHI_BASE_URL_ENV);
    }

    #[test]
    fn test_resolved_base_url_defaults() {
        assert_eq!(KalshiConfig::default().resolved_base_url(), DEFAULT_KALSHI_API_URL);
        assert_eq!(
            KalshiConfig::with_base_url("  ").resolved_base_url(),
            DEFAULT_KALSHI_API_URL
        );
        assert_eq!(
            KalshiConfig::with_base_url("https://example.test").resolved_base_url(),
            "https://example.test"
        );
    }

    #[test]
    fn test_from_json_accepts_camel_case() {
        let config = PluginConfig::from_json(json!({
            "kalshi": { "baseUrl": "https://example.test" }
        }))
        .unwrap();
        assert_eq!(
            config.kalshi,
            Some(KalshiConfig::with_base_url("https://example.test"))
        );

        let config = PluginConfig::from_json(json!({ "kalshi": {} })).unwrap();
        assert!(config.is_enabled());
        assert_eq!(config.kalshi.unwrap().base_url, None);
    }

    #[test]
    fn test_from_json_without_section_is_disabled() {
        assert!(!PluginConfig::from_json(json!({})).unwrap().is_enabled());
        assert!(!PluginConfig::from_json(serde_json::Value::Null)
            .unwrap()
            .is_enabled());
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        let err = PluginConfig::from_json(json!({ "kalshi": { "baseUrl": 5 } })).unwrap_err();
        assert_eq!(err.code, crate::error::KalshiErrorCode::ConfigError);
    }

    #[test]
    #[serial]
    fn test_from_env_disabled_by_default() {
        clear_env();
        assert!(!PluginConfig::from_env().is_enabled());
    }

    #[test]
    #[serial]
    fn test_from_env_enabled_flag() {
        clear_env();
        std::env::set_var(KALSHI_ENABLED_ENV, "true");
        let config = PluginConfig::from_env();
        clear_env();

        assert_eq!(config.kalshi, Some(KalshiConfig::default()));
    }

    #[test]
    #[serial]
    fn test_from_env_base_url_enables() {
        clear_env();
        std::env::set_var(KALSHI_BASE_URL_ENV, "https://example.test");
        let config = PluginConfig::from_env();
        clear_env();

        assert_eq!(
            config.kalshi,
            Some(KalshiConfig::with_base_url("https://example.test"))
        );
    }
}
