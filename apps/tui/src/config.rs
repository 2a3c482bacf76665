use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::api::worldbank::DEFAULT_BASE_URL;
use crate::series::DEFAULT_WINDOW;

pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:5001/predict";
pub const DEFAULT_LLM_URL: &str = "http://127.0.0.1:5000/ask";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a whole number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
}

/// Endpoints and tuning knobs, read from `.env` and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub worldbank_base_url: String,
    pub predict_url: String,
    pub llm_url: String,
    pub http_timeout: Duration,
    /// Most recent points kept per chart; `0` keeps all.
    pub chart_window: usize,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            worldbank_base_url: DEFAULT_BASE_URL.to_string(),
            predict_url: DEFAULT_PREDICT_URL.to_string(),
            llm_url: DEFAULT_LLM_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            chart_window: DEFAULT_WINDOW,
            log_dir: PathBuf::from("./logs"),
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and builds the config from the process
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let text = |name: &str, fallback: String| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
        };

        let timeout_secs = parse_number(&lookup, "HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Zero {
                name: "HTTP_TIMEOUT_SECS",
            });
        }
        let chart_window = parse_number(&lookup, "CHART_WINDOW", defaults.chart_window)?;

        Ok(Self {
            worldbank_base_url: text("WORLDBANK_BASE_URL", defaults.worldbank_base_url),
            predict_url: text("PREDICT_URL", defaults.predict_url),
            llm_url: text("LLM_URL", defaults.llm_url),
            http_timeout: Duration::from_secs(timeout_secs),
            chart_window,
            log_dir: lookup("ECON_DASH_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map_or(defaults.log_dir, PathBuf::from),
        })
    }

    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.http_timeout)
            .user_agent(concat!("econ-dash/", env!("CARGO_PKG_VERSION")))
            .build()
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    fallback: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        _ => Ok(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[
            ("WORLDBANK_BASE_URL", "http://localhost:8080"),
            ("LLM_URL", " http://llm.local/ask "),
            ("HTTP_TIMEOUT_SECS", "5"),
            ("CHART_WINDOW", "0"),
            ("ECON_DASH_LOG_DIR", "/tmp/econ"),
        ])
        .unwrap();

        assert_eq!(config.worldbank_base_url, "http://localhost:8080");
        assert_eq!(config.llm_url, "http://llm.local/ask");
        assert_eq!(config.predict_url, DEFAULT_PREDICT_URL);
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.chart_window, 0);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/econ"));
    }

    #[test]
    fn blank_values_fall_back() {
        let config = config_from(&[("PREDICT_URL", "  "), ("CHART_WINDOW", "")]).unwrap();
        assert_eq!(config.predict_url, DEFAULT_PREDICT_URL);
        assert_eq!(config.chart_window, DEFAULT_WINDOW);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        assert!(matches!(
            config_from(&[("CHART_WINDOW", "ten")]),
            Err(ConfigError::InvalidNumber { name: "CHART_WINDOW", .. })
        ));
        assert!(matches!(
            config_from(&[("HTTP_TIMEOUT_SECS", "0")]),
            Err(ConfigError::Zero { .. })
        ));
    }
}
