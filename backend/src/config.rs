//! Startup configuration for the survey host.
//!
//! Values come from the process environment, after `.env` has been loaded by
//! `main`. Every key is optional:
//!
//! | key | default |
//! |---|---|
//! | `SURVEY_HOST` | `127.0.0.1` |
//! | `SURVEY_PORT` | `8080` |
//! | `SURVEY_GENERATOR_URL` | `http://127.0.0.1:8000` |
//! | `SURVEY_API_TOKEN` | unset |
//! | `SURVEY_OPEN_BROWSER` | `true` |

use common::generation::GENERATE_ENDPOINT;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_GENERATOR_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("SURVEY_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("SURVEY_GENERATOR_URL must be an http(s) URL, got {0:?}")]
    InvalidGeneratorUrl(String),
    #[error("{key} must be a boolean, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the generation service, without a trailing slash.
    pub generator_url: String,
    /// Bearer token sent to the generation service when set.
    pub api_token: Option<String>,
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match get("SURVEY_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let generator_url = get("SURVEY_GENERATOR_URL")
            .unwrap_or_else(|| DEFAULT_GENERATOR_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !(generator_url.starts_with("http://") || generator_url.starts_with("https://")) {
            return Err(ConfigError::InvalidGeneratorUrl(generator_url));
        }

        let open_browser = match get("SURVEY_OPEN_BROWSER") {
            Some(raw) => parse_flag("SURVEY_OPEN_BROWSER", raw)?,
            None => true,
        };

        Ok(Self {
            host: get("SURVEY_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            generator_url,
            api_token: get("SURVEY_API_TOKEN"),
            open_browser,
        })
    }

    /// Address the browser is pointed at.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Full URL of the upstream generation endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}{}", self.generator_url, GENERATE_ENDPOINT)
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        assert_eq!(
            config(&[]).unwrap(),
            Config {
                host: "127.0.0.1".to_string(),
                port: 8080,
                generator_url: "http://127.0.0.1:8000".to_string(),
                api_token: None,
                open_browser: true,
            }
        );
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("SURVEY_HOST", "0.0.0.0"),
            ("SURVEY_PORT", "9090"),
            ("SURVEY_GENERATOR_URL", "https://surveys.internal/"),
            ("SURVEY_API_TOKEN", "secret"),
            ("SURVEY_OPEN_BROWSER", "no"),
        ])
        .unwrap();

        assert_eq!(config.url(), "http://0.0.0.0:9090");
        assert_eq!(
            config.generate_url(),
            "https://surveys.internal/api/surveys/generate"
        );
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert!(!config.open_browser);
    }

    #[test]
    fn blank_values_use_defaults() {
        let config = config(&[("SURVEY_API_TOKEN", "  "), ("SURVEY_PORT", "")]).unwrap();
        assert_eq!(config.api_token, None);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config(&[("SURVEY_PORT", "eighty")]),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );
        assert_eq!(
            config(&[("SURVEY_GENERATOR_URL", "surveys.internal")]),
            Err(ConfigError::InvalidGeneratorUrl("surveys.internal".to_string()))
        );
        assert!(matches!(
            config(&[("SURVEY_OPEN_BROWSER", "maybe")]),
            Err(ConfigError::InvalidFlag { key: "SURVEY_OPEN_BROWSER", .. })
        ));
    }
}
