//! Connection settings for the ThinkPrompt API.
//!
//! Read from the environment (or the matching command-line flags):
//! - `THINKPROMPT_API_URL` - Base URL (default: `http://localhost:3000/api/v1`)
//! - `THINKPROMPT_API_KEY` - API key sent as `X-API-Key` (required)

use thiserror::Error;

pub const API_URL_ENV: &str = "THINKPROMPT_API_URL";
pub const API_KEY_ENV: &str = "THINKPROMPT_API_KEY";

/// Default URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("THINKPROMPT_API_KEY environment variable is required")]
    MissingApiKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
}

impl Config {
    /// Build settings from already-read values. Empty strings count as unset.
    pub fn resolve(api_url: Option<String>, api_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let api_url = api_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self { api_url, api_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_an_error() {
        assert_eq!(
            Config::resolve(Some("http://x".into()), None),
            Err(ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn empty_key_is_an_error() {
        assert_eq!(
            Config::resolve(None, Some(String::new())),
            Err(ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn url_defaults_to_local_api() {
        let config = Config::resolve(None, Some("k".into())).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_key, "k");
    }

    #[test]
    fn explicit_url_is_kept() {
        let config =
            Config::resolve(Some("https://api.example.com/v1".into()), Some("k".into())).unwrap();
        assert_eq!(config.api_url, "https://api.example.com/v1");
    }

    #[test]
    fn missing_key_message_names_the_variable() {
        assert_eq!(
            ConfigError::MissingApiKey.to_string(),
            "THINKPROMPT_API_KEY environment variable is required"
        );
    }
}
