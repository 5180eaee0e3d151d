//! Client configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Default base URL for the GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum retry attempts.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API base URL (`GITHUB_API_URL`)
    pub api_url: String,
    /// Optional bearer token (`GITHUB_TOKEN`)
    pub token: Option<String>,
    /// Request timeout (`GITHUB_TIMEOUT_SECS`)
    pub timeout: Duration,
    /// Maximum retry attempts (`GITHUB_MAX_RETRIES`)
    pub max_retries: u32,
    /// User-Agent header value (`GITHUB_USER_AGENT`)
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first variable that
    /// does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("GITHUB_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let token = lookup("GITHUB_TOKEN").filter(|t| !t.is_empty());

        let timeout_secs: u64 = lookup("GITHUB_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("GITHUB_TIMEOUT_SECS"))?;

        let max_retries = lookup("GITHUB_MAX_RETRIES")
            .unwrap_or_else(|| DEFAULT_MAX_RETRIES.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("GITHUB_MAX_RETRIES"))?;

        let user_agent = lookup("GITHUB_USER_AGENT").unwrap_or_else(default_user_agent);

        Ok(Self {
            api_url,
            token,
            timeout: Duration::from_secs(timeout_secs),
            max_retries,
            user_agent,
        })
    }
}

fn default_user_agent() -> String {
    format!("ghorg/{}", env!("CARGO_PKG_VERSION"))
}

/// Error loading [`Config`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The named variable is set but does not parse
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).expect("defaults should parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "https://api.github.com");
        assert!(config.user_agent.starts_with("ghorg/"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GITHUB_API_URL", "http://localhost:9000/"),
            ("GITHUB_TOKEN", "secret"),
            ("GITHUB_TIMEOUT_SECS", "5"),
            ("GITHUB_MAX_RETRIES", "0"),
        ]))
        .expect("overrides should parse");

        assert_eq!(config.api_url, "http://localhost:9000");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_empty_token_is_none() {
        let config =
            Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "")])).expect("should parse");
        assert!(config.token.is_none());
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Config::from_lookup(lookup_from(&[("GITHUB_TIMEOUT_SECS", "soon")]))
            .expect_err("should reject");
        assert!(matches!(err, ConfigError::InvalidValue("GITHUB_TIMEOUT_SECS")));
    }
}
