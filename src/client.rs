//! GitHub organization client.
//!
//! Reads an organization's metadata and lists its public repositories,
//! optionally filtered by license.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::config::{Config, DEFAULT_API_URL};
use crate::error::Error;
use crate::nested::access_nested_map;
use crate::transport::{get_json, HttpTransport, Transport};
use crate::types::Repository;

/// Organization metadata URL template.
pub const ORG_URL: &str = "https://api.github.com/orgs/{org}";

/// Client for a single GitHub organization.
///
/// The organization metadata and the repository listing are each fetched at
/// most once per client and cached afterwards.
///
/// # Example
///
/// ```rust,ignore
/// use ghorg::{Config, GithubOrgClient};
///
/// let client = GithubOrgClient::from_config("google", &Config::from_env()?)?;
/// let apache = client.public_repos(Some("apache-2.0")).await?;
/// ```
pub struct GithubOrgClient {
    org_name: String,
    api_url: String,
    transport: Arc<dyn Transport>,
    org: OnceCell<Value>,
    repos: OnceCell<Vec<Repository>>,
}

impl GithubOrgClient {
    /// Create a client for `org_name` using `transport` for all requests.
    pub fn new(org_name: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            org_name: org_name.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            transport,
            org: OnceCell::new(),
            repos: OnceCell::new(),
        }
    }

    /// Create a client backed by an [`HttpTransport`] built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn from_config(org_name: &str, config: &Config) -> Result<Self, Error> {
        let transport = HttpTransport::new(config, None)?;
        Ok(Self::new(org_name, Arc::new(transport)).with_api_url(&config.api_url))
    }

    /// Use a different API base URL for the organization request.
    #[must_use]
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    /// Organization metadata URL on the public API.
    #[must_use]
    pub fn default_org_url(org_name: &str) -> String {
        ORG_URL.replace("{org}", org_name)
    }

    /// Get the organization name.
    #[must_use]
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// Organization metadata URL for this client.
    #[must_use]
    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.api_url, self.org_name)
    }

    /// Organization metadata, fetched on first access.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; a failed fetch is not cached.
    pub async fn org(&self) -> Result<&Value, Error> {
        self.org
            .get_or_try_init(|| async {
                let url = self.org_url();
                debug!(org = %self.org_name, url = %url, "Fetching organization");
                get_json(self.transport.as_ref(), &url).await
            })
            .await
    }

    /// The `repos_url` field of the organization metadata.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingKey` if the metadata has no string `repos_url`.
    pub async fn public_repos_url(&self) -> Result<String, Error> {
        let org = self.org().await?;
        access_nested_map(org, &["repos_url"])?
            .as_str()
            .map(String::from)
            .ok_or_else(|| Error::MissingKey {
                key: "repos_url".to_string(),
            })
    }

    /// Repository listing, fetched on first access.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, or a serialization error if the listing is
    /// not an array of repositories.
    pub async fn repos_payload(&self) -> Result<&[Repository], Error> {
        let repos = self
            .repos
            .get_or_try_init(|| async {
                let url = self.public_repos_url().await?;
                debug!(org = %self.org_name, url = %url, "Fetching repositories");
                let payload = get_json(self.transport.as_ref(), &url).await?;
                serde_json::from_value::<Vec<Repository>>(payload).map_err(Error::from)
            })
            .await?;
        Ok(repos.as_slice())
    }

    /// Names of the organization's public repositories, in listing order.
    ///
    /// With `license`, only repositories whose license key equals it exactly
    /// are returned.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the metadata or the listing.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>, Error> {
        let repos = self.repos_payload().await?;
        Ok(repos
            .iter()
            .filter(|repo| license.map_or(true, |key| Self::has_license(repo, key)))
            .map(|repo| repo.name.clone())
            .collect())
    }

    /// Whether `repo` carries a license whose key equals `license_key`.
    ///
    /// Comparison is exact and case-sensitive.
    #[must_use]
    pub fn has_license(repo: &Repository, license_key: &str) -> bool {
        repo.license_key() == Some(license_key)
    }

    /// [`has_license`](Self::has_license) over an untyped repository record.
    #[must_use]
    pub fn has_license_value(repo: &Value, license_key: &str) -> bool {
        access_nested_map(repo, &["license", "key"])
            .map_or(false, |key| {
                key.as_str().filter(|k| !k.is_empty()) == Some(license_key)
            })
    }
}
