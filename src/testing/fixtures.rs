//! Recorded organization payloads.

use serde::Deserialize;
use serde_json::Value;

use super::mock::MockTransport;
use crate::client::GithubOrgClient;
use crate::error::Error;
use crate::nested::access_nested_map;

const GOOGLE_FIXTURE: &str = include_str!("google.json");

/// Organization payload, repository listing and the names the client is
/// expected to derive from them.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgFixture {
    /// Body of `GET /orgs/{org}`
    pub org_payload: Value,
    /// Body of `GET {repos_url}`
    pub repos_payload: Value,
    /// All repository names, in payload order
    pub expected_repos: Vec<String>,
    /// Names of repositories licensed `apache-2.0`
    pub apache2_repos: Vec<String>,
}

impl OrgFixture {
    /// Organization login named by the payload.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingKey` if the payload has no string `login`.
    pub fn login(&self) -> Result<&str, Error> {
        as_str(access_nested_map(&self.org_payload, &["login"])?, "login")
    }

    /// Repository listing URL named by the payload.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingKey` if the payload has no string `repos_url`.
    pub fn repos_url(&self) -> Result<&str, Error> {
        as_str(access_nested_map(&self.org_payload, &["repos_url"])?, "repos_url")
    }

    /// A transport serving the org and repos endpoints of this fixture.
    ///
    /// Every other URL answers 404.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingKey` if the org payload lacks `login` or `repos_url`.
    pub fn mock_transport(&self) -> Result<MockTransport, Error> {
        Ok(MockTransport::new()
            .with_json(
                &GithubOrgClient::default_org_url(self.login()?),
                self.org_payload.clone(),
            )
            .with_json(self.repos_url()?, self.repos_payload.clone()))
    }
}

fn as_str<'a>(value: &'a Value, key: &str) -> Result<&'a str, Error> {
    value.as_str().ok_or_else(|| Error::MissingKey {
        key: key.to_string(),
    })
}

/// Fixture for the `google` organization.
///
/// # Errors
///
/// Returns a serialization error if the embedded fixture is malformed.
pub fn github_org_fixture() -> Result<OrgFixture, Error> {
    serde_json::from_str(GOOGLE_FIXTURE).map_err(Error::from)
}
