//! Repository-related data models.

use serde::{Deserialize, Serialize};

/// Repository record as returned by `GET /orgs/{org}/repos`.
///
/// Only the fields the client reads are typed; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    #[serde(default)]
    pub name: String,
    /// "owner/name"
    #[serde(default)]
    pub full_name: Option<String>,
    /// Web URL for the repository
    #[serde(default)]
    pub html_url: Option<String>,
    /// Repository description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the repository is a fork
    #[serde(default)]
    pub fork: bool,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
    /// Attached license, `None` when absent or `null`
    #[serde(default)]
    pub license: Option<License>,
}

impl Repository {
    /// License key of this repository, if it has a non-empty one.
    #[must_use]
    pub fn license_key(&self) -> Option<&str> {
        self.license
            .as_ref()
            .and_then(|l| l.key.as_deref())
            .filter(|key| !key.is_empty())
    }
}

/// License attached to a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// Short identifier, e.g. "apache-2.0"; absent on some records
    #[serde(default)]
    pub key: Option<String>,
    /// Human readable name
    #[serde(default)]
    pub name: Option<String>,
    /// SPDX identifier, e.g. "Apache-2.0"
    #[serde(default)]
    pub spdx_id: Option<String>,
    /// API URL of the license
    #[serde(default)]
    pub url: Option<String>,
}
