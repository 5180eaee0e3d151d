//! `ghorg`: a GitHub organization client, plus small async and numeric helpers.
//!
//! # Quick Start
//!
//! ```rust
//! use ghorg::{sum_mixed_list, Number};
//!
//! let total = sum_mixed_list(&[Number::from(1), Number::from(2), Number::from(3.5)]);
//! assert_eq!(total, 6.5);
//! ```
//!
//! Listing repositories against canned responses:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use ghorg::testing::github_org_fixture;
//! use ghorg::GithubOrgClient;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ghorg::Error> {
//! let fixture = github_org_fixture()?;
//! let client = GithubOrgClient::new("google", Arc::new(fixture.mock_transport()?));
//!
//! let apache = client.public_repos(Some("apache-2.0")).await?;
//! assert_eq!(apache, fixture.apache2_repos);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod nested;
pub mod numeric;
pub mod testing;
pub mod transport;
pub mod types;

// Re-exports
pub use client::{GithubOrgClient, ORG_URL};
pub use config::{Config, ConfigError};
pub use error::{Error, GitHubError};
pub use generator::{
    async_comprehension, async_generator, delayed_random, measure_runtime, GeneratorConfig,
};
pub use nested::access_nested_map;
pub use numeric::{sum_list, sum_mixed_list, Number};
pub use transport::{get_json, HttpTransport, RetryConfig, Transport};
pub use types::{JsonResponse, License, Repository};
