//! Testing utilities.
//!
//! Provides a canned-response transport and recorded payloads for testing
//! code that uses [`GithubOrgClient`](crate::GithubOrgClient).

mod fixtures;
mod mock;

pub use fixtures::{github_org_fixture, OrgFixture};
pub use mock::{MockCall, MockTransport};
