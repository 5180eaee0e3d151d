//! `ghorg` demo: list an organization's public repositories, then exercise
//! the numeric and async helpers.
//!
//! Configuration comes from the environment (and `.env`):
//! `GITHUB_ORG` (default `google`), `GITHUB_LICENSE` (optional filter), plus
//! the transport variables read by [`Config::from_env`].

use std::env;

use futures::StreamExt;
use ghorg::{async_generator, sum_mixed_list, Config, Error, GitHubError, GithubOrgClient, Number};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ghorg=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let org = env::var("GITHUB_ORG").unwrap_or_else(|_| "google".to_string());
    let license = env::var("GITHUB_LICENSE").ok();

    info!(org = %org, api_url = %config.api_url, "Listing public repositories");

    let client = GithubOrgClient::from_config(&org, &config)?;
    match client.public_repos(license.as_deref()).await {
        Ok(repos) => {
            println!("{} public repositories in {org}:", repos.len());
            for name in repos {
                println!("  {name}");
            }
        }
        Err(Error::GitHub(GitHubError::NotFound { .. })) => {
            println!("Organization '{org}' not found");
        }
        Err(e) => return Err(e.into()),
    }

    let sample = [Number::from(1), Number::from(2), Number::from(3.5)];
    let rendered: Vec<String> = sample.iter().map(ToString::to_string).collect();
    println!("\nsum_mixed_list([{}]) = {}", rendered.join(", "), sum_mixed_list(&sample));

    println!("\nRandom values (one per second):");
    let mut values = Box::pin(async_generator());
    while let Some(value) = values.next().await {
        println!("  {value:.4}");
    }

    Ok(())
}
