#[cfg(test)]
#[path = "github_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::GithubStats;
use crate::domain::models::ProfileSource;

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Public GitHub REST API, `GET /users/{user}`.
pub struct GithubApi {
    base_url: String,
    client: reqwest::Client,
}

impl GithubApi {
    pub fn new(base_url: &str) -> Result<GithubApi> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        return Ok(GithubApi {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        });
    }
}

#[async_trait]
impl ProfileSource for GithubApi {
    async fn fetch_stats(&self, user: &str) -> Result<GithubStats> {
        if user.is_empty() {
            bail!("GitHub user is not configured");
        }

        let url = format!("{}/users/{user}", self.base_url);
        let res = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = res.status().as_u16();
        if status >= 400 {
            tracing::error!(status, user, "GitHub profile request failed");
            bail!("GitHub responded with status {status}");
        }

        let stats = res.json::<GithubStats>().await?;
        tracing::debug!(?stats, user, "GitHub profile loaded");

        return Ok(stats);
    }
}
