use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
const ERROR_BODY_MAX_CHARS: usize = 800;

#[async_trait]
/// Trait contract for `CommentPoster` behavior.
pub trait CommentPoster: Send + Sync {
    async fn create_comment(&self, org: &str, repo: &str, number: u64, body: &str) -> Result<()>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubCommentCreateResponse {
    pub id: u64,
    pub html_url: Option<String>,
}

#[derive(Clone)]
/// GitHub REST client that posts one issue or PR comment per call.
pub struct GithubApiClient {
    http: reqwest::Client,
    api_base: String,
}

impl GithubApiClient {
    pub fn new(api_base: String, token: String, request_timeout_ms: u64) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("pony-plugin"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            reqwest::header::HeaderValue::from_static("2022-11-28"),
        );
        let bearer = reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .context("invalid github authorization header")?;
        headers.insert(reqwest::header::AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(request_timeout_ms.max(1)))
            .build()
            .context("failed to create github api client")?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Post `body` as a new comment on `org/repo#issue_number`. Failures are not retried.
    pub async fn create_issue_comment(
        &self,
        org: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<GithubCommentCreateResponse> {
        let url = format!(
            "{}/repos/{org}/{repo}/issues/{issue_number}/comments",
            self.api_base
        );
        let response = self
            .http
            .post(&url)
            .json(&json!({ "body": body }))
            .send()
            .await
            .with_context(|| {
                format!("github comment request to {org}/{repo}#{issue_number} failed")
            })?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let detail = detail.chars().take(ERROR_BODY_MAX_CHARS).collect::<String>();
            bail!(
                "github comment on {org}/{repo}#{issue_number} failed with status {}: {detail}",
                status.as_u16()
            );
        }
        response
            .json::<GithubCommentCreateResponse>()
            .await
            .context("failed to decode github comment response")
    }
}

#[async_trait]
impl CommentPoster for GithubApiClient {
    async fn create_comment(&self, org: &str, repo: &str, number: u64, body: &str) -> Result<()> {
        let created = self.create_issue_comment(org, repo, number, body).await?;
        tracing::debug!(
            comment_id = created.id,
            html_url = created.html_url.as_deref().unwrap_or_default(),
            "created github comment"
        );
        Ok(())
    }
}
