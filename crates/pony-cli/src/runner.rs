use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use pony_github::comment_event::CommentEvent;
use pony_plugin::{
    pony_plugin_help, service_origin, CommentPoster, GithubApiClient, HeadRequestSizePolicy,
    PonyApiImageSource, PonyCommandHandler,
};
use tracing::info;

use crate::cli_args::Cli;

/// Prints replies instead of posting them.
pub struct StdoutCommentPoster;

#[async_trait]
impl CommentPoster for StdoutCommentPoster {
    async fn create_comment(&self, org: &str, repo: &str, number: u64, body: &str) -> Result<()> {
        println!("--- reply for {org}/{repo}#{number} ---\n{body}");
        Ok(())
    }
}

fn build_comment_poster(cli: &Cli) -> Result<Arc<dyn CommentPoster>> {
    if cli.dry_run {
        return Ok(Arc::new(StdoutCommentPoster));
    }
    let token = cli
        .github_token
        .as_deref()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| anyhow!("--github-token (or GITHUB_TOKEN) is required unless --dry-run"))?;
    let client = GithubApiClient::new(
        cli.github_api_base.clone(),
        token.to_string(),
        cli.request_timeout_ms,
    )?;
    Ok(Arc::new(client))
}

/// Load the configured event and run it through the pony handler once.
pub async fn run_cli(cli: Cli) -> Result<()> {
    if cli.print_help {
        let rendered = serde_json::to_string_pretty(&pony_plugin_help())
            .context("failed to render plugin help")?;
        println!("{rendered}");
        return Ok(());
    }

    let event_file = cli
        .event_file
        .as_ref()
        .ok_or_else(|| anyhow!("--event-file is required"))?;
    let raw = tokio::fs::read_to_string(event_file)
        .await
        .with_context(|| format!("failed to read {}", event_file.display()))?;
    let event = CommentEvent::from_webhook_payload(&raw)
        .with_context(|| format!("failed to parse {}", event_file.display()))?;

    let poster = build_comment_poster(&cli)?;
    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(cli.request_timeout_ms))
        .build()
        .context("failed to create pony api client")?;
    let size_policy = Arc::new(HeadRequestSizePolicy::new(
        http.clone(),
        cli.max_image_bytes,
    ));
    let source = Arc::new(PonyApiImageSource::new(
        http,
        cli.pony_api_url.clone(),
        size_policy,
    ));
    let handler = PonyCommandHandler::new(source, poster)
        .with_service_label(service_origin(&cli.pony_api_url));

    match handler.handle(&event).await {
        Ok(Some(report)) => {
            info!(
                event_key = %event.event_key(),
                invocations = report.invocations,
                images_posted = report.images_posted,
                "pony event handled"
            );
            Ok(())
        }
        Ok(None) => {
            info!(event_key = %event.event_key(), "no pony requested");
            Ok(())
        }
        Err(error) => Err(error)
            .with_context(|| format!("pony plugin failed for {}", event.event_key())),
    }
}
