//! `/pony` comment handling: parse, fetch with retry, and reply.

use std::sync::Arc;

use pony_github::comment_event::CommentEvent;
use pony_github::issue_comment::{render_issue_response_raw, ABOUT_THIS_BOT};
use pony_github::pony_command_parser::{
    any_invocation_tagged, parse_pony_invocations, PonyInvocation, PONY_COMMAND_MAX_INVOCATIONS,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

mod github_api_client;
mod image_source;
mod plugin_help;
mod response_format;
mod size_policy;

pub use github_api_client::{
    CommentPoster, GithubApiClient, GithubCommentCreateResponse, DEFAULT_GITHUB_API_BASE,
};
pub use image_source::{
    service_origin, FetchError, ImageCandidate, ImageSource, PonyApiImageSource,
    DEFAULT_PONY_API_URL,
};
pub use plugin_help::{pony_plugin_help, PluginCommandHelp, PluginHelp, PONY_PLUGIN_NAME};
pub use response_format::{
    format_fallback_message, format_image_markdown, NO_MATCHING_PONY_MESSAGE,
};
pub use size_policy::{
    content_length_exceeds, HeadRequestSizePolicy, SizeCheckError, SizePolicy,
    DEFAULT_MAX_IMAGE_BYTES,
};

/// Fetch attempts per invocation before it is dropped.
pub const PONY_FETCH_MAX_ATTEMPTS: usize = 5;

#[derive(Debug, Error)]
pub enum PonyHandlerError {
    #[error("could not find a valid pony image")]
    NoImageFound,
    #[error("failed to post pony reply: {0:#}")]
    PostReply(anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of a handled event that produced at least one image.
pub struct PonyHandlerReport {
    pub invocations: usize,
    pub images_posted: usize,
}

#[derive(Clone)]
/// Handles `/pony` comment events against injected collaborators.
pub struct PonyCommandHandler {
    source: Arc<dyn ImageSource>,
    poster: Arc<dyn CommentPoster>,
    service_label: String,
}

impl PonyCommandHandler {
    pub fn new(source: Arc<dyn ImageSource>, poster: Arc<dyn CommentPoster>) -> Self {
        Self {
            source,
            poster,
            service_label: service_origin(DEFAULT_PONY_API_URL),
        }
    }

    /// Name the lookup service in the service-down fallback message.
    pub fn with_service_label(mut self, service_label: impl Into<String>) -> Self {
        self.service_label = service_label.into();
        self
    }

    /// Handle one comment event.
    ///
    /// Returns `Ok(None)` when the event is ignored: it was not newly created
    /// or it holds no `/pony` line. When no invocation yields an image, a
    /// fallback reply is posted and `PonyHandlerError::NoImageFound` is returned.
    #[tracing::instrument(
        level = "debug",
        skip(self, event),
        fields(org = %event.org, repo = %event.repo, number = event.number)
    )]
    pub async fn handle(
        &self,
        event: &CommentEvent,
    ) -> Result<Option<PonyHandlerReport>, PonyHandlerError> {
        if !event.is_created() {
            debug!(action = event.action.as_str(), "ignoring comment action");
            return Ok(None);
        }
        let invocations = parse_pony_invocations(&event.body, PONY_COMMAND_MAX_INVOCATIONS);
        if invocations.is_empty() {
            return Ok(None);
        }
        debug!(invocations = invocations.len(), "handling pony request");

        let mut reply = String::new();
        let mut images_posted = 0_usize;
        for invocation in &invocations {
            if let Some(candidate) = self.fetch_with_retry(invocation).await {
                reply.push_str(&format_image_markdown(
                    &candidate.thumbnail_url,
                    &candidate.full_url,
                ));
                reply.push('\n');
                images_posted = images_posted.saturating_add(1);
            }
        }

        if images_posted > 0 {
            self.post_reply(event, &reply)
                .await
                .map_err(PonyHandlerError::PostReply)?;
            info!(images_posted, "posted pony reply");
            return Ok(Some(PonyHandlerReport {
                invocations: invocations.len(),
                images_posted,
            }));
        }

        let message =
            format_fallback_message(any_invocation_tagged(&invocations), &self.service_label);
        if let Err(post_error) = self.post_reply(event, &message).await {
            error!(error = %format!("{post_error:#}"), "failed to leave comment");
        }
        Err(PonyHandlerError::NoImageFound)
    }

    async fn fetch_with_retry(&self, invocation: &PonyInvocation) -> Option<ImageCandidate> {
        let tag = invocation.tag.as_deref();
        for attempt in 1..=PONY_FETCH_MAX_ATTEMPTS {
            match self.source.fetch(tag).await {
                Ok(candidate) => return Some(candidate),
                Err(fetch_error) => {
                    warn!(
                        attempt,
                        tag = tag.unwrap_or_default(),
                        error = %fetch_error,
                        "failed to get a pony"
                    );
                }
            }
        }
        None
    }

    async fn post_reply(&self, event: &CommentEvent, reply: &str) -> anyhow::Result<()> {
        let body = render_issue_response_raw(
            &event.body,
            &event.html_url,
            &event.author_login,
            reply,
            ABOUT_THIS_BOT,
        );
        self.poster
            .create_comment(&event.org, &event.repo, event.number, &body)
            .await
    }
}
