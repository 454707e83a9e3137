use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Enumerates supported `CommentAction` values.
pub enum CommentAction {
    Created,
    Edited,
    Deleted,
    /// Any action GitHub adds later; never handled.
    #[serde(other)]
    Other,
}

impl CommentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Edited => "edited",
            Self::Deleted => "deleted",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Error)]
/// Errors raised while decoding comment webhook payloads.
pub enum CommentEventError {
    #[error("invalid issue_comment payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("issue_comment payload field `{0}` must not be blank")]
    BlankField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Inbound comment on an issue or pull request.
pub struct CommentEvent {
    pub action: CommentAction,
    pub body: String,
    pub org: String,
    pub repo: String,
    pub number: u64,
    pub author_login: String,
    pub html_url: String,
}

impl CommentEvent {
    pub fn is_created(&self) -> bool {
        self.action == CommentAction::Created
    }

    pub fn event_key(&self) -> String {
        format!(
            "issue-comment-{}:{}/{}#{}",
            self.action.as_str(),
            self.org,
            self.repo,
            self.number
        )
    }

    /// Decode a GitHub `issue_comment` webhook payload.
    pub fn from_webhook_payload(raw: &str) -> Result<Self, CommentEventError> {
        let payload: IssueCommentWebhookPayload = serde_json::from_str(raw)?;
        payload.try_into()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WebhookUser {
    login: String,
}

#[derive(Debug, Clone, Deserialize)]
struct WebhookComment {
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    html_url: String,
    user: WebhookUser,
}

#[derive(Debug, Clone, Deserialize)]
struct WebhookIssue {
    number: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct WebhookRepository {
    name: String,
    owner: WebhookUser,
}

#[derive(Debug, Clone, Deserialize)]
struct IssueCommentWebhookPayload {
    action: CommentAction,
    comment: WebhookComment,
    issue: WebhookIssue,
    repository: WebhookRepository,
}

impl TryFrom<IssueCommentWebhookPayload> for CommentEvent {
    type Error = CommentEventError;

    fn try_from(payload: IssueCommentWebhookPayload) -> Result<Self, Self::Error> {
        let org = payload.repository.owner.login.trim().to_string();
        if org.is_empty() {
            return Err(CommentEventError::BlankField("repository.owner.login"));
        }
        let repo = payload.repository.name.trim().to_string();
        if repo.is_empty() {
            return Err(CommentEventError::BlankField("repository.name"));
        }
        Ok(Self {
            action: payload.action,
            body: payload.comment.body.unwrap_or_default(),
            org,
            repo,
            number: payload.issue.number,
            author_login: payload.comment.user.login,
            html_url: payload.comment.html_url,
        })
    }
}
