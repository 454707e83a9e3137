use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::size_policy::{SizeCheckError, SizePolicy};

pub const DEFAULT_PONY_API_URL: &str = "https://theponyapi.com/api/v1/pony/random";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Thumbnail and full-resolution URLs for one fetched image.
pub struct ImageCandidate {
    pub thumbnail_url: String,
    pub full_url: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to make request: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("no pony found (status {status})")]
    Status { status: u16 },
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("the pony is too big: {url}")]
    TooBig { url: String },
    #[error("couldn't fetch pony for size check: {0}")]
    SizeCheck(#[from] SizeCheckError),
}

#[async_trait]
/// Trait contract for `ImageSource` behavior.
pub trait ImageSource: Send + Sync {
    /// Fetch one image, narrowed by `tag` when present.
    async fn fetch(&self, tag: Option<&str>) -> Result<ImageCandidate, FetchError>;
}

// Only the fields the plugin reads.
#[derive(Debug, Deserialize)]
struct PonyApiResponse {
    pony: PonyApiPony,
}

#[derive(Debug, Deserialize)]
struct PonyApiPony {
    representations: PonyApiRepresentations,
}

#[derive(Debug, Deserialize)]
struct PonyApiRepresentations {
    full: String,
    small: String,
}

/// Return `scheme://host[:port]` for a lookup endpoint, or the trimmed input when it is not a URL.
pub fn service_origin(api_url: &str) -> String {
    match reqwest::Url::parse(api_url.trim()) {
        Ok(parsed) if parsed.has_host() => parsed.origin().ascii_serialization(),
        _ => api_url.trim().to_string(),
    }
}

#[derive(Clone)]
/// Image source backed by the pony lookup HTTP API.
pub struct PonyApiImageSource {
    http: reqwest::Client,
    api_url: String,
    size_policy: Arc<dyn SizePolicy>,
}

impl PonyApiImageSource {
    pub fn new(
        http: reqwest::Client,
        api_url: impl Into<String>,
        size_policy: Arc<dyn SizePolicy>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            size_policy,
        }
    }
}

#[async_trait]
impl ImageSource for PonyApiImageSource {
    async fn fetch(&self, tag: Option<&str>) -> Result<ImageCandidate, FetchError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[("q", tag.unwrap_or_default())])
            .send()
            .await
            .map_err(FetchError::Transport)?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let payload = response
            .json::<PonyApiResponse>()
            .await
            .map_err(FetchError::Decode)?;
        let PonyApiRepresentations { full, small } = payload.pony.representations;

        if self.size_policy.exceeds_limit(&small).await? {
            return Err(FetchError::TooBig { url: small });
        }
        tracing::debug!(thumbnail = %small, full = %full, "fetched pony");
        Ok(ImageCandidate {
            thumbnail_url: small,
            full_url: full,
        })
    }
}
