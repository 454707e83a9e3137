use async_trait::async_trait;
use thiserror::Error;

/// Largest image, in bytes, that GitHub renders inline.
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 10_000_000;

#[derive(Debug, Error)]
pub enum SizeCheckError {
    #[error("HEAD error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failing {status} response")]
    Status { status: u16 },
}

#[async_trait]
/// Trait contract for `SizePolicy` behavior.
pub trait SizePolicy: Send + Sync {
    /// Returns `Ok(true)` when the image at `url` is too large to embed.
    async fn exceeds_limit(&self, url: &str) -> Result<bool, SizeCheckError>;
}

/// Returns true when the `Content-Length` header exceeds `max_bytes`.
/// A missing or unparsable header counts as zero bytes.
pub fn content_length_exceeds(headers: &reqwest::header::HeaderMap, max_bytes: u64) -> bool {
    let size = headers
        .get(reqwest::header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(0);
    size > max_bytes
}

#[derive(Clone)]
/// Size policy backed by a `HEAD` request against the image URL.
pub struct HeadRequestSizePolicy {
    http: reqwest::Client,
    max_bytes: u64,
}

impl HeadRequestSizePolicy {
    pub fn new(http: reqwest::Client, max_bytes: u64) -> Self {
        Self { http, max_bytes }
    }
}

#[async_trait]
impl SizePolicy for HeadRequestSizePolicy {
    async fn exceeds_limit(&self, url: &str) -> Result<bool, SizeCheckError> {
        let response = self.http.head(url).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SizeCheckError::Status {
                status: status.as_u16(),
            });
        }
        Ok(content_length_exceeds(response.headers(), self.max_bytes))
    }
}
