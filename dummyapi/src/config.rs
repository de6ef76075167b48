use std::path::PathBuf;
use std::time::Duration;

use crate::error::{DummyApiError, Result};
use crate::types::MAX_PAGE_SIZE;

/// Public dummyapi.io endpoint.
pub const DEFAULT_BASE_URL: &str = "https://dummyapi.io/data/v1";

/// Number of posts gathered by the posts-with-comments flow.
pub const DEFAULT_POST_LIMIT: usize = 50;

/// Configuration for the dummyapi client.
#[derive(Debug, Clone)]
pub struct DummyApiConfig {
    /// Base URL of the REST service (e.g. `https://dummyapi.io/data/v1`).
    pub base_url: String,
    /// Application key sent as the `app-id` header.
    pub app_id: String,
    /// Items requested per page, clamped to the service maximum.
    pub page_size: u32,
    /// Number of posts collected by `collect_posts_and_comments`.
    pub post_limit: usize,
    /// Directory the output files are written into.
    pub output_dir: PathBuf,
    /// Concurrent comment requests; `None` fetches comments one post at a time.
    pub comment_workers: Option<usize>,
    /// Per-request timeout; `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl DummyApiConfig {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: app_id.into(),
            page_size: MAX_PAGE_SIZE,
            post_limit: DEFAULT_POST_LIMIT,
            output_dir: PathBuf::from("."),
            comment_workers: None,
            request_timeout: None,
        }
    }

    /// Check the parts of the configuration that cannot be fixed up silently.
    ///
    /// The key itself is never checked; a bad key only shows up as a failed
    /// request.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            DummyApiError::Config(format!("invalid base url {}: {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DummyApiError::Config(format!(
                "unsupported scheme in base url: {}",
                url.scheme()
            )));
        }
        if self.comment_workers == Some(0) {
            return Err(DummyApiError::Config(
                "comment_workers must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
