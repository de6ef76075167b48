use std::fmt;
use std::path::PathBuf;

use futures_util::stream::{self, StreamExt};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::{DummyApiConfig, DEFAULT_BASE_URL};
use crate::error::{DummyApiError, Result};
use crate::paginate::{paginate, Collection, StopReason};
use crate::rest::DummyApiHttpClient;
use crate::storage::save_to_file;
use crate::types::{item_id, PageRequest, ResourceItem, COMMENTS_FIELD};

/// Raw body of the connectivity probe.
pub const TEST_CONNECTION_FILE: &str = "test_connection_response.json";
/// Every user the service lists.
pub const USERS_FILE: &str = "users_data.json";
/// Posts, each carrying its `comments`.
pub const POSTS_WITH_COMMENTS_FILE: &str = "posts_with_comments.json";

/// Outcome of [`DummyApi::test_connection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// The probe returned 2xx with a JSON body.
    Connected {
        status: u16,
        /// Whether the probe body was written to disk.
        saved: bool,
    },
    /// Transport failure, non-2xx status or undecodable body.
    Failed { error: String },
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected { .. })
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Connected { status, .. } => write!(f, "<Response [{status}]>"),
            ConnectionStatus::Failed { error } => f.write_str(error),
        }
    }
}

/// Summary of a collection flow whose output reached disk.
#[derive(Debug)]
pub struct CollectionReport {
    pub path: PathBuf,
    pub items: usize,
    pub stop: StopReason,
}

/// Client for the dummyapi.io users/posts/comments service.
///
/// All requests are issued one after another unless
/// [`DummyApiConfig::comment_workers`] opts into concurrent comment fetching.
#[derive(Debug, Clone)]
pub struct DummyApi {
    http_client: DummyApiHttpClient,
    config: DummyApiConfig,
}

impl DummyApi {
    /// Client for the public service with default settings.
    pub fn new(app_id: &str) -> Self {
        Self {
            http_client: DummyApiHttpClient::new(DEFAULT_BASE_URL, app_id),
            config: DummyApiConfig::new(app_id),
        }
    }

    pub fn from_config(config: DummyApiConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client =
            DummyApiHttpClient::with_client(builder.build()?, &config.base_url, &config.app_id);

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &DummyApiConfig {
        &self.config
    }

    pub fn http_client(&self) -> &DummyApiHttpClient {
        &self.http_client
    }

    fn output_path(&self, filename: &str) -> PathBuf {
        self.config.output_dir.join(filename)
    }

    /// Probe the service with the configured key.
    ///
    /// On success the probe body is saved to [`TEST_CONNECTION_FILE`]; a
    /// failed save is logged but does not turn the probe into a failure.
    pub async fn test_connection(&self) -> ConnectionStatus {
        let resp = match self.http_client.probe().await {
            Ok(resp) => resp,
            Err(e) => {
                error!(error = %e, "connection test failed");
                return ConnectionStatus::Failed {
                    error: e.to_string(),
                };
            }
        };

        let body: Value = match serde_json::from_str(&resp.body) {
            Ok(body) => body,
            Err(e) => {
                let e = DummyApiError::from(e);
                error!(error = %e, "connection test returned a non-JSON body");
                return ConnectionStatus::Failed {
                    error: e.to_string(),
                };
            }
        };

        let saved = save_to_file(&body, &self.output_path(TEST_CONNECTION_FILE)).is_ok();
        info!(status = resp.status.as_u16(), saved, "connection test succeeded");
        ConnectionStatus::Connected {
            status: resp.status.as_u16(),
            saved,
        }
    }

    /// Page through every user and save them to [`USERS_FILE`].
    ///
    /// A failed page ends the walk; users gathered so far are still saved.
    pub async fn collect_all_users(&self) -> Result<CollectionReport> {
        let first = PageRequest::new(self.config.page_size);
        let collection = paginate(first, None, |req| self.http_client.get_users(req)).await;
        info!(
            users = collection.items.len(),
            pages = collection.pages_fetched,
            partial = collection.stop.is_failure(),
            "user collection finished"
        );

        self.persist(collection, USERS_FILE)
    }

    /// Fetch up to `limit` posts in the order the service lists them.
    pub async fn fetch_posts(&self, limit: usize) -> Vec<ResourceItem> {
        self.collect_posts(limit).await.items
    }

    async fn collect_posts(&self, limit: usize) -> Collection {
        // The cap doubles as the page size, bounded by the service maximum.
        let page_size = u32::try_from(limit)
            .unwrap_or(u32::MAX)
            .min(self.config.page_size);
        let collection = paginate(PageRequest::new(page_size), Some(limit), |req| {
            self.http_client.get_posts(req)
        })
        .await;
        debug!(
            posts = collection.items.len(),
            limit,
            pages = collection.pages_fetched,
            "posts fetched"
        );
        collection
    }

    /// Comments of one post. Any failure yields an empty list.
    pub async fn fetch_comments_for_post(&self, post_id: &str) -> Vec<ResourceItem> {
        match self.http_client.get_post_comments(post_id).await {
            Ok(page) => page.data,
            Err(e) => {
                warn!(post_id, error = %e, "failed to fetch comments");
                Vec::new()
            }
        }
    }

    async fn comments_of(&self, post: &ResourceItem) -> Vec<ResourceItem> {
        match item_id(post) {
            Some(id) => self.fetch_comments_for_post(&id).await,
            None => {
                warn!("post has no id, attaching no comments");
                Vec::new()
            }
        }
    }

    /// Fetch posts, attach each post's comments under `comments` and save
    /// the result to [`POSTS_WITH_COMMENTS_FILE`].
    ///
    /// Fails with [`DummyApiError::NoPosts`] when there is nothing to enrich.
    pub async fn collect_posts_and_comments(&self) -> Result<CollectionReport> {
        let mut collection = self.collect_posts(self.config.post_limit).await;
        if collection.items.is_empty() {
            warn!("no posts data fetched");
            return Err(DummyApiError::NoPosts);
        }

        match self.config.comment_workers {
            None => {
                for post in collection.items.iter_mut() {
                    let comments = self.comments_of(post).await;
                    attach_comments(post, comments);
                }
            }
            Some(workers) => {
                debug!(workers, "fetching comments concurrently");
                let all: Vec<Vec<ResourceItem>> = stream::iter(collection.items.iter())
                    .map(|post| self.comments_of(post))
                    .buffered(workers)
                    .collect()
                    .await;
                for (post, comments) in collection.items.iter_mut().zip(all) {
                    attach_comments(post, comments);
                }
            }
        }

        info!(posts = collection.items.len(), "posts enriched with comments");
        self.persist(collection, POSTS_WITH_COMMENTS_FILE)
    }

    fn persist(&self, collection: Collection, filename: &str) -> Result<CollectionReport> {
        let path = self.output_path(filename);
        save_to_file(&collection.items, &path)?;
        Ok(CollectionReport {
            path,
            items: collection.items.len(),
            stop: collection.stop,
        })
    }
}

fn attach_comments(post: &mut ResourceItem, comments: Vec<ResourceItem>) {
    let comments = comments.into_iter().map(Value::Object).collect();
    post.insert(COMMENTS_FIELD.to_string(), Value::Array(comments));
}
