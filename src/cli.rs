use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use dummyapi::{DummyApiConfig, DEFAULT_BASE_URL, DEFAULT_POST_LIMIT};

/// dummyapi-collector — gather users and posts with comments from dummyapi.io.
#[derive(Parser, Debug)]
#[command(name = "dummyapi-collector", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// API key sent as `app-id` (falls back to DUMMYAPI_APP_ID, then a prompt)
    #[arg(long, global = true)]
    pub app_id: Option<String>,

    /// Base URL of the REST service
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Directory the JSON output files are written into
    #[arg(long, default_value = ".", global = true)]
    pub output_dir: PathBuf,

    /// Number of posts to collect
    #[arg(long, default_value_t = DEFAULT_POST_LIMIT, global = true)]
    pub post_limit: usize,

    /// Fetch comments with up to N concurrent requests (default: one at a time)
    #[arg(long, global = true)]
    pub comment_workers: Option<usize>,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Probe the service with the API key
    Probe,

    /// Collect every user into users_data.json
    Users,

    /// Collect posts with their comments into posts_with_comments.json
    Posts,

    /// Probe with a valid and a corrupted key, then run both collections
    Demo,
}

impl Cli {
    /// Client configuration for the given key.
    pub fn client_config(&self, app_id: String) -> DummyApiConfig {
        let mut config = DummyApiConfig::new(app_id);
        config.base_url = self.base_url.clone();
        config.output_dir = self.output_dir.clone();
        config.post_limit = self.post_limit;
        config.comment_workers = self.comment_workers;
        config.request_timeout = self.timeout_secs.map(Duration::from_secs);
        config
    }
}
