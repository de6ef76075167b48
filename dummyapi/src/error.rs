use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DummyApiError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("nothing to save to {}", path.display())]
    EmptyInput { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no posts fetched")]
    NoPosts,

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DummyApiError>;

/// Collapse an operation result into the integer status used by the
/// collection flows: `0` on success, `1` on any failure.
pub fn status_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
