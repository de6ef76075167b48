pub mod client;
pub mod config;
pub mod error;
pub mod paginate;
pub mod rest;
pub mod storage;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Client
pub use client::{
    CollectionReport, ConnectionStatus, DummyApi, POSTS_WITH_COMMENTS_FILE, TEST_CONNECTION_FILE,
    USERS_FILE,
};
pub use config::{DummyApiConfig, DEFAULT_BASE_URL, DEFAULT_POST_LIMIT};
pub use error::{status_code, DummyApiError, Result};

// REST client
pub use rest::{DummyApiHttpClient, RawResponse, APP_ID_HEADER};

// Pagination
pub use paginate::{paginate, Collection, StopReason};
pub use types::{item_id, Page, PageRequest, ResourceItem, COMMENTS_FIELD, MAX_PAGE_SIZE};

// Persistence
pub use storage::save_to_file;
