use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Largest page the service will return.
pub const MAX_PAGE_SIZE: u32 = 50;

/// One page of a list endpoint.
///
/// A body without `data` is treated as an empty page. The paging metadata
/// is kept as whatever JSON the service sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub total: Option<Value>,
    pub page: Option<Value>,
    pub limit: Option<Value>,
}

/// Position within a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// First page with `limit` clamped to `1..=MAX_PAGE_SIZE`.
    pub fn new(limit: u32) -> Self {
        Self {
            page: 0,
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn next_page(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }

    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(MAX_PAGE_SIZE)
    }
}
