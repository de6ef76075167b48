//! Page-by-page accumulation for the list endpoints.
//!
//! The loop requests pages in order until one of three things happens: a
//! page comes back empty, the optional item cap is reached, or a request
//! fails. Whatever was gathered before the stop is always handed back; a
//! failed request is never retried.

use std::future::Future;

use tracing::{debug, warn};

use crate::error::{DummyApiError, Result};
use crate::types::{Page, PageRequest, ResourceItem};

/// Why a pagination loop stopped.
#[derive(Debug)]
pub enum StopReason {
    /// A page came back with no items.
    Exhausted,
    /// The item cap was reached before the listing ran out.
    LimitReached,
    /// A page request failed; items from earlier pages are kept.
    Failed(DummyApiError),
}

impl StopReason {
    pub fn is_failure(&self) -> bool {
        matches!(self, StopReason::Failed(_))
    }
}

/// Items accumulated across pages, in page-then-position order.
#[derive(Debug)]
pub struct Collection {
    pub items: Vec<ResourceItem>,
    pub pages_fetched: u32,
    pub stop: StopReason,
}

/// Run the pagination loop starting at `first`.
///
/// With `max_items` set, the result is truncated to exactly that many items
/// even when the last page overshoots.
pub async fn paginate<F, Fut>(
    first: PageRequest,
    max_items: Option<usize>,
    mut fetch: F,
) -> Collection
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Page<ResourceItem>>>,
{
    let mut items: Vec<ResourceItem> = Vec::new();
    let mut pages_fetched = 0;
    let mut req = first;

    let stop = loop {
        if max_items.is_some_and(|max| items.len() >= max) {
            break StopReason::LimitReached;
        }

        match fetch(req).await {
            Ok(page) => {
                pages_fetched += 1;
                if page.data.is_empty() {
                    debug!(page = req.page, "empty page, listing exhausted");
                    break StopReason::Exhausted;
                }
                debug!(
                    page = req.page,
                    received = page.data.len(),
                    accumulated = items.len() + page.data.len(),
                    "page fetched"
                );
                items.extend(page.data);
                req = req.next_page();
            }
            Err(e) => {
                warn!(page = req.page, error = %e, "page request failed, stopping");
                break StopReason::Failed(e);
            }
        }
    };

    if let Some(max) = max_items {
        items.truncate(max);
    }

    Collection {
        items,
        pages_fetched,
        stop,
    }
}
