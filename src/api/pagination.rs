//! Cursor pagination — follow `result_info.cursor` until the last page.

use tracing::debug;

use super::models::Page;
use crate::errors::{KvPeekError, Result};

/// Fetch pages until one comes back without a cursor, concatenating
/// their items in order.
///
/// `fetch` receives `None` for the first page and the previous page's
/// cursor afterwards. Fails with `PageLimitExceeded` if more than
/// `max_pages` pages would be needed.
pub fn collect_pages<T, F>(max_pages: usize, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<&str>) -> Result<Page<T>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;

    for page_no in 1..=max_pages {
        let page = fetch(cursor.as_deref())?;
        debug!(page = page_no, items = page.items.len(), "fetched page");
        items.extend(page.items);

        match page.cursor {
            Some(next) => cursor = Some(next),
            None => return Ok(items),
        }
    }

    Err(KvPeekError::PageLimitExceeded(max_pages))
}
