// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Page/pagesize pagination for CloudStack list commands
//!
//! CloudStack list commands accept `page` (starting at 1) and `pagesize`,
//! and report the total number of matching items in `count`. Servers cap
//! `pagesize` at `default.page.size`, so a page may come back shorter than
//! requested even when more items exist; the reported total is used to
//! tell the two cases apart when it is available.
//!
//! ```
//! # #[tokio::main]
//! # async fn main() {
//! use cloudstack_pagination::{Page, collect_all};
//!
//! let items: Vec<u32> = (1..=7).collect();
//! let all = collect_all(3, |page, page_size| {
//!     let items = items.clone();
//!     async move {
//!         let start = ((page - 1) * page_size) as usize;
//!         let end = (start + page_size as usize).min(items.len());
//!         Ok::<_, std::convert::Infallible>(Page::new(items[start..end].to_vec(), Some(7)))
//!     }
//! })
//! .await
//! .unwrap();
//! assert_eq!(all, items);
//! # }
//! ```

use std::future::Future;
use thiserror::Error;
use tracing::debug;

/// One page of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching items across all pages, when the server reports it
    pub total: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: Option<u64>) -> Self {
        Self { items, total }
    }
}

/// Errors from [`collect_all`]
#[derive(Debug, Error)]
pub enum PaginationError<E> {
    /// A page size of zero would never make progress
    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// Fetching a page failed
    #[error("fetching page {page} failed: {source}")]
    Fetch {
        page: u32,
        #[source]
        source: E,
    },
}

impl<E> PaginationError<E> {
    /// The fetch error, if that is what stopped pagination
    pub fn into_fetch_error(self) -> Option<E> {
        match self {
            PaginationError::Fetch { source, .. } => Some(source),
            PaginationError::InvalidPageSize => None,
        }
    }
}

/// Fetch pages 1, 2, ... and concatenate their items
///
/// `fetch` is called with `(page, page_size)`. Pagination stops after an
/// empty page, once the reported total has been collected, or, when no
/// total is reported, after a page shorter than `page_size`.
pub async fn collect_all<T, E, F, Fut>(
    page_size: u32,
    mut fetch: F,
) -> Result<Vec<T>, PaginationError<E>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    if page_size == 0 {
        return Err(PaginationError::InvalidPageSize);
    }

    let mut all = Vec::new();
    let mut page = 1u32;

    loop {
        let Page { items, total } = fetch(page, page_size)
            .await
            .map_err(|source| PaginationError::Fetch { page, source })?;
        let fetched = items.len();
        all.extend(items);
        debug!(page, fetched, collected = all.len(), ?total, "fetched page");

        if fetched == 0 {
            break;
        }
        let done = match total {
            Some(total) => all.len() as u64 >= total,
            None => fetched < page_size as usize,
        };
        if done {
            break;
        }
        page = match page.checked_add(1) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::sync::{Arc, Mutex};

    /// Serve `items` in pages, optionally capping the page size like a
    /// server with a lower `default.page.size`
    fn server(
        items: Vec<u32>,
        cap: Option<u32>,
        report_total: bool,
    ) -> (
        Arc<Mutex<Vec<(u32, u32)>>>,
        impl FnMut(u32, u32) -> std::future::Ready<Result<Page<u32>, Infallible>>,
    ) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let seen = calls.clone();
        let fetch = move |page: u32, page_size: u32| {
            seen.lock().unwrap().push((page, page_size));
            let size = cap.map_or(page_size, |c| c.min(page_size)) as usize;
            let start = (page as usize - 1) * size;
            let end = (start + size).min(items.len());
            let slice = if start < items.len() {
                items[start..end].to_vec()
            } else {
                Vec::new()
            };
            let total = report_total.then_some(items.len() as u64);
            std::future::ready(Ok(Page::new(slice, total)))
        };
        (calls, fetch)
    }

    #[tokio::test]
    async fn test_collects_every_page() {
        let items: Vec<u32> = (0..10).collect();
        let (calls, fetch) = server(items.clone(), None, true);
        let all = collect_all(4, fetch).await.unwrap();
        assert_eq!(all, items);
        assert_eq!(*calls.lock().unwrap(), vec![(1, 4), (2, 4), (3, 4)]);
    }

    #[tokio::test]
    async fn test_exact_multiple_stops_on_total() {
        let items: Vec<u32> = (0..8).collect();
        let (calls, fetch) = server(items.clone(), None, true);
        let all = collect_all(4, fetch).await.unwrap();
        assert_eq!(all, items);
        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_exact_multiple_without_total_fetches_empty_page() {
        let items: Vec<u32> = (0..8).collect();
        let (calls, fetch) = server(items.clone(), None, false);
        let all = collect_all(4, fetch).await.unwrap();
        assert_eq!(all, items);
        assert_eq!(calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_server_cap_is_followed_with_total() {
        let items: Vec<u32> = (0..10).collect();
        let (_, fetch) = server(items.clone(), Some(3), true);
        let all = collect_all(5, fetch).await.unwrap();
        assert_eq!(all, items);
    }

    #[tokio::test]
    async fn test_empty_result() {
        let (calls, fetch) = server(Vec::new(), None, true);
        let all = collect_all(4, fetch).await.unwrap();
        assert!(all.is_empty());
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_zero_page_size_rejected() {
        let (calls, fetch) = server(vec![1], None, true);
        let err = collect_all(0, fetch).await.unwrap_err();
        assert!(matches!(err, PaginationError::InvalidPageSize));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_reports_page() {
        let err = collect_all(2, |page, _| async move {
            if page == 2 {
                Err("boom")
            } else {
                Ok(Page::new(vec![1, 2], None))
            }
        })
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "fetching page 2 failed: boom");
        assert_eq!(err.into_fetch_error(), Some("boom"));
    }
}
