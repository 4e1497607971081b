//! Batching of source issues into bulk imports.
//!
//! A batch is filled page by page until a page comes back short, a cap is
//! reached, or the source reports an HTTP error.

mod limits;

pub use limits::PageLimits;

use crate::source::SourceError;
use std::future::Future;
use tracing::{debug, error, info};

/// Result of fetching and transforming one search page.
#[derive(Debug, Clone)]
pub struct SourcePage<T> {
    /// Issues returned by the search.
    pub fetched: usize,
    /// Transformed items, in search order.
    pub items: Vec<T>,
    /// Issues that were fetched but not eligible for migration.
    pub skipped: usize,
}

/// Items collected for one bulk import.
#[derive(Debug, Clone)]
pub struct MigrationBatch<T> {
    /// One-based batch number.
    pub number: usize,
    pub items: Vec<T>,
    /// Source issues fetched for this batch.
    pub issues_obtained: usize,
    /// Source issues fetched but skipped.
    pub issues_skipped: usize,
    /// Whether paging stopped on a source HTTP error.
    pub interrupted: bool,
}

impl<T> MigrationBatch<T> {
    fn new(number: usize) -> Self {
        Self {
            number,
            items: Vec::new(),
            issues_obtained: 0,
            issues_skipped: 0,
            interrupted: false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Fills one batch by requesting pages through `fetch_page`.
///
/// `fetch_page(start_at, page_size)` must return the transformed page or
/// fail as a whole; a failed page contributes nothing and the offset does not
/// move past it. `total_processed` is the number of issues fetched by earlier
/// batches and is the offset of the first page.
///
/// # Errors
///
/// Source HTTP status errors end the batch and are only logged. Every other
/// [`SourceError`] is returned.
pub async fn collect_batch<T, F, Fut>(
    limits: &PageLimits,
    number: usize,
    total_processed: usize,
    mut fetch_page: F,
) -> Result<MigrationBatch<T>, SourceError>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<SourcePage<T>, SourceError>>,
{
    let mut batch = MigrationBatch::new(number);

    loop {
        let start_at = total_processed + batch.issues_obtained;
        let page_size = limits.page_size(start_at, batch.issues_obtained);
        if page_size == 0 {
            debug!(batch = number, start_at, "No room left for another page");
            break;
        }

        let page = match fetch_page(start_at, page_size).await {
            Ok(page) => page,
            Err(SourceError::Status {
                service,
                status,
                reason,
                body,
            }) => {
                error!(
                    batch = number,
                    service,
                    code = status,
                    message = %reason,
                    body = %body,
                    "HTTP error accessing source API"
                );
                batch.interrupted = true;
                break;
            }
            Err(e) => return Err(e),
        };

        info!(
            batch = number,
            start_at,
            fetched = page.fetched,
            eligible = page.items.len(),
            "Fetched source issues"
        );
        batch.issues_obtained += page.fetched;
        batch.issues_skipped += page.skipped;
        batch.items.extend(page.items);

        if page.fetched < page_size {
            debug!(batch = number, "Reached end of search results");
            break;
        }
    }

    Ok(batch)
}
