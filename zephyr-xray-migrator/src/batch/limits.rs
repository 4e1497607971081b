//! Page size limits.

use crate::source::MAX_RESULTS_PER_PAGE;
use crate::xray::MAX_TESTS_PER_BULK_IMPORT;

/// The independent caps a search page has to respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Most issues one search request returns.
    pub page_cap: usize,
    /// Most tests one bulk import accepts.
    pub bulk_cap: usize,
    /// Most source issues processed in the whole run.
    pub max_total: usize,
}

impl PageLimits {
    /// Limits of the Jira and Xray Cloud APIs with a user-configured total.
    #[must_use]
    pub fn new(max_total: usize) -> Self {
        Self {
            page_cap: MAX_RESULTS_PER_PAGE,
            bulk_cap: MAX_TESTS_PER_BULK_IMPORT,
            max_total,
        }
    }

    /// Size of the next page request.
    ///
    /// `total_processed` counts every issue fetched so far in the run,
    /// `obtained_in_batch` those fetched for the batch being built. Zero
    /// means no further page may be requested for this batch.
    #[must_use]
    pub fn page_size(&self, total_processed: usize, obtained_in_batch: usize) -> usize {
        let remaining_total = self.max_total.saturating_sub(total_processed);
        let remaining_in_bulk = self.bulk_cap.saturating_sub(obtained_in_batch);
        self.page_cap
            .min(self.bulk_cap)
            .min(remaining_total)
            .min(remaining_in_bulk)
    }
}
