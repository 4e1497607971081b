//! Batch outcome types.

use crate::xray::{ImportItemError, JobStatus};

/// Result of handing one batch to Xray.
#[derive(Debug, Clone)]
pub enum BatchOutcome {
    /// The import job finished.
    Imported {
        batch: usize,
        job_id: String,
        status: JobStatus,
        /// Keys of the created tests.
        created: Vec<String>,
        /// Per-test errors reported by Xray.
        errors: Vec<ImportItemError>,
    },

    /// Xray accepted the request without starting a job.
    NoJob { batch: usize, submitted: usize },

    /// Dry run: the batch was prepared but not submitted.
    Previewed { batch: usize, prepared: usize },
}
