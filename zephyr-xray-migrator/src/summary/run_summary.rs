//! Run summary types.

use super::result::BatchOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of batches handed to Xray (or previewed).
    pub batches: usize,

    /// Source issues returned by the search.
    pub issues_fetched: usize,

    /// Source issues skipped because of their steps.
    pub issues_skipped: usize,

    /// Test definitions built.
    pub tests_prepared: usize,

    /// Tests Xray created.
    pub tests_migrated: usize,

    /// Tests Xray refused to create.
    pub tests_failed: usize,

    /// Keys of all created tests, in creation order.
    pub created_keys: Vec<String>,

    /// Batches whose paging stopped on a source error.
    pub interrupted_batches: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with the outcome of one batch.
    pub fn record_outcome(&mut self, outcome: &BatchOutcome) {
        self.batches += 1;
        match outcome {
            BatchOutcome::Imported {
                created, errors, ..
            } => {
                self.tests_migrated += created.len();
                self.tests_failed += errors.len();
                self.created_keys.extend(created.iter().cloned());
            }
            BatchOutcome::NoJob { .. } | BatchOutcome::Previewed { .. } => {}
        }
    }

    /// Returns true when the search found nothing to migrate.
    #[must_use]
    pub fn nothing_found(&self) -> bool {
        self.issues_fetched == 0
    }

    /// Returns true if any test failed to import.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.tests_failed > 0
    }
}
