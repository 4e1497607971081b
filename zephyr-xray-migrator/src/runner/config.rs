//! Runner configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for running the migrator.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the config file.
    config_path: PathBuf,
    /// Whether to preview the tests without creating them.
    dry_run: bool,
    /// Overrides `migration.poll_interval_secs` from the config file.
    poll_interval: Option<Duration>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(config_path: PathBuf, dry_run: bool) -> Self {
        Self {
            config_path,
            dry_run,
            poll_interval: None,
        }
    }

    /// Sets a custom import job poll interval.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = Some(poll_interval);
        self
    }

    /// Returns the config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the poll interval override, if any.
    pub fn poll_interval(&self) -> Option<Duration> {
        self.poll_interval
    }
}
