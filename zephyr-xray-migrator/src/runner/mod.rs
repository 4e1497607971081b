//! Orchestrates a migration run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::batch::{collect_batch, MigrationBatch, PageLimits, SourcePage};
use crate::config::Config;
use crate::source::{JiraClient, SourceError, ZephyrClient};
use crate::summary::{BatchOutcome, RunSummary};
use crate::transform::{build_test_payload, should_migrate, TransformOptions};
use crate::xray::{poll_until_terminal, TestPayload, XrayClient, XrayError};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, info_span, warn, Instrument};

/// Runs the page, transform, import cycle until the source is exhausted.
pub struct Runner {
    config: Config,
    dry_run: bool,
    poll_interval: Duration,
    limits: PageLimits,
    options: TransformOptions,
    jira: JiraClient,
    zephyr: ZephyrClient,
    xray: XrayClient,
}

impl Runner {
    /// Loads the config file and builds the API clients.
    pub fn new(runner_config: RunnerConfig) -> Result<Self, RunnerError> {
        let config = Config::load(runner_config.config_path())?;
        Self::with_config(config, &runner_config)
    }

    /// Builds a runner from an already loaded [`Config`].
    pub fn with_config(config: Config, runner_config: &RunnerConfig) -> Result<Self, RunnerError> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        let poll_interval = runner_config
            .poll_interval()
            .unwrap_or_else(|| Duration::from_secs(config.migration.poll_interval_secs));

        Ok(Self {
            dry_run: runner_config.dry_run(),
            poll_interval,
            limits: PageLimits::new(config.migration.max_tests),
            options: TransformOptions::from(&config.migration),
            jira: JiraClient::new(http.clone(), &config.jira),
            zephyr: ZephyrClient::new(http.clone(), &config.zephyr, &config.jira),
            xray: XrayClient::new(http, &config.xray),
            config,
        })
    }

    /// Executes the full migration.
    ///
    /// # Errors
    ///
    /// Source HTTP status errors only end the batch they occur in. Every
    /// other error ends the run.
    pub async fn run(&mut self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.dry_run);
        info!(jql = %self.config.migration.jql, dry_run = self.dry_run, "Starting migration");

        if !self.dry_run {
            self.xray.authenticate().await?;
        }

        let mut batch_number = 0;
        loop {
            batch_number += 1;
            let span = info_span!("batch", batch = batch_number);

            let batch = collect_batch(
                &self.limits,
                batch_number,
                summary.issues_fetched,
                |start_at, page_size| self.fetch_page(start_at, page_size),
            )
            .instrument(span.clone())
            .await?;

            summary.issues_fetched += batch.issues_obtained;
            summary.issues_skipped += batch.issues_skipped;
            summary.tests_prepared += batch.items.len();
            if batch.interrupted {
                summary.interrupted_batches += 1;
            }

            if batch.is_empty() {
                info!(batch = batch_number, "No more tests to migrate");
                break;
            }

            let outcome = self.submit_batch(batch).instrument(span).await?;
            summary.record_outcome(&outcome);
        }

        if summary.nothing_found() {
            warn!("Aborting. No tests to migrate");
        }
        Ok(summary)
    }

    /// Fetches one search page together with the steps of every issue on it.
    async fn fetch_page(
        &self,
        start_at: usize,
        page_size: usize,
    ) -> Result<SourcePage<TestPayload>, SourceError> {
        let page = self
            .jira
            .search(&self.config.migration.jql, start_at, page_size)
            .await?;
        info!(count = page.issues.len(), "Obtaining tests information");

        let mut items = Vec::with_capacity(page.issues.len());
        let mut skipped = 0;
        for issue in &page.issues {
            let steps = self
                .zephyr
                .test_steps(&issue.id, &issue.fields.project.id)
                .await?;

            if !should_migrate(
                steps.as_deref(),
                self.options.migrate_tests_with_empty_steps,
            ) {
                debug!(key = %issue.key, "Skipping test without steps");
                skipped += 1;
                continue;
            }

            items.push(build_test_payload(
                issue,
                steps.as_deref().unwrap_or_default(),
                &self.options,
            ));
        }

        Ok(SourcePage {
            fetched: page.issues.len(),
            items,
            skipped,
        })
    }

    /// Submits a batch and waits for the import job to finish.
    async fn submit_batch(
        &self,
        batch: MigrationBatch<TestPayload>,
    ) -> Result<BatchOutcome, XrayError> {
        if self.dry_run {
            print_dry_run_preview(&batch);
            return Ok(BatchOutcome::Previewed {
                batch: batch.number,
                prepared: batch.items.len(),
            });
        }

        info!(
            batch = batch.number,
            tests = batch.items.len(),
            "Creating tests in bulk"
        );
        let Some(job_id) = self.xray.submit_bulk(&batch.items).await? else {
            warn!(batch = batch.number, "Bulk import returned no job id");
            return Ok(BatchOutcome::NoJob {
                batch: batch.number,
                submitted: batch.items.len(),
            });
        };

        info!(%job_id, "Waiting for import job");
        let job =
            poll_until_terminal(self.poll_interval, || self.xray.job_status(&job_id)).await?;

        let created: Vec<String> = job.result.issues.iter().map(|i| i.key.clone()).collect();
        let errors = job.result.errors;

        if !errors.is_empty() {
            warn!(count = errors.len(), "Total tests not migrated");
            for item in &errors {
                warn!(
                    element = ?item.element_number,
                    errors = %item.errors,
                    "Test not created"
                );
            }
        }
        info!(count = created.len(), "Total tests migrated");
        if !created.is_empty() {
            info!(keys = %created.join(","), "Issue keys of created tests");
        }

        Ok(BatchOutcome::Imported {
            batch: batch.number,
            job_id,
            status: job.status,
            created,
            errors,
        })
    }
}

fn print_dry_run_preview(batch: &MigrationBatch<TestPayload>) {
    println!("\n[DRY RUN] Batch {}", batch.number);
    println!("  Would create {} tests:\n", batch.items.len());

    for (i, test) in batch.items.iter().enumerate() {
        println!(
            "  [{}/{}] {} ({} steps) -> {}",
            i + 1,
            batch.items.len(),
            test.fields.summary,
            test.steps.len(),
            test.fields.project.key
        );
    }

    if let Some(first) = batch.items.first() {
        println!("\n  Sample request:");
        if let Ok(json) = serde_json::to_string_pretty(first) {
            for line in json.lines().take(10) {
                println!("    {line}");
            }
            if json.lines().count() > 10 {
                println!("    ...");
            }
        }
    }

    println!();
}
