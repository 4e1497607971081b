#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod batch;
pub mod config;
pub mod runner;
pub mod source;
pub mod summary;
pub mod transform;
pub mod xray;

pub use batch::{collect_batch, MigrationBatch, PageLimits, SourcePage};
pub use config::{Config, ConfigError, MigrationOptions};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use source::{JiraClient, SourceError, SourceIssue, SourceStep, ZephyrClient};
pub use summary::{BatchOutcome, RunSummary};
pub use transform::{build_test_payload, merge_labels, should_migrate, TransformOptions};
pub use xray::{poll_until_terminal, JobStatus, TestPayload, XrayClient, XrayError};
