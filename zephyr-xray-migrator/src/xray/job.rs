//! Xray bulk import job types.

use serde::Deserialize;
use serde_json::Value;

/// Response of a bulk import submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkImportResponse {
    /// Asynchronous job id; absent when Xray refused to start a job.
    #[serde(default)]
    pub job_id: Option<String>,
}

/// State of an import job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Working,
    Successful,
    PartiallySuccessful,
    Unsuccessful,
    Failed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Returns true while the job still has to be polled.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::Pending | Self::Working)
    }

    /// Returns the status as Xray spells it.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Working => "working",
            Self::Successful => "successful",
            Self::PartiallySuccessful => "partially_successful",
            Self::Unsuccessful => "unsuccessful",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }
}

/// Response of the job status endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportJobStatus {
    pub status: JobStatus,

    #[serde(default)]
    pub result: ImportResult,
}

/// Outcome of a finished import job.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportResult {
    /// Tests that were created.
    #[serde(default)]
    pub issues: Vec<CreatedIssue>,

    /// Tests that could not be created.
    #[serde(default)]
    pub errors: Vec<ImportItemError>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedIssue {
    #[serde(default)]
    pub element_number: Option<usize>,
    #[serde(default)]
    pub id: Option<String>,
    pub key: String,
}

/// Error reported for one element of the bulk request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportItemError {
    #[serde(default)]
    pub element_number: Option<usize>,

    /// Field name to message map, as Xray reports it.
    #[serde(default)]
    pub errors: Value,
}
