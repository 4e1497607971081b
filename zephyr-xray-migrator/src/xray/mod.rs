//! Destination side of the migration: Xray Cloud bulk test import.

mod error;
mod job;
mod payload;
mod poll;

pub use error::XrayError;
pub use job::{
    BulkImportResponse, CreatedIssue, ImportItemError, ImportJobStatus, ImportResult, JobStatus,
};
pub use payload::{
    IdRef, IssueLinkAdd, IssueLinkUpdate, KeyRef, NameRef, TestFields, TestPayload, TestStep,
    TestUpdate,
};
pub use poll::poll_until_terminal;

use crate::config::XrayConfig;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

/// Maximum number of tests Xray accepts in one bulk import.
pub const MAX_TESTS_PER_BULK_IMPORT: usize = 1000;

/// Client for the Xray Cloud REST API.
#[derive(Debug, Clone)]
pub struct XrayClient {
    http: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    token: Option<String>,
}

impl XrayClient {
    pub fn new(http: Client, config: &XrayConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token: None,
        }
    }

    /// Exchanges the client credentials for an API token.
    ///
    /// # Errors
    ///
    /// Returns [`XrayError::Status`] when the credentials are rejected.
    pub async fn authenticate(&mut self) -> Result<(), XrayError> {
        info!("Authenticating against Xray");
        let response = self
            .http
            .post(format!("{}/api/v1/authenticate", self.base_url))
            .json(&json!({
                "client_id": self.client_id,
                "client_secret": self.client_secret,
            }))
            .send()
            .await?;

        // The token comes back as a bare JSON string.
        let token: String = check_status(response).await?.json().await?;
        self.token = Some(token);
        Ok(())
    }

    /// Submits tests for creation and returns the import job id, if any.
    pub async fn submit_bulk(&self, tests: &[TestPayload]) -> Result<Option<String>, XrayError> {
        let token = self.token()?;
        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!(
                request = %serde_json::to_string(tests).unwrap_or_default(),
                "Bulk import request"
            );
        }

        let response = self
            .http
            .post(format!("{}/api/v1/import/test/bulk", self.base_url))
            .bearer_auth(token)
            .json(tests)
            .send()
            .await?;

        let body: BulkImportResponse = check_status(response).await?.json().await?;
        debug!(job_id = ?body.job_id, "Bulk import response");
        Ok(body.job_id)
    }

    /// Fetches the current status of an import job.
    pub async fn job_status(&self, job_id: &str) -> Result<ImportJobStatus, XrayError> {
        let token = self.token()?;
        let response = self
            .http
            .get(format!(
                "{}/api/v1/import/test/bulk/{job_id}/status",
                self.base_url
            ))
            .bearer_auth(token)
            .send()
            .await?;

        let body = check_status(response).await?.text().await?;
        debug!(job_id, response = %body, "Import job status response");
        serde_json::from_str(&body).map_err(|source| XrayError::Decode { source, body })
    }

    fn token(&self) -> Result<&str, XrayError> {
        self.token.as_deref().ok_or(XrayError::NotAuthenticated)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, XrayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(XrayError::Status {
        status: status.as_u16(),
        body,
    })
}
