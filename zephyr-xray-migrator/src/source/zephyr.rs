//! Zephyr Squad Cloud test step retrieval.

use super::error::{check_status, SourceError};
use super::signing::{test_steps_canonical_request, RequestSigner};
use super::step::{sort_steps, SourceStep};
use crate::config::{JiraConfig, ZephyrConfig};
use reqwest::Client;
use tracing::debug;

const SERVICE: &str = "Zephyr";

/// Client for the Zephyr public REST API.
#[derive(Debug, Clone)]
pub struct ZephyrClient {
    http: Client,
    base_url: String,
    signer: RequestSigner,
}

impl ZephyrClient {
    pub fn new(http: Client, config: &ZephyrConfig, jira: &JiraConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            signer: RequestSigner::new(
                jira.account_id.clone(),
                config.access_key.clone(),
                config.secret_key.clone(),
            ),
        }
    }

    /// Fetches the steps of a test, ordered by their position.
    ///
    /// Returns `None` when Zephyr has no step list for the issue at all
    /// (the API answers `null`), which is different from an empty list.
    pub async fn test_steps(
        &self,
        issue_id: &str,
        project_id: &str,
    ) -> Result<Option<Vec<SourceStep>>, SourceError> {
        let url = format!(
            "{}/connect/public/rest/api/1.0/teststep/{issue_id}",
            self.base_url
        );
        let token = self
            .signer
            .sign(&test_steps_canonical_request(issue_id, project_id))?;

        let response = self
            .http
            .get(&url)
            .query(&[("projectId", project_id)])
            .header(reqwest::header::AUTHORIZATION, format!("JWT {token}"))
            .header("zapiAccessKey", self.signer.access_key())
            .send()
            .await
            .map_err(SourceError::request(SERVICE))?;

        let body = check_status(SERVICE, response)
            .await?
            .text()
            .await
            .map_err(SourceError::request(SERVICE))?;
        debug!(issue_id, body = %body, "Zephyr steps response");

        let steps: Option<Vec<SourceStep>> = if body.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&body).map_err(|e| SourceError::Decode {
                service: SERVICE,
                source: e,
            })?
        };

        Ok(steps.map(|mut steps| {
            sort_steps(&mut steps);
            steps
        }))
    }
}
