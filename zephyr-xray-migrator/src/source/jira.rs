//! Jira Cloud issue search.

use super::error::{check_status, SourceError};
use super::issue::SearchPage;
use crate::config::JiraConfig;
use reqwest::Client;
use tracing::debug;

const SERVICE: &str = "Jira";

/// Maximum issues Jira Cloud returns for one search request.
pub const MAX_RESULTS_PER_PAGE: usize = 100;

/// Client for the Jira search API.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: Client,
    site: String,
    user: String,
    api_token: String,
}

impl JiraClient {
    pub fn new(http: Client, config: &JiraConfig) -> Self {
        Self {
            http,
            site: config.site.clone(),
            user: config.user.clone(),
            api_token: config.api_token.clone(),
        }
    }

    /// Fetches one page of issues matching `jql`, starting at offset `start_at`.
    ///
    /// Uses the offset-paged `GET /rest/api/2/search`. Jira Cloud deprecates it
    /// in favour of `/rest/api/3/search/jql`, which pages with `nextPageToken`
    /// and has no `startAt`; switching means the batch loop can no longer
    /// resume from a numeric offset.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Status`] when Jira rejects the search, or
    /// [`SourceError::Request`] when the request or response decoding fails.
    pub async fn search(
        &self,
        jql: &str,
        start_at: usize,
        max_results: usize,
    ) -> Result<SearchPage, SourceError> {
        let url = format!("{}/rest/api/2/search", self.site);
        debug!(%url, jql, start_at, max_results, "Searching issues");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.user, Some(&self.api_token))
            .query(&[
                ("jql", jql.to_string()),
                ("startAt", start_at.to_string()),
                ("maxResults", max_results.to_string()),
                ("fields", "*all".to_string()),
            ])
            .send()
            .await
            .map_err(SourceError::request(SERVICE))?;

        let page: SearchPage = check_status(SERVICE, response)
            .await?
            .json()
            .await
            .map_err(SourceError::request(SERVICE))?;

        debug!(
            returned = page.issues.len(),
            total = page.total,
            "Search page received"
        );
        Ok(page)
    }
}
