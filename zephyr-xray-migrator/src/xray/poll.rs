//! Import job polling.

use super::job::ImportJobStatus;
use std::future::Future;
use std::time::Duration;
use tracing::info;

/// Requests the job status until it leaves the pending/working set.
///
/// `fetch_status` is called once per observed status and the task sleeps
/// `interval` between two calls. There is no timeout: a job that never
/// finishes is polled forever.
pub async fn poll_until_terminal<F, Fut, E>(
    interval: Duration,
    mut fetch_status: F,
) -> Result<ImportJobStatus, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<ImportJobStatus, E>>,
{
    loop {
        let status = fetch_status().await?;
        info!(status = status.status.as_str(), "Import job status");
        if !status.status.is_in_progress() {
            return Ok(status);
        }
        tokio::time::sleep(interval).await;
    }
}
