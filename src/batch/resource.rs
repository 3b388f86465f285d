use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::time::sleep;

use super::job::Job;
use crate::api::Transport;
use crate::error::CredGuardError;

/// Default interval between status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Default client-side deadline for `wait_for_completion`.
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(600);

/// Wire body for `batch.upload`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadRequest {
    file_name: String,
    file_size: u64,
    product: String,
    csv_data: String,
}

/// Options for [`BatchResource::upload`].
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// When true, `upload` only returns once the job reaches a terminal
    /// state, polling internally with `poll_interval` up to `max_wait`.
    pub wait_for_completion: bool,
    pub poll_interval: Duration,
    pub max_wait: Duration,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            wait_for_completion: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_wait: DEFAULT_MAX_WAIT,
        }
    }
}

/// Batch upload and job lifecycle operations.
///
/// Every method here is a single logical interaction with the server; none
/// of them retry. `wait_for_completion` blocks the calling task for its whole
/// duration — dropping the future (or wrapping it in `tokio::time::timeout`)
/// cancels the poll loop between awaits without issuing further requests.
pub struct BatchResource<'a> {
    transport: &'a Transport,
}

impl<'a> BatchResource<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Upload a local CSV file for batch scoring.
    ///
    /// Reads the file fully into memory and submits one request carrying the
    /// file name, byte size, product code and raw content. The server
    /// responds with a freshly created job in the `pending` state (or, with
    /// `wait_for_completion` set, the terminal job after polling).
    ///
    /// An unreadable or non-UTF-8 file yields
    /// [`Validation`](CredGuardError::Validation) before any request is sent.
    pub async fn upload(
        &self,
        file_path: &Path,
        product: &str,
        options: &UploadOptions,
    ) -> Result<Job, CredGuardError> {
        let bytes = tokio::fs::read(file_path).await.map_err(|e| {
            CredGuardError::Validation(format!("cannot read {}: {e}", file_path.display()))
        })?;
        let csv_data = String::from_utf8(bytes).map_err(|_| {
            CredGuardError::Validation(format!("{} is not valid UTF-8", file_path.display()))
        })?;
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                CredGuardError::Validation(format!("{} has no file name", file_path.display()))
            })?;

        let request = UploadRequest {
            file_name,
            file_size: csv_data.len() as u64,
            product: product.to_string(),
            csv_data,
        };
        let job: Job = self.transport.post("/api/trpc/batch.upload", &request).await?;

        if options.wait_for_completion {
            return self
                .wait_for_completion(&job.job_id, options.poll_interval, options.max_wait)
                .await;
        }
        Ok(job)
    }

    /// Fetch the current status of a job. One request, no polling.
    pub async fn get_status(&self, job_id: &str) -> Result<Job, CredGuardError> {
        self.transport
            .get(&format!("/api/trpc/batch.getJob?jobId={job_id}"))
            .await
    }

    /// Poll a job at a fixed interval until it reaches a terminal state.
    ///
    /// Returns the completed job, or fails with
    /// [`JobFailed`](CredGuardError::JobFailed) the moment a `failed`
    /// snapshot is observed — a failed job is never returned as a success.
    /// If the deadline is reached first, fails with
    /// [`WaitTimeout`](CredGuardError::WaitTimeout); no request is issued
    /// after the deadline has passed.
    pub async fn wait_for_completion(
        &self,
        job_id: &str,
        poll_interval: Duration,
        max_wait: Duration,
    ) -> Result<Job, CredGuardError> {
        self.wait_with_progress(job_id, poll_interval, max_wait, |_| {})
            .await
    }

    /// Same as [`wait_for_completion`](Self::wait_for_completion), invoking
    /// `on_poll` with every fetched snapshot. Used by the CLI to report
    /// processed-row counts while waiting.
    pub async fn wait_with_progress<F>(
        &self,
        job_id: &str,
        poll_interval: Duration,
        max_wait: Duration,
        mut on_poll: F,
    ) -> Result<Job, CredGuardError>
    where
        F: FnMut(&Job),
    {
        let start = Instant::now();
        loop {
            let elapsed = start.elapsed();
            if elapsed > max_wait {
                return Err(CredGuardError::WaitTimeout {
                    job_id: job_id.to_string(),
                    elapsed_ms: elapsed.as_millis() as u64,
                });
            }

            let job = self.get_status(job_id).await?;
            on_poll(&job);

            if job.is_complete() {
                return Ok(job);
            }
            if job.is_failed() {
                let message = job
                    .error_message
                    .unwrap_or_else(|| "job falhou sem mensagem de erro".to_string());
                return Err(CredGuardError::JobFailed {
                    job_id: job_id.to_string(),
                    message,
                });
            }

            sleep(poll_interval).await;
        }
    }

    /// Download the result artifact of a completed job as raw bytes.
    /// Persisting them is the caller's responsibility.
    pub async fn download_results(&self, job_id: &str) -> Result<Vec<u8>, CredGuardError> {
        self.transport
            .get_bytes(&format!("/api/trpc/batch.downloadCsv?jobId={job_id}"))
            .await
    }
}
