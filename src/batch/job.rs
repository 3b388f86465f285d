use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product codes known to the batch endpoints. The server is authoritative:
/// an unrecognized code is sent through as-is rather than rejected locally.
pub mod product {
    /// Cartão de crédito.
    pub const CARTAO: &str = "CARTAO";
    /// Carnê (crediário).
    pub const CARNE: &str = "CARNE";
    /// Empréstimo pessoal.
    pub const EMPRESTIMO: &str = "EMPRESTIMO";
}

/// Lifecycle status of a batch job, exactly as reported by the server.
///
/// Legal transitions: `pending → processing → completed | failed`. The two
/// terminal states never transition further. An unrecognized status string
/// fails deserialization; the client does not guess at new states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    /// True for the two states from which no further transition occurs.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Processing => write!(f, "processing"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A snapshot of one batch scoring job as the server last reported it.
///
/// The client never computes or mutates job state locally; a `Job` is only
/// ever replaced wholesale by a freshly fetched snapshot, and may already be
/// stale by the time it is acted upon. Row counters are optional because the
/// server omits them until processing begins; zero is a valid observed value
/// and is never used as a stand-in for "unknown".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Server-assigned opaque identifier. Some endpoints send it as `id`.
    #[serde(alias = "id")]
    pub job_id: String,
    pub status: JobStatus,
    pub file_name: String,
    pub product: String,
    #[serde(default)]
    pub total_rows: Option<u64>,
    #[serde(default)]
    pub processed_rows: Option<u64>,
    #[serde(default)]
    pub excluded_rows: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Set iff the job reached a terminal state.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Present only when the job failed.
    #[serde(default)]
    pub error_message: Option<String>,
}

impl Job {
    /// The job finished successfully and its artifact can be downloaded.
    pub fn is_complete(&self) -> bool {
        self.status == JobStatus::Completed
    }

    /// The job reached the failed terminal state.
    pub fn is_failed(&self) -> bool {
        self.status == JobStatus::Failed
    }

    /// The job is still pending or processing.
    pub fn is_processing(&self) -> bool {
        matches!(self.status, JobStatus::Pending | JobStatus::Processing)
    }

    /// Processed/total row counts, once the server has reported both.
    /// `None` while either counter is still unknown.
    pub fn progress(&self) -> Option<(u64, u64)> {
        Some((self.processed_rows?, self.total_rows?))
    }
}
