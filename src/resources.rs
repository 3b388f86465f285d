//! Thin read-side resources: models, drift detection and bureau config.
//!
//! Each resource borrows the client's shared [`Transport`] and performs a
//! single envelope-decoded call per operation. They carry no state of their
//! own and follow the same error classification as the batch operations.

use crate::api::types::{DriftDetection, DriftRequest, ModelInfo};
use crate::api::Transport;
use crate::error::CredGuardError;

/// ML model catalog operations.
pub struct ModelsResource<'a> {
    transport: &'a Transport,
}

impl<'a> ModelsResource<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List the models available for a product code.
    pub async fn list(&self, product: &str) -> Result<Vec<ModelInfo>, CredGuardError> {
        self.transport
            .get(&format!("/api/trpc/models.list?product={product}"))
            .await
    }
}

/// Drift detection over a processed job.
pub struct DriftResource<'a> {
    transport: &'a Transport,
}

impl<'a> DriftResource<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Run drift detection for a model against the rows of a processed job.
    pub async fn detect(
        &self,
        model_id: u64,
        job_id: &str,
    ) -> Result<DriftDetection, CredGuardError> {
        let request = DriftRequest {
            model_id,
            job_id: job_id.to_string(),
        };
        self.transport.post("/api/trpc/drift.detect", &request).await
    }
}

/// Credit bureau configuration and usage metrics.
///
/// The bureau payloads are returned as raw JSON: their schema is owned by
/// the server and changes independently of this client.
pub struct BureauResource<'a> {
    transport: &'a Transport,
}

impl<'a> BureauResource<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn get_config(&self) -> Result<serde_json::Value, CredGuardError> {
        self.transport.get("/api/trpc/bureau.getConfig").await
    }

    pub async fn get_metrics(&self) -> Result<serde_json::Value, CredGuardError> {
        self.transport.get("/api/trpc/bureau.getMetrics").await
    }
}
