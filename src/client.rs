use std::time::Duration;

use crate::api::Transport;
use crate::batch::BatchResource;
use crate::resources::{BureauResource, DriftResource, ModelsResource};

const BASE_URL: &str = "https://credguard.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Entry point of the SDK: holds the credential and the shared transport,
/// and hands out per-area resources that borrow it.
///
/// The client keeps no mutable state — only the immutable bearer token and
/// transport configuration — so one instance may be shared freely across
/// tasks, and concurrent submits/polls against the same service are safe.
pub struct CredGuardClient {
    transport: Transport,
}

impl CredGuardClient {
    /// Create a client against the production API with the default 30s
    /// request timeout. `api_key` is the JWT bearer token.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self::with_options(api_key, base_url, DEFAULT_TIMEOUT)
    }

    /// Full-control constructor: custom base URL and per-request timeout.
    pub fn with_options(api_key: String, base_url: String, timeout: Duration) -> Self {
        Self {
            transport: Transport::new(api_key, base_url, timeout),
        }
    }

    /// Batch upload and job lifecycle operations.
    pub fn batch(&self) -> BatchResource<'_> {
        BatchResource::new(&self.transport)
    }

    /// ML model catalog.
    pub fn models(&self) -> ModelsResource<'_> {
        ModelsResource::new(&self.transport)
    }

    /// Drift detection.
    pub fn drift(&self) -> DriftResource<'_> {
        DriftResource::new(&self.transport)
    }

    /// Bureau de crédito configuration and metrics.
    pub fn bureau(&self) -> BureauResource<'_> {
        BureauResource::new(&self.transport)
    }
}
