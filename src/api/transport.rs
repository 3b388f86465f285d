use std::time::Duration;

use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::Envelope;
use crate::error::CredGuardError;

/// Executes authenticated HTTP calls against the CredGuard API.
///
/// One instance is shared by every resource of a client. It owns the
/// connection pool, attaches the bearer token to each request and enforces
/// the per-request timeout. It never retries: retry decisions belong to the
/// caller, where idempotence of the operation is known.
pub struct Transport {
    api_key: String,
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl Transport {
    pub(crate) fn new(api_key: String, base_url: String, timeout: Duration) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("failed to build HTTP client");
        Self {
            api_key,
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// GET a JSON endpoint and unwrap the `{result: {data}}` envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CredGuardError> {
        self.execute(Method::GET, path, None::<&()>).await
    }

    /// POST a JSON body and unwrap the `{result: {data}}` envelope.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, CredGuardError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.execute(Method::POST, path, Some(body)).await
    }

    async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, CredGuardError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let mut request = self
            .http
            .request(method, format!("{}{path}", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CredGuardError::from_transport(e, self.timeout))?;

        let status = response.status();
        let retry_after = parse_retry_after(&response);
        let text = response
            .text()
            .await
            .map_err(|e| CredGuardError::from_transport(e, self.timeout))?;

        if !status.is_success() {
            return Err(CredGuardError::from_status(
                status.as_u16(),
                &text,
                retry_after,
            ));
        }

        let envelope: Envelope<T> = serde_json::from_str(&text)
            .map_err(|e| CredGuardError::MalformedResponse(e.to_string()))?;
        Ok(envelope.result.data)
    }

    /// GET an endpoint that returns raw bytes on success (artifact download).
    /// Failures still arrive as the JSON error envelope and are classified
    /// the same way as JSON endpoints.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, CredGuardError> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| CredGuardError::from_transport(e, self.timeout))?;

        let status = response.status();
        let retry_after = parse_retry_after(&response);
        if !status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| CredGuardError::from_transport(e, self.timeout))?;
            return Err(CredGuardError::from_status(
                status.as_u16(),
                &text,
                retry_after,
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CredGuardError::from_transport(e, self.timeout))?;
        Ok(bytes.to_vec())
    }
}

/// Extract the `Retry-After` header in milliseconds, when present and numeric.
fn parse_retry_after(response: &reqwest::Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .map(|secs| secs * 1000)
}
