use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default retry window advertised by the CredGuard rate limiter when the
/// response carries no `Retry-After` header.
const DEFAULT_RETRY_AFTER_MS: u64 = 60_000;

/// Errors surfaced by the CredGuard client.
///
/// API errors ([`Authentication`](CredGuardError::Authentication),
/// [`RateLimited`](CredGuardError::RateLimited), [`Api`](CredGuardError::Api))
/// are responses the server actually produced. Transport failures
/// ([`Timeout`](CredGuardError::Timeout), [`Connection`](CredGuardError::Connection),
/// [`MalformedResponse`](CredGuardError::MalformedResponse)) mean the request
/// may never have reached or been processed by the server, which matters when
/// a caller decides whether retrying is safe. Nothing is retried inside the
/// client itself.
#[derive(Debug, Error)]
pub enum CredGuardError {
    /// The server returned HTTP 401 — token inválido ou expirado.
    #[error("authentication failed: token inválido ou expirado")]
    Authentication,

    /// The server returned HTTP 429. `retry_after_ms` is taken from the
    /// `Retry-After` header when present, otherwise the service's 60s window.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Any other HTTP status ≥ 400, with the message extracted from the
    /// `{error: {message}}` envelope when the body carries one.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    /// Low-level connection failure (DNS, refused, reset).
    #[error("connection error: {0}")]
    Connection(String),

    /// A 2xx response whose body could not be decoded as the expected
    /// envelope. Unrecognized job status strings land here too.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Local input problem, e.g. an unreadable upload file.
    #[error("validation error: {0}")]
    Validation(String),

    /// The job reached the `failed` terminal state while waiting.
    #[error("job {job_id} failed: {message}")]
    JobFailed { job_id: String, message: String },

    /// Client-side deadline exceeded while polling a job. Distinct from
    /// [`Timeout`](CredGuardError::Timeout), which is a single-request limit.
    #[error("timed out after {elapsed_ms}ms waiting for job {job_id}")]
    WaitTimeout { job_id: String, elapsed_ms: u64 },
}

/// Wire shape of the CredGuard error envelope: `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl CredGuardError {
    /// Classify a non-2xx HTTP response into the error taxonomy.
    ///
    /// `retry_after` is the parsed `Retry-After` header in milliseconds, if
    /// the response carried one. The classifier never sleeps; backing off on
    /// 429 is the caller's decision.
    pub(crate) fn from_status(status: u16, body: &str, retry_after: Option<u64>) -> Self {
        match status {
            401 => CredGuardError::Authentication,
            429 => CredGuardError::RateLimited {
                retry_after_ms: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_MS),
            },
            _ => {
                let message = serde_json::from_str::<ErrorEnvelope>(body)
                    .map(|env| env.error.message)
                    .unwrap_or_else(|_| format!("erro desconhecido (status {status})"));
                CredGuardError::Api { status, message }
            }
        }
    }

    /// Classify a reqwest failure that prevented a response from arriving.
    pub(crate) fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            CredGuardError::Timeout {
                elapsed_ms: timeout.as_millis() as u64,
            }
        } else if err.is_decode() {
            CredGuardError::MalformedResponse(err.to_string())
        } else {
            CredGuardError::Connection(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_is_authentication() {
        let err = CredGuardError::from_status(401, "", None);
        assert!(matches!(err, CredGuardError::Authentication));
    }

    #[test]
    fn status_429_uses_retry_after_header() {
        let err = CredGuardError::from_status(429, "", Some(5_000));
        assert!(matches!(
            err,
            CredGuardError::RateLimited {
                retry_after_ms: 5_000
            }
        ));
    }

    #[test]
    fn status_429_defaults_to_service_window() {
        let err = CredGuardError::from_status(429, "", None);
        assert!(matches!(
            err,
            CredGuardError::RateLimited {
                retry_after_ms: 60_000
            }
        ));
    }

    #[test]
    fn api_error_extracts_envelope_message() {
        let body = r#"{"error": {"message": "Job não encontrado"}}"#;
        let err = CredGuardError::from_status(404, body, None);
        match err {
            CredGuardError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Job não encontrado");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_generic_message() {
        let err = CredGuardError::from_status(500, "<html>oops</html>", None);
        match err {
            CredGuardError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("500"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn api_error_display() {
        let err = CredGuardError::Api {
            status: 403,
            message: "acesso negado".into(),
        };
        assert_eq!(err.to_string(), "API error (status 403): acesso negado");
    }

    #[test]
    fn job_failed_display_carries_server_message() {
        let err = CredGuardError::JobFailed {
            job_id: "job-42".into(),
            message: "CSV inválido na linha 3".into(),
        };
        assert_eq!(err.to_string(), "job job-42 failed: CSV inválido na linha 3");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CredGuardError>();
    }
}
