//! Complaint Service Client
//!
//! HTTP bindings to the REST endpoints, organized by resource.

mod complaints;
mod stats;

use gloo_net::http::Response;
use thiserror::Error;

// Re-export all public items
pub use complaints::*;
pub use stats::*;

/// Result type alias for service calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a service call can end in
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// Body was not the expected JSON
    #[error("malformed response: {0}")]
    Decode(String),

    /// Payload could not be serialized
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Join the configured base URL and an endpoint path
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn ensure_success(resp: Response) -> ApiResult<Response> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status { status: resp.status(), status_text: resp.status_text() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        assert_eq!(endpoint("http://localhost:8000", "stats"), "http://localhost:8000/stats");
        assert_eq!(endpoint("http://svc/", "/complaints"), "http://svc/complaints");
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status { status: 502, status_text: "Bad Gateway".to_string() };
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway");
        assert_eq!(ApiError::Network("Failed to fetch".to_string()).to_string(), "network error: Failed to fetch");
    }
}
