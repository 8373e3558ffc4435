/*
[INPUT]:  Error sources (transport, HTTP status, JSON decoding, URL building)
[OUTPUT]: Structured error types with status and body context
[POS]:    Error handling layer - unified error type for the HTTP client
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for Switcheo API calls
#[derive(Error, Debug)]
pub enum SwitcheoError {
    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// Response body is not the expected JSON
    #[error("Failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Request never produced a response (connect, timeout, TLS, IO)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Effective base URL plus path is not a valid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Request parameter rejected before sending
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Well-formed response missing expected content
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl SwitcheoError {
    /// HTTP status of a failed response, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SwitcheoError::Http { status, .. } => Some(*status),
            SwitcheoError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Raw body of a failed or undecodable response
    pub fn body(&self) -> Option<&str> {
        match self {
            SwitcheoError::Http { body, .. } | SwitcheoError::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|status| status.is_client_error())
    }

    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|status| status.is_server_error())
    }

    /// Check if the request hit the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, SwitcheoError::Transport(err) if err.is_timeout())
    }
}

/// Result type alias for Switcheo operations
pub type Result<T> = std::result::Result<T, SwitcheoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_status() {
        let err = SwitcheoError::Http {
            status: StatusCode::NOT_FOUND,
            body: "not found".to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.body(), Some("not found"));
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
        assert!(!err.is_timeout());
        assert_eq!(err.to_string(), "HTTP 404 Not Found: not found");
    }

    #[test]
    fn test_decode_error_keeps_body() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = SwitcheoError::Decode {
            source,
            body: "<html>".to_string(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), Some("<html>"));
        assert!(err.to_string().starts_with("Failed to decode response body"));
    }

    #[test]
    fn test_parameter_error_has_no_status() {
        let err = SwitcheoError::InvalidParameter("limit".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_client_error());
    }
}
