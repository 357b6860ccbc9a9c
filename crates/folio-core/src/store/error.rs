use std::fmt;

use serde_json::Value;

/// Categories of store errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// HTTP status error (4xx, 5xx)
    HttpStatus,
    /// Connection refused, DNS failure, broken body
    Network,
    /// Connection timeout or request timeout
    Timeout,
    /// Response body was not the expected JSON
    Parse,
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreErrorKind::HttpStatus => write!(f, "http_status"),
            StoreErrorKind::Network => write!(f, "network"),
            StoreErrorKind::Timeout => write!(f, "timeout"),
            StoreErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured error from the gallery store.
#[derive(Debug, Clone)]
pub struct StoreError {
    pub kind: StoreErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl StoreError {
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error, lifting PostgREST's `message` field
    /// into the summary when the body carries one.
    pub fn http_status(status: u16, body: &str) -> Self {
        if body.is_empty() {
            return Self::new(StoreErrorKind::HttpStatus, format!("HTTP {status}"));
        }
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| json.get("message")?.as_str().map(ToString::to_string))
            .map_or_else(|| format!("HTTP {status}"), |msg| format!("HTTP {status}: {msg}"));
        Self {
            kind: StoreErrorKind::HttpStatus,
            message,
            details: Some(body.to_string()),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Parse, message)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StoreError {}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

pub(super) fn classify_reqwest_error(e: &reqwest::Error) -> StoreError {
    if e.is_timeout() {
        StoreError::new(StoreErrorKind::Timeout, format!("Request timed out: {e}"))
    } else if e.is_connect() {
        StoreError::new(StoreErrorKind::Network, format!("Connection failed: {e}"))
    } else if e.is_decode() {
        StoreError::parse(format!("Invalid response body: {e}"))
    } else {
        StoreError::new(StoreErrorKind::Network, format!("Network error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_extracts_postgrest_message() {
        let body = r#"{"code":"42P01","message":"relation \"gallery_images\" does not exist"}"#;
        let err = StoreError::http_status(404, body);
        assert_eq!(err.kind, StoreErrorKind::HttpStatus);
        assert_eq!(
            err.message,
            "HTTP 404: relation \"gallery_images\" does not exist"
        );
        assert_eq!(err.details.as_deref(), Some(body));
    }

    #[test]
    fn test_http_status_plain_body() {
        let err = StoreError::http_status(502, "Bad Gateway");
        assert_eq!(err.message, "HTTP 502");
        assert_eq!(err.details.as_deref(), Some("Bad Gateway"));

        let empty = StoreError::http_status(500, "");
        assert!(empty.details.is_none());
    }
}
