//! Error types for dwell-http
//!
//! Deliberately thin: this crate instruments the timing of the success path
//! and passes the underlying client's failures through untouched. All public
//! APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The error type for all public APIs in this crate
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connect, timeout, body decode) from reqwest
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The request URL (or base URL joined with a path) did not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Get the HTTP status code if this is a status error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for dwell-http
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::http_status(503, "");
        assert_eq!(err.to_string(), "HTTP 503: ");
    }

    #[test]
    fn test_status_code() {
        assert_eq!(Error::http_status(429, "slow down").status_code(), Some(429));

        let err: Error = "not a url".parse::<url::Url>().unwrap_err().into();
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_invalid_url_from() {
        let parse_err = url::Url::parse("::no-scheme::").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(err.to_string().starts_with("Invalid URL:"));
    }
}
