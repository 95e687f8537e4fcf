//! Error types for the GroupMe client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! API failures (a non-200/304 envelope code) are kept distinct from
//! transport and parse failures: the former end a history traversal with
//! the service's own status and messages, the latter are whatever the
//! underlying call produced, propagated unchanged.

use thiserror::Error;

/// The main error type for the GroupMe client
#[derive(Error, Debug)]
pub enum Error {
    /// The service answered with an envelope code other than 200 or 304.
    #[error("GroupMe API returned {status}: {errors:?}")]
    Api {
        /// Status code from the envelope's `meta.code`
        status: u16,
        /// Error messages from the envelope's `meta.errors`
        errors: Vec<String>,
    },

    /// Transport-level failure (connect, timeout, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a valid envelope
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A base URL or path could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The envelope violated its own shape (e.g. a 200 with no payload)
    #[error("Failed to decode response: {message}")]
    Decode {
        /// What was wrong with the envelope
        message: String,
    },
}

impl Error {
    /// Create an API error from an envelope's meta block
    pub fn api(status: u16, errors: Vec<String>) -> Self {
        Self::Api { status, errors }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// True for the failure class raised from envelope classification,
    /// as opposed to transport or parse failures.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

/// Result type alias for the GroupMe client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::api(500, vec!["rate limited".to_string()]);
        assert_eq!(
            err.to_string(),
            "GroupMe API returned 500: [\"rate limited\"]"
        );

        let err = Error::decode("missing payload");
        assert_eq!(err.to_string(), "Failed to decode response: missing payload");
    }

    #[test]
    fn test_is_api() {
        assert!(Error::api(404, vec![]).is_api());
        assert!(!Error::decode("bad").is_api());
    }
}
