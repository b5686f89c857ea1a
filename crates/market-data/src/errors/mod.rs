//! Error types and retry classification for the livestock market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum for every failure of the outbound call pipeline
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::FailureKind;

/// Errors that can occur while calling the upstream price API.
///
/// Each variant is classified into a [`RetryClass`] via the
/// [`retry_class`](Self::retry_class) method, which determines how the retry
/// policy handles the error.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request never produced an HTTP response (DNS, connect, timeout,
    /// or the connection dropped while reading the body).
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the underlying failure
        message: String,
        /// Whether the failure was a connect or response timeout
        timed_out: bool,
    },

    /// The upstream answered with a 4xx (or another non-success, non-5xx) status.
    #[error("Client error: HTTP {status}")]
    ClientError {
        /// The numeric HTTP status code
        status: u16,
        /// The raw error body, for diagnostics
        body: String,
    },

    /// The upstream answered with a 5xx status.
    #[error("Server error: HTTP {status}")]
    ServerError {
        /// The numeric HTTP status code
        status: u16,
        /// The raw error body, for diagnostics
        body: String,
    },

    /// The response body does not match the expected envelope shape,
    /// or exceeds the in-memory body limit.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl MarketDataError {
    /// Classifies a non-success HTTP status into an error.
    ///
    /// Returns `None` for 2xx statuses.
    pub fn from_status(status: StatusCode, body: String) -> Option<Self> {
        if status.is_success() {
            None
        } else if status.is_server_error() {
            Some(Self::ServerError {
                status: status.as_u16(),
                body,
            })
        } else {
            Some(Self::ClientError {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Returns the retry classification for this error.
    ///
    /// Only server errors are retried; everything else is terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use livestock_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::ServerError { status: 503, body: String::new() };
    /// assert_eq!(error.retry_class(), RetryClass::AfterDelay);
    ///
    /// let error = MarketDataError::ClientError { status: 400, body: String::new() };
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::ServerError { .. } => RetryClass::AfterDelay,
            Self::Transport { .. } | Self::ClientError { .. } | Self::MalformedResponse(_) => {
                RetryClass::Never
            }
        }
    }

    /// The coarse failure kind reported to callers once the error is absorbed.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Transport { .. } => FailureKind::Transport,
            Self::ClientError { status, .. } => FailureKind::Client(*status),
            Self::ServerError { status, .. } => FailureKind::Server(*status),
            Self::MalformedResponse(_) => FailureKind::MalformedResponse,
        }
    }
}

impl From<reqwest::Error> for MarketDataError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport {
            timed_out: e.is_timeout(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_retries_after_delay() {
        let error = MarketDataError::ServerError {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::AfterDelay);
    }

    #[test]
    fn test_client_error_never_retries() {
        let error = MarketDataError::ClientError {
            status: 404,
            body: String::new(),
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_transport_error_never_retries() {
        let error = MarketDataError::Transport {
            message: "connection refused".to_string(),
            timed_out: false,
        };
        assert_eq!(error.retry_class(), RetryClass::Never);

        let error = MarketDataError::Transport {
            message: "operation timed out".to_string(),
            timed_out: true,
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_malformed_response_never_retries() {
        let error = MarketDataError::MalformedResponse("expected value".to_string());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_from_status_classification() {
        assert!(MarketDataError::from_status(StatusCode::OK, String::new()).is_none());

        let error = MarketDataError::from_status(StatusCode::BAD_GATEWAY, String::new());
        assert!(matches!(
            error,
            Some(MarketDataError::ServerError { status: 502, .. })
        ));

        let error = MarketDataError::from_status(StatusCode::UNAUTHORIZED, "denied".to_string());
        assert!(matches!(
            error,
            Some(MarketDataError::ClientError { status: 401, ref body }) if body == "denied"
        ));
    }

    #[test]
    fn test_failure_kind_mapping() {
        let error = MarketDataError::ServerError {
            status: 503,
            body: String::new(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Server(503));

        let error = MarketDataError::ClientError {
            status: 400,
            body: String::new(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Client(400));

        let error = MarketDataError::MalformedResponse("eof".to_string());
        assert_eq!(error.failure_kind(), FailureKind::MalformedResponse);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::ServerError {
            status: 503,
            body: String::new(),
        };
        assert_eq!(format!("{}", error), "Server error: HTTP 503");

        let error = MarketDataError::Transport {
            message: "dns error".to_string(),
            timed_out: false,
        };
        assert_eq!(format!("{}", error), "Transport error: dns error");

        let error = MarketDataError::MalformedResponse("trailing characters".to_string());
        assert_eq!(
            format!("{}", error),
            "Malformed response: trailing characters"
        );
    }
}
