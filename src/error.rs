#![allow(missing_docs)]
//! Error types for the Kalshi plugin

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KalshiErrorCode {
    InvalidArgument,
    ServiceUnavailable,
    RemoteRequestFailure,
    ConfigError,
}

impl fmt::Display for KalshiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::RemoteRequestFailure => "REMOTE_REQUEST_FAILURE",
            Self::ConfigError => "CONFIG_ERROR",
        };
        write!(f, "{s}")
    }
}

#[derive(Error, Debug)]
pub struct KalshiError {
    pub code: KalshiErrorCode,
    pub message: String,
    /// HTTP status of the remote response, when one was received.
    pub status: Option<u16>,
    #[source]
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl KalshiError {
    pub fn new(code: KalshiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            cause: None,
        }
    }

    pub fn with_cause(
        code: KalshiErrorCode,
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            cause: Some(Box::new(cause)),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl fmt::Display for KalshiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl KalshiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(KalshiErrorCode::InvalidArgument, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(KalshiErrorCode::ServiceUnavailable, message)
    }

    pub fn remote_failure(message: impl Into<String>) -> Self {
        Self::new(KalshiErrorCode::RemoteRequestFailure, message)
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::new(KalshiErrorCode::ConfigError, message)
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.code == KalshiErrorCode::InvalidArgument
    }

    #[must_use]
    pub fn is_remote_failure(&self) -> bool {
        self.code == KalshiErrorCode::RemoteRequestFailure
    }
}

pub type Result<T> = std::result::Result<T, KalshiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_code() {
        let err = KalshiError::invalid_argument("[kalshi_getEvent] ticker is required");
        assert_eq!(
            err.to_string(),
            "[INVALID_ARGUMENT] [kalshi_getEvent] ticker is required"
        );
    }

    #[test]
    fn test_with_status() {
        let err = KalshiError::remote_failure("Kalshi get series failed").with_status(404);
        assert!(err.is_remote_failure());
        assert_eq!(err.status, Some(404));
        assert!(err.cause.is_none());
    }
}
