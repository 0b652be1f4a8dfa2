//! HTTP error types
//!
//! Every failure a handler can hit funnels into [`HttpError`], which knows its
//! status code and how to render the global error body.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use thiserror::Error;
use userlab_core::{ConfigError, CoreError};

/// Result type for HTTP operations
pub type HttpResult<T> = Result<T, HttpError>;

/// Everything a request or the server lifecycle can fail with.
///
/// `BadRequest` and `InternalError` display their bare message since that text
/// ends up in the `Message` field of the error body.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("could not start the server: {message}")]
    StartupFailed { message: String },

    #[error("bad configuration: {message}")]
    ConfigError { message: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("{resource} does not exist")]
    NotFound { resource: String },

    /// A request refused before it could be parsed, keeping the status
    /// axum chose (413 for oversized bodies, 415 for a wrong content type)
    #[error("{message}")]
    Unprocessable { status: StatusCode, message: String },

    #[error("{message}")]
    InternalError { message: String },
}

impl HttpError {
    pub fn startup(message: impl Into<String>) -> Self {
        Self::StartupFailed {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn unprocessable(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Unprocessable {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Stable code recorded with every logged error response
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::StartupFailed { .. } => "STARTUP_FAILED",
            Self::ConfigError { .. } => "BAD_CONFIG",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unprocessable { .. } => "UNPROCESSABLE",
            Self::InternalError { .. } => "INTERNAL",
        }
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { message } => HttpError::BadRequest { message },
            CoreError::NotFound { resource } => HttpError::NotFound { resource },
            CoreError::Internal { message } => HttpError::InternalError { message },
        }
    }
}

impl From<ConfigError> for HttpError {
    fn from(err: ConfigError) -> Self {
        HttpError::ConfigError {
            message: err.to_string(),
        }
    }
}

// Socket failures only happen while binding or serving
impl From<std::io::Error> for HttpError {
    fn from(err: std::io::Error) -> Self {
        HttpError::startup(err.to_string())
    }
}

// Extractor rejections are client mistakes: malformed JSON, bad path segments, bad query strings
impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            status @ (StatusCode::PAYLOAD_TOO_LARGE | StatusCode::UNSUPPORTED_MEDIA_TYPE) => {
                HttpError::unprocessable(status, rejection.body_text())
            }
            _ => HttpError::bad_request(rejection.body_text()),
        }
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        HttpError::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(HttpError::bad_request("x").error_code(), "BAD_REQUEST");
        assert_eq!(HttpError::not_found("user 9").error_code(), "NOT_FOUND");
        assert_eq!(HttpError::internal("x").error_code(), "INTERNAL");
        assert_eq!(HttpError::startup("bind").error_code(), "STARTUP_FAILED");
        assert_eq!(HttpError::config("x").error_code(), "BAD_CONFIG");
        assert_eq!(HttpError::not_found("user 9").to_string(), "user 9 does not exist");
    }

    #[test]
    fn test_core_error_conversion() {
        let err = HttpError::from(CoreError::validation("Name is required."));
        assert!(matches!(err, HttpError::BadRequest { ref message } if message == "Name is required."));

        let err = HttpError::from(CoreError::not_found("user 3"));
        assert!(matches!(err, HttpError::NotFound { .. }));

        let err = HttpError::from(CoreError::internal("poisoned"));
        assert!(matches!(err, HttpError::InternalError { .. }));
    }

    #[test]
    fn test_config_error_conversion() {
        let err = HttpError::from(ConfigError::invalid_value("PORT", "x", "a port number"));
        assert!(matches!(err, HttpError::ConfigError { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        let err = HttpError::from(io_error);
        assert!(matches!(err, HttpError::StartupFailed { .. }));
        assert_eq!(err.to_string(), "could not start the server: in use");
    }
}
