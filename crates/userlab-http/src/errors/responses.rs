//! HTTP error response formatting

use super::HttpError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Body written by the global error handler: `{"Error": ..., "Message": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalErrorBody {
    #[serde(rename = "Error")]
    pub error: String,
    #[serde(rename = "Message")]
    pub message: String,
}

impl GlobalErrorBody {
    /// Body labelled with the reason phrase of `status`
    pub fn for_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: "Bad Request".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: "Internal Server Error".to_string(),
            message: message.into(),
        }
    }
}

/// Attached to error responses so the error handling middleware can log the cause
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
}

impl HttpError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            HttpError::NotFound { .. } => StatusCode::NOT_FOUND,
            HttpError::Unprocessable { status, .. } => *status,
            HttpError::StartupFailed { .. }
            | HttpError::ConfigError { .. }
            | HttpError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let report = ErrorReport {
            code: self.error_code(),
            message: self.to_string(),
        };

        let mut response = match self {
            // Unknown ids answer with a bare 404
            HttpError::NotFound { .. } => status.into_response(),
            HttpError::BadRequest { message } => {
                (status, Json(GlobalErrorBody::bad_request(message))).into_response()
            }
            HttpError::Unprocessable { message, .. } => {
                (status, Json(GlobalErrorBody::for_status(status, message))).into_response()
            }
            other => (status, Json(GlobalErrorBody::internal(other.to_string()))).into_response(),
        };

        response.extensions_mut().insert(report);
        response
    }
}
