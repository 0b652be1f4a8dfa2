//! Global error handling
//!
//! Two layers wrap every route:
//! - a panic catcher that turns a panicking handler into the 500 error body
//! - [`handle_errors`], which logs every 4xx/5xx response with the cause the
//!   [`HttpError`] attached to it
//!
//! Handlers themselves return [`HttpError`], whose `IntoResponse` writes the
//! `{"Error", "Message"}` body, so this module only has to deal with what
//! escaped them.

use crate::errors::{ErrorReport, HttpError};
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, warn};

/// Wrap a router with the panic catcher and the error logging middleware
pub fn with_error_handling<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(handle_errors))
}

/// Log failed requests. Server errors log at `error`, client errors at `warn`.
pub async fn handle_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let report = response.extensions().get::<ErrorReport>();
    let code = report.map_or("UNHANDLED", |r| r.code);
    let message = report.map_or("", |r| r.message.as_str());

    if status.is_server_error() {
        error!(%method, %path, status = status.as_u16(), code, message, "request failed");
    } else {
        warn!(%method, %path, status = status.as_u16(), code, message, "request rejected");
    }

    response
}

/// Build the 500 body from a panic payload
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown panic".to_string()
    };

    HttpError::internal(message).into_response()
}
