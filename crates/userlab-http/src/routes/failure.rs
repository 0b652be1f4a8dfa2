//! Snapshot 9: a route that always fails, to exercise the global error handler

use crate::{
    errors::{HttpError, HttpResult},
    state::AppState,
};
use axum::{http::StatusCode, routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/api9/error", get(always_fails))
}

async fn always_fails() -> HttpResult<StatusCode> {
    Err(HttpError::internal("Something went wrong!"))
}
