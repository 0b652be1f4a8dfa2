//! Snapshot 1: plain text hello

use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/api1/hello", get(hello))
}

async fn hello() -> &'static str {
    "Hello, World!"
}
