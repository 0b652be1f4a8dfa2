//! Snapshot 3: greet by the name in the request body

use crate::{request::ApiJson, state::AppState};
use axum::{routing::post, Router};
use userlab_core::NameRequest;

pub fn router() -> Router<AppState> {
    Router::new().route("/api3/greet", post(greet))
}

async fn greet(ApiJson(request): ApiJson<NameRequest>) -> String {
    format!("Hello, {}!", request.name().unwrap_or_default())
}
