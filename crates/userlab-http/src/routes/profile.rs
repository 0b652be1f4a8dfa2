//! Snapshot 2: a fixed user serialized as JSON

use crate::state::AppState;
use axum::{routing::get, Json, Router};
use userlab_core::UserProfile;

pub fn router() -> Router<AppState> {
    Router::new().route("/api2/user", get(sample_user))
}

async fn sample_user() -> Json<UserProfile> {
    Json(UserProfile::sample())
}
