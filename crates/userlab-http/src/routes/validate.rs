//! Snapshot 4: name validation answered with a status envelope

use crate::{request::ApiJson, state::AppState};
use axum::{http::StatusCode, routing::post, Json, Router};
use userlab_core::{validate_name, ApiEnvelope, NameRequest, NAME_REQUIRED};

pub fn router() -> Router<AppState> {
    Router::new().route("/api4/validate", post(validate))
}

async fn validate(
    ApiJson(request): ApiJson<NameRequest>,
) -> (StatusCode, Json<ApiEnvelope<String>>) {
    match validate_name(request.name(), NAME_REQUIRED) {
        Ok(name) => (
            StatusCode::OK,
            Json(ApiEnvelope::success(
                format!("Hello, {}!", name),
                name.to_string(),
            )),
        ),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(ApiEnvelope::failure(
                StatusCode::BAD_REQUEST.as_u16(),
                err.to_string(),
            )),
        ),
    }
}
