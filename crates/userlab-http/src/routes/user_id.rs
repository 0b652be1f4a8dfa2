//! Snapshot 5: route id parsing with a distinct message per failure

use crate::{request::ApiPath, state::AppState};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use userlab_core::{parse_user_id, ErrorResponse, UserIdError, UserIdResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api5/user_id", get(missing_id))
        .route("/api5/user_id/", get(missing_id))
        .route("/api5/user_id/:id", get(user_by_id))
}

async fn missing_id() -> Response {
    rejected(UserIdError::Missing)
}

async fn user_by_id(ApiPath(raw): ApiPath<String>) -> Response {
    match parse_user_id(Some(&raw)) {
        Ok(id) => Json(UserIdResponse::retrieved(id)).into_response(),
        Err(err) => rejected(err),
    }
}

fn rejected(err: UserIdError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(err.to_string())),
    )
        .into_response()
}
