//! Snapshot 8: the same user routes going through an injected repository

use super::created;
use crate::{
    errors::{HttpError, HttpResult},
    request::{ApiJson, ApiPath},
    state::AppState,
};
use axum::{extract::State, response::Response, routing::get, Json, Router};
use tracing::debug;
use userlab_core::{validate_name, CreateUserRequest, User};

const NAME_REQUIRED_SHORT: &str = "Name required";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api8/users", get(list_users).post(create_user))
        .route("/api8/users/:id", get(get_user))
}

async fn list_users(State(state): State<AppState>) -> HttpResult<Json<Vec<User>>> {
    let users = state.user_service.list_all()?;
    debug!(count = users.len(), "returning users from service");
    Ok(Json(users))
}

async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> HttpResult<Json<User>> {
    state
        .user_service
        .get_by_id(id)?
        .map(Json)
        .ok_or_else(|| HttpError::not_found(format!("user {}", id)))
}

async fn create_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> HttpResult<Response> {
    // Same global error body as /api6
    let name = validate_name(Some(request.name.as_str()), NAME_REQUIRED_SHORT)?;
    let user = state.user_service.create(name)?;
    Ok(created(format!("/api8/users/{}", user.id), user))
}
