//! Snapshot 6: CRUD over an in-memory list

use super::created;
use crate::{
    errors::{HttpError, HttpResult},
    request::{ApiJson, ApiPath},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use userlab_core::{validate_name, NameRequest, User, NAME_REQUIRED};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api6/users", get(list_users).post(create_user))
        .route(
            "/api6/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

async fn list_users(State(state): State<AppState>) -> HttpResult<Json<Vec<User>>> {
    Ok(Json(state.crud_users.list_all()?))
}

async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> HttpResult<Json<User>> {
    state
        .crud_users
        .get_by_id(id)?
        .map(Json)
        .ok_or_else(|| HttpError::not_found(format!("user {}", id)))
}

async fn create_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NameRequest>,
) -> HttpResult<Response> {
    // Blank names answer with the global {Error, Message} body, not the /api4 envelope
    let name = validate_name(request.name(), NAME_REQUIRED)?;
    let user = state.crud_users.create(name)?;
    Ok(created(format!("/api6/users/{}", user.id), user))
}

async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<NameRequest>,
) -> HttpResult<StatusCode> {
    // The store reports an unknown id before it looks at the name
    state
        .crud_users
        .update(id, request.name().unwrap_or_default())?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> HttpResult<StatusCode> {
    state.crud_users.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
