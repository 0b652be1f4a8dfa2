//! Route table
//!
//! Each tutorial snapshot registers its handlers under its own `/apiN`
//! namespace; [`api_router`] merges them into one table.

pub mod crud;
pub mod failure;
pub mod greet;
pub mod hello;
pub mod paging;
pub mod profile;
pub mod search;
pub mod service;
pub mod user_id;
pub mod validate;

use crate::state::AppState;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;

/// Every snapshot's routes in one router
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(hello::router())
        .merge(profile::router())
        .merge(greet::router())
        .merge(validate::router())
        .merge(user_id::router())
        .merge(crud::router())
        .merge(search::router())
        .merge(service::router())
        .merge(failure::router())
        .merge(paging::router())
}

/// 201 with a `Location` header pointing at the new resource
pub(crate) fn created<T: Serialize>(location: String, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}
