//! Snapshot 10: paginated listing over the service repository

use crate::{errors::HttpResult, request::ApiQuery, state::AppState};
use axum::{extract::State, routing::get, Json, Router};
use userlab_core::{paginate, Page, PaginationParams, User};

pub fn router() -> Router<AppState> {
    Router::new().route("/api10/users", get(list_page))
}

async fn list_page(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> HttpResult<Json<Page<User>>> {
    params.validate()?;
    let users = state.user_service.list_all()?;
    Ok(Json(paginate(users, &params)))
}
