//! Snapshot 7: substring search on the name

use crate::{errors::HttpResult, request::ApiQuery, state::AppState};
use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;
use userlab_core::{filter_by_name, User};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api7/users/search", get(search_users))
}

async fn search_users(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> HttpResult<Json<Vec<User>>> {
    let users = state.search_users.list_all()?;
    Ok(Json(filter_by_name(users, query.name.as_deref())))
}
