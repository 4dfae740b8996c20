//! `GET /search`: the string-concatenating lookup, reachable over HTTP.
//!
//! The query-string fragment is pasted into the SQL text and store errors are
//! echoed back verbatim. Both behaviours are intentional; this route exists to
//! demonstrate query injection and can be unmounted via
//! `search.vulnerable_endpoint`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::AppState;
use crate::domains::search::service;

use super::{SearchQuery, SearchResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search))
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    match service::search_users_unchecked(&state, &params.q).await {
        Ok(rows) => (StatusCode::OK, Json(SearchResponse::from_records(rows))).into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
    }
}
