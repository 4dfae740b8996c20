use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::AppState;
use crate::domains::search::service;

use super::super::{SearchQuery, SearchResponse};

#[tracing::instrument(skip(state, params))]
pub(crate) async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    match service::search_users(&state, &params.q).await {
        Ok(rows) => (StatusCode::OK, Json(SearchResponse::from_records(rows))).into_response(),
        Err(err) => err.into_response(),
    }
}
