use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::AppState;
use crate::domains::transcript::service::{self, SaveMessageCommand};

use super::types::{ListMessagesQuery, ListMessagesResponse, SaveMessageRequest, SaveMessageResponse};

#[tracing::instrument(skip(state, payload))]
pub(crate) async fn save_message(
    State(state): State<AppState>,
    Json(payload): Json<SaveMessageRequest>,
) -> impl IntoResponse {
    let command = SaveMessageCommand {
        role: payload.role,
        content: payload.content,
    };
    match service::save_message(&state, command).await {
        Ok(id) => (StatusCode::CREATED, Json(SaveMessageResponse { id })).into_response(),
        Err(err) => err.into_response(),
    }
}

#[tracing::instrument(skip(state, params))]
pub(crate) async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<ListMessagesQuery>,
) -> impl IntoResponse {
    match service::list_messages(&state, params.role.as_deref()).await {
        Ok(messages) => (StatusCode::OK, Json(ListMessagesResponse { messages })).into_response(),
        Err(err) => err.into_response(),
    }
}

#[tracing::instrument(skip(state))]
pub(crate) async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    match service::transcript_stats(&state).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(err) => err.into_response(),
    }
}
