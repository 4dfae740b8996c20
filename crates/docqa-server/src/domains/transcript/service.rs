use docqa_core::{clean_answer, compute_stats, ChatMessage, Role, TranscriptStats};
use docqa_db::classify;
use docqa_db::repo::MessageRepo;

use crate::app::AppState;
use crate::domains::errors::ServiceError;

pub struct SaveMessageCommand {
    pub role: String,
    pub content: String,
}

pub type TranscriptError = ServiceError;

fn db_error(event: &'static str, err: sqlx_core::Error) -> TranscriptError {
    let err = classify(err);
    tracing::error!(event = event, error = %err);
    err.into()
}

pub async fn save_message(state: &AppState, cmd: SaveMessageCommand) -> Result<i64, TranscriptError> {
    let role = cmd.role.parse::<Role>().map_err(|err| {
        tracing::warn!(event = "message_rejected", reason = "invalid_role", error = %err);
        TranscriptError::BadRequest("invalid_role")
    })?;
    let content = match role {
        Role::Assistant => clean_answer(&cmd.content),
        Role::User | Role::System => cmd.content.trim().to_string(),
    };
    if content.is_empty() {
        tracing::warn!(event = "message_rejected", reason = "empty_content", role = %role);
        return Err(TranscriptError::BadRequest("empty_content"));
    }

    let id = MessageRepo::new(&state.db)
        .create(role, &content)
        .await
        .map_err(|err| db_error("message_save_failed", err))?;
    tracing::info!(event = "message_saved", id, role = %role);
    Ok(id)
}

pub async fn list_messages(
    state: &AppState,
    role: Option<&str>,
) -> Result<Vec<ChatMessage>, TranscriptError> {
    let repo = MessageRepo::new(&state.db);
    let result = match role {
        Some(value) => {
            let role = value
                .parse::<Role>()
                .map_err(|_| TranscriptError::BadRequest("invalid_role"))?;
            repo.list_by_role(role).await
        }
        None => repo.list_all().await,
    };
    result.map_err(|err| db_error("messages_list_failed", err))
}

pub async fn transcript_stats(state: &AppState) -> Result<TranscriptStats, TranscriptError> {
    let messages = MessageRepo::new(&state.db)
        .list_all()
        .await
        .map_err(|err| db_error("transcript_stats_failed", err))?;
    let limits = &state.config.transcript;
    Ok(compute_stats(
        &messages,
        limits.top_questions,
        limits.top_words,
    ))
}
