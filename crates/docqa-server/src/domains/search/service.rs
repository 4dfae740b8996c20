use docqa_core::UserRecord;
use docqa_db::classify;
use docqa_db::repo::UserRepo;

use crate::app::AppState;
use crate::domains::errors::ServiceError;

pub type SearchError = ServiceError;

pub async fn search_users(state: &AppState, fragment: &str) -> Result<Vec<UserRecord>, SearchError> {
    let repo = UserRepo::new(&state.db);
    match repo.search_safe(fragment).await {
        Ok(rows) => {
            tracing::info!(event = "users_search", rows = rows.len(), "User search completed");
            Ok(rows)
        }
        Err(err) => {
            let err = classify(err);
            tracing::error!(event = "users_search_failed", error = %err);
            Err(err.into())
        }
    }
}

/// Concatenating lookup behind `GET /search`. Store errors are passed through
/// untouched so the handler can echo them.
pub async fn search_users_unchecked(
    state: &AppState,
    fragment: &str,
) -> Result<Vec<UserRecord>, sqlx_core::Error> {
    let result = UserRepo::new(&state.db).search_unsafe(fragment).await;
    match &result {
        Ok(rows) => tracing::info!(event = "users_search_unchecked", rows = rows.len()),
        Err(err) => tracing::error!(event = "users_search_unchecked_failed", error = %err),
    }
    result
}
