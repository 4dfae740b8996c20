use axum::{routing::get, Router};

use crate::app::AppState;

mod handlers;
pub(crate) mod types;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/messages",
            get(handlers::list_messages).post(handlers::save_message),
        )
        .route("/v1/stats", get(handlers::stats))
}
