use axum::{routing::get, Router};

use crate::app::AppState;

mod handlers;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/users/search", get(handlers::search_users))
}
