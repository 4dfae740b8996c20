use crate::app::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(crate::domains::search::http::v1::router())
        .merge(crate::domains::transcript::http::v1::router())
}
