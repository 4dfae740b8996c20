use crate::app::AppState;
use crate::config::ServerConfig;
use axum::Router;

pub(crate) mod health;
pub mod v1;

pub fn router(config: &ServerConfig) -> Router<AppState> {
    let mut router = Router::new().merge(health::router()).merge(v1::router());
    if config.search.vulnerable_endpoint {
        tracing::warn!(
            event = "vulnerable_search_mounted",
            path = "/search",
            "String-concatenating search endpoint is mounted; use only against local test data"
        );
        router = router.merge(crate::domains::search::http::vulnerable::router());
    }
    router
}
