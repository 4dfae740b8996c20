use std::net::SocketAddr;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::app::{self, AppState};
use crate::runtime;
use crate::settings;
use docqa_db::{connect_sqlite_with_max, SqlitePool};

pub fn init_tracing() {
    runtime::init_tracing();
}

pub fn log_startup(settings: &settings::Settings) {
    tracing::info!(
        event = "server_startup",
        addr = %settings.addr,
        db_url = %settings.db_url,
        db_pool_max = settings.db_pool_max,
        vulnerable_search = settings.config.search.vulnerable_endpoint,
        top_questions = settings.config.transcript.top_questions,
        top_words = settings.config.transcript.top_words,
        "Server configuration loaded"
    );
}

pub async fn connect_db(settings: &settings::Settings) -> Result<SqlitePool, sqlx_core::Error> {
    connect_sqlite_with_max(&settings.db_url, settings.db_pool_max).await
}

pub fn build_state(settings: &settings::Settings, db: SqlitePool) -> AppState {
    AppState::new(db, settings.config.clone())
}

pub fn build_app(state: AppState) -> Router {
    let request_id_header = axum::http::HeaderName::from_static("x-request-id");
    app::build_router(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("unknown");
                let matched = request
                    .extensions()
                    .get::<axum::extract::MatchedPath>()
                    .map(axum::extract::MatchedPath::as_str)
                    .unwrap_or("unmatched");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %matched,
                    request_id = %request_id
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(CatchPanicLayer::custom(|err| {
            tracing::error!(event = "panic_recovered", error = ?err, "handler panicked");
            match axum::response::Response::builder()
                .status(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
                .body(axum::body::Body::empty())
            {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!(event = "panic_response_failed", error = %err);
                    axum::response::Response::new(axum::body::Body::empty())
                }
            }
        }))
}

pub async fn serve(settings: &settings::Settings, app: Router) {
    let addr: SocketAddr = settings.addr;
    tracing::info!(%addr, "listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(event = "server_bind_failed", error = %err);
            return;
        }
    };
    if let Err(err) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(runtime::shutdown_signal())
    .await
    {
        tracing::error!(event = "server_failed", error = %err);
    }
}
