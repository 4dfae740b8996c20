#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use docqa_db::{connect_sqlite_with_max, migrate, SqlitePool};
use docqa_server::app::AppState;
use docqa_server::bootstrap::build_app;
use docqa_server::config::ServerConfig;

pub fn temp_db_url(prefix: &str) -> String {
    let db_path = std::env::temp_dir().join(format!("{prefix}-{}.sqlite", Uuid::now_v7().simple()));
    format!("sqlite://{}", db_path.display())
}

pub struct TestApp {
    pub app: axum::Router,
    pub pool: SqlitePool,
    pub db_url: String,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(ServerConfig::default()).await
    }

    pub async fn with_config(config: ServerConfig) -> Self {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("docqa_server=debug"))
                .with_test_writer()
                .try_init();
        });

        let db_url = temp_db_url("docqa-server");
        let pool = connect_sqlite_with_max(&db_url, 1).await.expect("sqlite");
        migrate(&pool).await.expect("migrate");
        let app = build_app(AppState::new(pool.clone(), config));
        Self { app, pool, db_url }
    }

    pub async fn seed_users(&self, users: &[(i64, &str)]) {
        for (id, name) in users {
            sqlx_core::query::query::<sqlx_sqlite::Sqlite>(
                "INSERT INTO users (id, name) VALUES (?1, ?2)",
            )
            .bind(*id)
            .bind(*name)
            .execute(&self.pool)
            .await
            .expect("insert user");
        }
    }

    pub async fn send(&self, request: Request<Body>) -> axum::response::Response {
        self.app.clone().oneshot(request).await.expect("response")
    }

    pub async fn get_raw(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        let response = self.send(request).await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get_raw(uri).await;
        let value = serde_json::from_str(&body).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        let response = self.send(request).await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}
