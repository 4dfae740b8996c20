#![allow(dead_code)]

use docqa_db::{connect_sqlite_with_max, migrate, SqlitePool};
use uuid::Uuid;

pub fn temp_db_url(prefix: &str) -> String {
    let db_path = std::env::temp_dir().join(format!("{prefix}-{}.sqlite", Uuid::now_v7().simple()));
    format!("sqlite://{}", db_path.display())
}

pub async fn setup_db(prefix: &str) -> (SqlitePool, String) {
    let db_url = temp_db_url(prefix);
    let pool = connect_sqlite_with_max(&db_url, 1).await.expect("sqlite");
    migrate(&pool).await.expect("migrate");
    (pool, db_url)
}

pub async fn seed_users(pool: &SqlitePool, users: &[(i64, &str)]) {
    for (id, name) in users {
        sqlx_core::query::query::<sqlx_sqlite::Sqlite>("INSERT INTO users (id, name) VALUES (?1, ?2)")
            .bind(*id)
            .bind(*name)
            .execute(pool)
            .await
            .expect("insert user");
    }
}

pub fn sorted(mut rows: Vec<(i64, String)>) -> Vec<(i64, String)> {
    rows.sort();
    rows
}
