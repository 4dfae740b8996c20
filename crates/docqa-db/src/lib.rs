#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]
#![allow(clippy::uninlined_format_args)]

extern crate sqlx_core as sqlx;

use sqlx_core::pool::{Pool, PoolOptions};
use sqlx_sqlite::{Sqlite, SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

macro_rules! query {
    ($sql:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut q = sqlx_core::query::query::<sqlx_sqlite::Sqlite>($sql);
        $(q = q.bind($arg);)*
        q
    }};
}

pub mod errors;
pub mod lookup;
pub mod repo;

pub use errors::classify;

pub type SqlitePool = Pool<Sqlite>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Options shared by every connection: LIKE must compare case-sensitively.
pub(crate) fn base_options(path: &str) -> Result<SqliteConnectOptions, sqlx_core::Error> {
    Ok(SqliteConnectOptions::from_str(path)?
        .busy_timeout(BUSY_TIMEOUT)
        .pragma("case_sensitive_like", "ON"))
}

pub async fn connect_sqlite(path: &str) -> Result<SqlitePool, sqlx_core::Error> {
    connect_sqlite_with_max(path, 1).await
}

pub async fn connect_sqlite_with_max(
    path: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx_core::Error> {
    let options = base_options(path)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    PoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round trip a trivial statement to prove the pool can still reach the store.
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx_core::Error> {
    query!("SELECT 1").execute(pool).await.map(|_| ())
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx_core::migrate::MigrateError> {
    sqlx_macros::migrate!("./migrations").run(pool).await
}
