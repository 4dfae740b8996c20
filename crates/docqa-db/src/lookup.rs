//! One-shot user lookups that own their connection.
//!
//! Each call opens a single connection to an existing database, runs one
//! query and closes the connection whether or not the query succeeded.

use sqlx_core::connection::{ConnectOptions, Connection};
use sqlx_sqlite::SqliteConnection;

use docqa_core::{LookupError, UserRecord};

use crate::errors::classify;
use crate::repo::{fetch_safe, fetch_unsafe};

async fn open(db_url: &str) -> Result<SqliteConnection, LookupError> {
    let options = crate::base_options(db_url)
        .map_err(classify)?
        .create_if_missing(false);
    options.connect().await.map_err(|err| {
        tracing::warn!(event = "lookup_connect_failed", error = %err);
        classify(err)
    })
}

async fn close(conn: SqliteConnection) {
    if let Err(err) = conn.close().await {
        tracing::warn!(event = "lookup_close_failed", error = %err);
    }
}

fn into_pairs(
    result: Result<Vec<UserRecord>, sqlx_core::Error>,
) -> Result<Vec<(i64, String)>, LookupError> {
    result
        .map(|rows| rows.into_iter().map(UserRecord::into_pair).collect())
        .map_err(classify)
}

/// Substring lookup with the fragment bound as a parameter.
pub async fn search_safe(db_url: &str, fragment: &str) -> Result<Vec<(i64, String)>, LookupError> {
    let mut conn = open(db_url).await?;
    let result = fetch_safe(&mut conn, fragment).await;
    close(conn).await;
    let rows = into_pairs(result)?;
    tracing::debug!(event = "lookup_safe", rows = rows.len());
    Ok(rows)
}

/// Substring lookup with the fragment concatenated into the query text.
///
/// Kept as a negative example: a fragment such as `' OR 1=1 --` rewrites the
/// predicate. Do not call this with untrusted input outside of tests.
pub async fn search_unsafe(
    db_url: &str,
    fragment: &str,
) -> Result<Vec<(i64, String)>, LookupError> {
    let mut conn = open(db_url).await?;
    let result = fetch_unsafe(&mut conn, fragment).await;
    close(conn).await;
    let rows = into_pairs(result)?;
    tracing::debug!(event = "lookup_unsafe", rows = rows.len());
    Ok(rows)
}
