use sqlx_core::executor::Executor;

use super::prelude::*;
use docqa_core::like_pattern;

const SEARCH_SAFE_SQL: &str = r#"
    SELECT id, name
    FROM users
    WHERE name LIKE ?1 ESCAPE '\'
"#;

/// Query text of the concatenating lookup. The fragment is pasted in verbatim.
pub fn concat_search_sql(fragment: &str) -> String {
    "SELECT id, name FROM users WHERE name LIKE '%".to_string() + fragment + "%'"
}

fn user_from_row(row: &SqliteRow) -> Result<UserRecord, sqlx_core::Error> {
    Ok(UserRecord {
        id: row.try_get(0)?,
        name: row.try_get(1)?,
    })
}

pub(crate) async fn fetch_safe<'e, E>(
    executor: E,
    fragment: &str,
) -> Result<Vec<UserRecord>, sqlx_core::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = query!(SEARCH_SAFE_SQL, like_pattern(fragment))
        .fetch_all(executor)
        .await?;
    rows.iter().map(user_from_row).collect()
}

pub(crate) async fn fetch_unsafe<'e, E>(
    executor: E,
    fragment: &str,
) -> Result<Vec<UserRecord>, sqlx_core::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = concat_search_sql(fragment);
    let rows = query!(sql.as_str()).fetch_all(executor).await?;
    rows.iter().map(user_from_row).collect()
}

pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn search_safe(&self, fragment: &str) -> Result<Vec<UserRecord>, sqlx_core::Error> {
        fetch_safe(self.pool, fragment).await
    }

    pub async fn search_unsafe(
        &self,
        fragment: &str,
    ) -> Result<Vec<UserRecord>, sqlx_core::Error> {
        fetch_unsafe(self.pool, fragment).await
    }
}
