use super::prelude::*;

fn message_from_row(row: &SqliteRow) -> Result<ChatMessage, sqlx_core::Error> {
    let role: String = row.try_get("role")?;
    Ok(ChatMessage {
        id: row.try_get("id")?,
        role: role
            .parse::<Role>()
            .map_err(|err| sqlx_core::Error::Decode(Box::new(err)))?,
        content: row.try_get("content")?,
        timestamp: row.try_get::<NaiveDateTime, _>("timestamp")?,
    })
}

pub struct MessageRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MessageRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, role: Role, content: &str) -> Result<i64, sqlx_core::Error> {
        query!(
            r#"
            INSERT INTO messages (role, content)
            VALUES (?1, ?2)
            "#,
            role.as_str(),
            content
        )
        .execute(self.pool)
        .await
        .map(|result| result.last_insert_rowid())
    }

    pub async fn list_all(&self) -> Result<Vec<ChatMessage>, sqlx_core::Error> {
        let rows = query!(
            r#"
            SELECT id, role, content, timestamp
            FROM messages
            ORDER BY timestamp, id
            "#
        )
        .fetch_all(self.pool)
        .await?;
        rows.iter().map(message_from_row).collect()
    }

    pub async fn list_by_role(&self, role: Role) -> Result<Vec<ChatMessage>, sqlx_core::Error> {
        let rows = query!(
            r#"
            SELECT id, role, content, timestamp
            FROM messages
            WHERE role = ?1
            ORDER BY timestamp, id
            "#,
            role.as_str()
        )
        .fetch_all(self.pool)
        .await?;
        rows.iter().map(message_from_row).collect()
    }
}
