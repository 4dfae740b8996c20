pub(crate) mod prelude {
    pub(crate) use crate::SqlitePool;
    pub(crate) use chrono::NaiveDateTime;
    pub(crate) use docqa_core::{ChatMessage, Role, UserRecord};
    pub(crate) use sqlx_core::row::Row;
    pub(crate) use sqlx_sqlite::{Sqlite, SqliteRow};
}

mod messages;
mod users;

pub use messages::MessageRepo;
pub use users::{concat_search_sql, UserRepo};
pub(crate) use users::{fetch_safe, fetch_unsafe};
