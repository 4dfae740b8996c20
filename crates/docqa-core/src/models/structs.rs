use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Role;

/// A row of the `users` table. Rows are provisioned out of band and only read here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
}

impl UserRecord {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn into_pair(self) -> (i64, String) {
        (self.id, self.name)
    }
}

impl From<(i64, String)> for UserRecord {
    fn from((id, name): (i64, String)) -> Self {
        Self { id, name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub role: Role,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptStats {
    pub questions: usize,
    pub answers: usize,
    pub top_questions: Vec<RankedEntry>,
    pub top_words: Vec<RankedEntry>,
}
