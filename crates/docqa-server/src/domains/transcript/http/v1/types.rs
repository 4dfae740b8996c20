use serde::{Deserialize, Serialize};

use docqa_core::ChatMessage;

#[derive(Deserialize)]
pub(crate) struct SaveMessageRequest {
    pub(crate) role: String,
    pub(crate) content: String,
}

#[derive(Serialize)]
pub(crate) struct SaveMessageResponse {
    pub(crate) id: i64,
}

#[derive(Deserialize)]
pub(crate) struct ListMessagesQuery {
    #[serde(default)]
    pub(crate) role: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct ListMessagesResponse {
    pub(crate) messages: Vec<ChatMessage>,
}
