use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Document;

/// Author of a chat message. Messages are only built server-side, so clients never send a role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
}

/// One side of a chat exchange, persisted per message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub session_id: Option<String>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>, session_id: Option<String>) -> Self {
        ChatMessage {
            role,
            content: content.into(),
            session_id,
        }
    }
}

impl Document for ChatMessage {
    const COLLECTION: &'static str = "chatmessage";
    const FIELDS: &'static [&'static str] = &["role", "content", "session_id"];
}
