use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema, Debug)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct ChatResponse {
    pub reply: String,
    pub session_id: Option<String>,
}
