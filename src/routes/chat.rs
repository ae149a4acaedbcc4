use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::models::{ChatMessage, Role};
use crate::prompts::chat_reply;
use crate::store::persist;
use crate::types::{ChatRequest, ChatResponse};
use crate::AppState;

/// Echo-style assistant. Both sides of the exchange are stored when a store is available.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, body = ChatResponse),
        (status = 422, description = "Malformed payload")
    )
)]
#[post("/api/chat")]
pub async fn chat(
    app_state: web::Data<Arc<AppState>>,
    web::Json(request): web::Json<ChatRequest>,
) -> web::Json<ChatResponse> {
    info!("Chat message for session {:?}", request.session_id);

    let user_message = ChatMessage::new(Role::User, request.message.as_str(), request.session_id.clone());
    let assistant_reply = ChatMessage::new(
        Role::Assistant,
        chat_reply(&request.message),
        request.session_id.clone(),
    );

    // each write stands alone; a failed user write does not skip the reply
    persist(app_state.store(), &user_message).await;
    persist(app_state.store(), &assistant_reply).await;

    web::Json(ChatResponse {
        reply: assistant_reply.content,
        session_id: request.session_id,
    })
}
