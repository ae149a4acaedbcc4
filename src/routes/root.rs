use actix_web::{get, web};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::prompts::Prompts;
use crate::store::DocumentStore;
use crate::types::{DiagnosticsResponse, MessageResponse};
use crate::AppState;

const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[utoipa::path(get, path = "/", responses((status = 200, body = MessageResponse)))]
#[get("/")]
pub async fn read_root() -> web::Json<MessageResponse> {
    web::Json(MessageResponse {
        message: Prompts::ROOT_GREETING.to_string(),
    })
}

#[utoipa::path(get, path = "/api/hello", responses((status = 200, body = MessageResponse)))]
#[get("/api/hello")]
pub async fn hello() -> web::Json<MessageResponse> {
    web::Json(MessageResponse {
        message: Prompts::API_GREETING.to_string(),
    })
}

/// Reports whether the document store is configured and reachable.
#[utoipa::path(get, path = "/test", responses((status = 200, body = DiagnosticsResponse)))]
#[get("/test")]
pub async fn diagnostics(app_state: web::Data<Arc<AppState>>) -> web::Json<DiagnosticsResponse> {
    info!("Diagnostics requested");
    web::Json(diagnose(&app_state.config, app_state.store()).await)
}

async fn diagnose(config: &AppConfig, store: Option<&dyn DocumentStore>) -> DiagnosticsResponse {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "⚠️  Available but not initialized".to_string(),
        database_url: set_or_unset(config.database_url.is_some()),
        database_name: set_or_unset(config.database_name.is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(store) = store {
        response.connection_status = "Connected".to_string();
        match store.list_collections().await {
            Ok(collections) => {
                response.database = "✅ Connected & Working".to_string();
                response.collections = collections
                    .into_iter()
                    .take(MAX_LISTED_COLLECTIONS)
                    .collect();
            }
            Err(e) => {
                warn!("Listing collections in {} failed: {:?}", store.name(), e);
                let error: String = e.to_string().chars().take(MAX_ERROR_CHARS).collect();
                response.database = format!("⚠️  Connected but Error: {}", error);
            }
        }
    }

    response
}

fn set_or_unset(set: bool) -> String {
    let label = if set { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}
