use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::docs::ApiDoc;
use crate::middleware::cors::cors;
use crate::AppState;

pub mod analytics;
pub mod chat;
pub mod root;
pub mod schema;

/// Registers every endpoint, the API reference and the shared state.
pub fn configure(
    app_state: Arc<AppState>,
) -> impl FnOnce(&mut web::ServiceConfig) + Send + Clone + 'static {
    move |cfg: &mut web::ServiceConfig| {
        cfg.service(Scalar::with_url("/docs", ApiDoc::openapi()));
        cfg.service(
            web::scope("")
                .wrap(cors())
                .app_data(web::Data::new(app_state))
                .app_data(json_config())
                .service(root::read_root)
                .service(root::hello)
                .service(root::diagnostics)
                .service(schema::get_schema_info)
                .service(analytics::ingest_dataset)
                .service(analytics::forecast)
                .service(analytics::recommend)
                .service(chat::chat),
        );
    }
}

/// Malformed bodies are answered with 422 and a `detail` message.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!("Rejected body for {}: {}", req.path(), err);
        let detail = err.to_string();
        InternalError::from_response(err, unprocessable_response(&detail)).into()
    })
}

pub(crate) fn unprocessable(detail: String) -> actix_web::Error {
    let response = unprocessable_response(&detail);
    InternalError::from_response(detail, response).into()
}

fn unprocessable_response(detail: &str) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(json!({ "detail": detail }))
}
