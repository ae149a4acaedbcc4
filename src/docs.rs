use utoipa::OpenApi;

use crate::forecast::ForecastPoint;
use crate::models::{ChatMessage, DatasetIngest, ForecastRequest, RecommendationRequest, Role};
use crate::routes;
use crate::types::{
    ChatRequest, ChatResponse, DiagnosticsResponse, ForecastResponse, IngestResponse,
    MessageResponse, ModelFields, RecommendationResponse, SchemaResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "AI-Powered Business Decision Backend"),
    paths(
        routes::root::read_root,
        routes::root::hello,
        routes::root::diagnostics,
        routes::schema::get_schema_info,
        routes::analytics::ingest_dataset,
        routes::analytics::forecast,
        routes::analytics::recommend,
        routes::chat::chat,
    ),
    components(schemas(
        DatasetIngest,
        ForecastRequest,
        RecommendationRequest,
        ChatMessage,
        Role,
        ChatRequest,
        ChatResponse,
        IngestResponse,
        ForecastResponse,
        ForecastPoint,
        RecommendationResponse,
        MessageResponse,
        DiagnosticsResponse,
        SchemaResponse,
        ModelFields,
    ))
)]
pub struct ApiDoc;
