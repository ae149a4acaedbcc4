use actix_web::{get, web};

use crate::models::{ChatMessage, DatasetIngest, Document, ForecastRequest, RecommendationRequest};
use crate::types::{ModelFields, SchemaResponse};

fn fields<T: Document>() -> Vec<String> {
    T::FIELDS.iter().map(|f| f.to_string()).collect()
}

/// Lightweight description of the stored models, for tooling.
#[utoipa::path(get, path = "/schema", responses((status = 200, body = SchemaResponse)))]
#[get("/schema")]
pub async fn get_schema_info() -> web::Json<SchemaResponse> {
    web::Json(SchemaResponse {
        models: ModelFields {
            datasetingest: fields::<DatasetIngest>(),
            forecastrequest: fields::<ForecastRequest>(),
            recommendationrequest: fields::<RecommendationRequest>(),
            chatmessage: fields::<ChatMessage>(),
        },
    })
}
