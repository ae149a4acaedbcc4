use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema, Debug, PartialEq)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct SchemaResponse {
    pub models: ModelFields,
}

/// Field names per collection, in declaration order.
#[derive(Serialize, ToSchema, Debug)]
pub struct ModelFields {
    pub datasetingest: Vec<String>,
    pub forecastrequest: Vec<String>,
    pub recommendationrequest: Vec<String>,
    pub chatmessage: Vec<String>,
}
