use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::forecast::ForecastPoint;

#[derive(Serialize, ToSchema, Debug)]
pub struct IngestResponse {
    pub status: String,
    /// Present only when the record was stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub source: String,
    pub fields: Vec<String>,
    pub rows: u64,
    pub message: String,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct ForecastResponse {
    pub status: String,
    pub metric: String,
    pub horizon_days: u32,
    pub series: Vec<ForecastPoint>,
    pub note: String,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct RecommendationResponse {
    pub status: String,
    pub objective: String,
    pub suggestions: Vec<String>,
    pub constraints: Vec<String>,
}
