use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::{null_as_empty, Document};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationRequest {
    /// Business objective, e.g. "increase_conversion"
    pub objective: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub constraints: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(value_type = Object)]
    pub context: Map<String, Value>,
}

impl Document for RecommendationRequest {
    const COLLECTION: &'static str = "recommendationrequest";
    const FIELDS: &'static [&'static str] = &["objective", "constraints", "context"];
}
