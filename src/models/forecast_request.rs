use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::RangeInclusive;
use utoipa::ToSchema;

use super::{lax_unsigned, null_as_empty, Document};

pub const HORIZON_RANGE: RangeInclusive<u32> = 1..=365;

fn default_horizon() -> u32 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForecastRequest {
    /// Metric to forecast, e.g. "revenue"
    pub metric: String,
    /// Forecast horizon in days, 1 to 365
    #[serde(default = "default_horizon", deserialize_with = "lax_unsigned")]
    #[schema(minimum = 1, maximum = 365, default = 30)]
    pub horizon_days: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(value_type = Object)]
    pub context: Map<String, Value>,
}

impl ForecastRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !HORIZON_RANGE.contains(&self.horizon_days) {
            return Err(format!(
                "horizon_days must be between {} and {}, got {}",
                HORIZON_RANGE.start(),
                HORIZON_RANGE.end(),
                self.horizon_days
            ));
        }
        Ok(())
    }
}

impl Document for ForecastRequest {
    const COLLECTION: &'static str = "forecastrequest";
    const FIELDS: &'static [&'static str] = &["metric", "horizon_days", "context"];
}
