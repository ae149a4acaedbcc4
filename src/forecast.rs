use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const BASELINE: f64 = 100.0;
pub const DAILY_GROWTH: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Placeholder trajectory with linear 1% daily growth off a fixed baseline.
///
/// One point per day for `horizon_days` days, the first dated the day after `today`.
pub fn mock_series(horizon_days: u32, today: NaiveDate) -> Vec<ForecastPoint> {
    today
        .iter_days()
        .skip(1)
        .zip(0..horizon_days)
        .map(|(date, i)| ForecastPoint {
            date,
            value: round2(BASELINE * (1.0 + DAILY_GROWTH * f64::from(i))),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
