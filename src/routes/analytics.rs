use actix_web::{post, web};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::forecast::mock_series;
use crate::models::{DatasetIngest, ForecastRequest, RecommendationRequest};
use crate::prompts::{suggestions, Prompts};
use crate::routes::unprocessable;
use crate::store::persist;
use crate::types::{ForecastResponse, IngestResponse, RecommendationResponse};
use crate::AppState;

/// Record a dataset ingest event and return a summary.
#[utoipa::path(
    post,
    path = "/api/ingest",
    request_body = DatasetIngest,
    responses(
        (status = 200, body = IngestResponse),
        (status = 422, description = "Malformed payload")
    )
)]
#[post("/api/ingest")]
pub async fn ingest_dataset(
    app_state: web::Data<Arc<AppState>>,
    web::Json(payload): web::Json<DatasetIngest>,
) -> web::Json<IngestResponse> {
    info!("Ingest of dataset {} from {}", payload.name, payload.source);

    let id = persist(app_state.store(), &payload).await;

    web::Json(IngestResponse {
        status: "ok".to_string(),
        id,
        name: payload.name,
        source: payload.source,
        fields: payload.fields,
        rows: payload.rows,
        message: Prompts::INGEST_RECORDED.to_string(),
    })
}

/// Generate a baseline mock forecast and store the request.
#[utoipa::path(
    post,
    path = "/api/forecast",
    request_body = ForecastRequest,
    responses(
        (status = 200, body = ForecastResponse),
        (status = 422, description = "Malformed payload or horizon outside 1..=365")
    )
)]
#[post("/api/forecast")]
pub async fn forecast(
    app_state: web::Data<Arc<AppState>>,
    web::Json(payload): web::Json<ForecastRequest>,
) -> Result<web::Json<ForecastResponse>, actix_web::Error> {
    payload.validate().map_err(unprocessable)?;
    info!(
        "Forecast of {} over {} days",
        payload.metric, payload.horizon_days
    );

    persist(app_state.store(), &payload).await;

    let series = mock_series(payload.horizon_days, Utc::now().date_naive());

    Ok(web::Json(ForecastResponse {
        status: "ok".to_string(),
        metric: payload.metric,
        horizon_days: payload.horizon_days,
        series,
        note: Prompts::FORECAST_NOTE.to_string(),
    }))
}

/// Return rule-based recommendations and store the request.
#[utoipa::path(
    post,
    path = "/api/recommend",
    request_body = RecommendationRequest,
    responses(
        (status = 200, body = RecommendationResponse),
        (status = 422, description = "Malformed payload")
    )
)]
#[post("/api/recommend")]
pub async fn recommend(
    app_state: web::Data<Arc<AppState>>,
    web::Json(payload): web::Json<RecommendationRequest>,
) -> web::Json<RecommendationResponse> {
    info!("Recommendations for objective {}", payload.objective);

    persist(app_state.store(), &payload).await;

    web::Json(RecommendationResponse {
        status: "ok".to_string(),
        objective: payload.objective,
        suggestions: suggestions(),
        constraints: payload.constraints,
    })
}

#[cfg(test)]
mod tests {
    use crate::store::testing::{MemoryStore, UnavailableStore};
    use crate::store::DocumentStore;
    use crate::test_state;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use chrono::{Days, NaiveDate, Utc};
    use serde_json::{json, Value};
    use std::sync::Arc;

    async fn post(store: Option<Arc<dyn DocumentStore>>, uri: &str, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new().configure(crate::routes::configure(test_state(store))),
        )
        .await;
        let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn ingest_returns_summary_with_id() {
        let store = Arc::new(MemoryStore::default());
        let (status, body) = post(
            Some(store.clone()),
            "/api/ingest",
            json!({ "name": "orders", "source": "csv", "fields": ["id", "total"], "rows": 42 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["id"].is_string());
        assert_eq!(body["fields"], json!(["id", "total"]));
        assert_eq!(body["rows"], 42);
        assert_eq!(body["message"], "Dataset ingest recorded");

        let stored = store.collection("datasetingest");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0]["name"], "orders");
    }

    #[actix_web::test]
    async fn ingest_omits_id_when_store_is_down() {
        let body = json!({ "name": "orders", "source": "s3" });
        let (up_status, mut up) = post(Some(Arc::new(MemoryStore::default())), "/api/ingest", body.clone()).await;
        let (down_status, down) = post(Some(Arc::new(UnavailableStore)), "/api/ingest", body.clone()).await;
        let (none_status, none) = post(None, "/api/ingest", body).await;

        assert_eq!(up_status, StatusCode::OK);
        assert_eq!(down_status, StatusCode::OK);
        assert_eq!(none_status, StatusCode::OK);
        assert!(down.get("id").is_none());
        assert_eq!(down, none);

        up.as_object_mut().unwrap().remove("id");
        assert_eq!(up, down);
    }

    #[actix_web::test]
    async fn ingest_rejects_negative_rows() {
        let (status, body) = post(
            None,
            "/api/ingest",
            json!({ "name": "orders", "source": "csv", "rows": -5 }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[actix_web::test]
    async fn forecast_series_starts_tomorrow() {
        let before = Utc::now().date_naive();
        let (status, body) = post(None, "/api/forecast", json!({ "metric": "revenue", "horizon_days": 3 })).await;
        let after = Utc::now().date_naive();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metric"], "revenue");
        assert_eq!(body["horizon_days"], 3);
        assert_eq!(body["note"], "Mock forecast. Replace with your ML model later.");

        let series = body["series"].as_array().unwrap();
        let values: Vec<f64> = series.iter().map(|p| p["value"].as_f64().unwrap()).collect();
        assert_eq!(values, vec![100.0, 101.0, 102.0]);

        let first: NaiveDate = series[0]["date"].as_str().unwrap().parse().unwrap();
        // the request may straddle midnight UTC
        assert!(first == before + Days::new(1) || first == after + Days::new(1));
    }

    #[actix_web::test]
    async fn forecast_defaults_to_thirty_days() {
        let (_, body) = post(None, "/api/forecast", json!({ "metric": "churn" })).await;
        assert_eq!(body["horizon_days"], 30);
        assert_eq!(body["series"].as_array().unwrap().len(), 30);
    }

    #[actix_web::test]
    async fn forecast_accepts_whole_number_float_horizon() {
        let (status, body) = post(None, "/api/forecast", json!({ "metric": "m", "horizon_days": 3.0 })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["horizon_days"], 3);
        assert_eq!(body["series"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn forecast_rejects_out_of_range_horizon() {
        for horizon in [0, 366] {
            let (status, body) = post(
                None,
                "/api/forecast",
                json!({ "metric": "revenue", "horizon_days": horizon }),
            )
            .await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert!(body["detail"].as_str().unwrap().contains("horizon_days"));
        }
    }

    /// Status and body under a working store, a failing store and no store at all.
    async fn post_under_each_store(uri: &str, body: Value) -> Vec<(StatusCode, Value)> {
        let stores: [Option<Arc<dyn DocumentStore>>; 3] = [
            Some(Arc::new(MemoryStore::default())),
            Some(Arc::new(UnavailableStore)),
            None,
        ];
        let mut results = Vec::new();
        for store in stores {
            results.push(post(store, uri, body.clone()).await);
        }
        results
    }

    #[actix_web::test]
    async fn forecast_is_unaffected_by_store_outage() {
        let results = post_under_each_store(
            "/api/forecast",
            json!({ "metric": "revenue", "horizon_days": 5, "context": { "region": "eu" } }),
        )
        .await;

        assert_eq!(results[0].0, StatusCode::OK);
        assert_eq!(results[0].1["series"].as_array().unwrap().len(), 5);
        assert_eq!(results[0], results[1]);
        assert_eq!(results[1], results[2]);
    }

    #[actix_web::test]
    async fn recommend_is_unaffected_by_store_outage() {
        let results = post_under_each_store(
            "/api/recommend",
            json!({ "objective": "increase_conversion", "constraints": ["budget < 10k"] }),
        )
        .await;

        assert_eq!(results[0].0, StatusCode::OK);
        assert_eq!(results[0], results[1]);
        assert_eq!(results[1], results[2]);
    }

    #[actix_web::test]
    async fn forecast_request_is_stored_verbatim() {
        let store = Arc::new(MemoryStore::default());
        post(
            Some(store.clone()),
            "/api/forecast",
            json!({ "metric": "revenue", "horizon_days": 7, "context": { "region": "eu" } }),
        )
        .await;

        assert_eq!(
            store.collection("forecastrequest"),
            vec![json!({ "metric": "revenue", "horizon_days": 7, "context": { "region": "eu" } })]
        );
    }

    #[actix_web::test]
    async fn recommendations_ignore_the_objective() {
        let (_, first) = post(
            None,
            "/api/recommend",
            json!({ "objective": "increase_conversion", "constraints": ["budget < 10k"] }),
        )
        .await;
        let (_, second) = post(
            Some(Arc::new(UnavailableStore)),
            "/api/recommend",
            json!({ "objective": "reduce_churn", "constraints": null }),
        )
        .await;

        assert_eq!(first["status"], "ok");
        assert_eq!(first["suggestions"], second["suggestions"]);
        assert_eq!(first["suggestions"].as_array().unwrap().len(), 3);
        assert_eq!(first["objective"], "increase_conversion");
        assert_eq!(first["constraints"], json!(["budget < 10k"]));
        assert_eq!(second["constraints"], json!([]));
    }
}
