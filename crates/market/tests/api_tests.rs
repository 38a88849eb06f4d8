//! Integration tests for the market API endpoints

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use market_lib::{
    aggregate::{cheapest_offerings, comparison_matrix, market_summary, price_trends},
    analyst::{Analyst, GenerationError, Section, TextGenerator},
    catalog::MarketSnapshot,
    health::{components, ComponentStatus, HealthRegistry},
    models::MarketIndicators,
    observability::MarketMetrics,
    MarketError,
};
use prometheus::{Encoder, TextEncoder};
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

struct AppState {
    snapshot: Arc<MarketSnapshot>,
    analyst: Analyst,
    health_registry: HealthRegistry,
}

struct StubGenerator;

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _: &str, _: &str, _: u32) -> Result<String, GenerationError> {
        Ok("stub analysis".to_string())
    }
}

#[derive(Deserialize)]
struct GpuQuery {
    id: String,
}

#[derive(Deserialize)]
struct CacheQuery {
    nocache: Option<String>,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn summary(State(state): State<Arc<AppState>>) -> Response {
    match market_summary(&state.snapshot) {
        Ok(summary) => Json(summary).into_response(),
        Err(err @ MarketError::InsufficientData) => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, err.to_string())
        }
    }
}

async fn matrix(State(state): State<Arc<AppState>>) -> Response {
    Json(comparison_matrix(&state.snapshot)).into_response()
}

async fn gpu_detail(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GpuQuery>,
) -> Response {
    let Some(spec) = state.snapshot.spec(&query.id) else {
        return error_response(StatusCode::NOT_FOUND, format!("Unknown GPU: {}", query.id));
    };
    Json(json!({
        "spec": spec,
        "providers": cheapest_offerings(&state.snapshot, &query.id),
        "price_trends": price_trends(&state.snapshot, &query.id),
    }))
    .into_response()
}

async fn news(State(state): State<Arc<AppState>>) -> Response {
    Json(state.analyst.daily_news().await).into_response()
}

async fn analyst_section(
    State(state): State<Arc<AppState>>,
    Path(section): Path<String>,
    Query(query): Query<CacheQuery>,
) -> Response {
    let Some(section) = Section::parse(&section) else {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("Unknown analysis section: {section}"),
        );
    };
    match state.analyst.section(section, query.nocache.is_none()).await {
        Ok(text) => Json(json!({ "section": section.key(), "analysis": text })).into_response(),
        Err(err) => error_response(StatusCode::BAD_GATEWAY, err.to_string()),
    }
}

async fn healthz(State(state): State<Arc<AppState>>) -> Response {
    let health = state.health_registry.health().await;
    let status_code = match health.status {
        ComponentStatus::Healthy | ComponentStatus::Degraded => StatusCode::OK,
        ComponentStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status_code, Json(health)).into_response()
}

async fn readyz(State(state): State<Arc<AppState>>) -> Response {
    let readiness = state.health_registry.readiness().await;
    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status_code, Json(readiness)).into_response()
}

async fn metrics() -> Response {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
        .into_response()
}

fn create_test_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/summary", get(summary))
        .route("/api/matrix", get(matrix))
        .route("/api/gpu", get(gpu_detail))
        .route("/api/news", get(news))
        .route("/api/analyst/:section", get(analyst_section))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .with_state(state)
}

fn empty_snapshot() -> MarketSnapshot {
    let builtin = MarketSnapshot::builtin();
    MarketSnapshot {
        gpus: Vec::new(),
        providers: Vec::new(),
        history: BTreeMap::new(),
        indicators: MarketIndicators {
            gpu_market_size_bn: BTreeMap::new(),
            ai_capex_bn: BTreeMap::new(),
            flagship_lead_time_weeks: BTreeMap::new(),
            amd_market_share_pct: BTreeMap::new(),
            gpu_lead_times: Vec::new(),
            ..builtin.indicators
        },
        regions: Vec::new(),
        workloads: Vec::new(),
        utilization: Vec::new(),
        reservations: Vec::new(),
        forecasts: Vec::new(),
        moat: Vec::new(),
        sustainability: Vec::new(),
        carbon: Vec::new(),
        supply_chain: Vec::new(),
        export_controls: Vec::new(),
        model_fit: Vec::new(),
        news_feed: Vec::new(),
    }
}

async fn setup_app_with(snapshot: MarketSnapshot) -> (Router, Arc<AppState>, TempDir) {
    let cache_dir = TempDir::new().unwrap();
    let snapshot = Arc::new(snapshot);

    let health_registry = HealthRegistry::new();
    health_registry.register(components::CATALOG).await;
    health_registry.register(components::ANALYST).await;

    let analyst = Analyst::new(
        Box::new(StubGenerator),
        snapshot.clone(),
        cache_dir.path(),
        health_registry.clone(),
    );

    // Touch the metrics so /metrics always has families to expose
    MarketMetrics::new().set_catalog_sizes(snapshot.gpus.len() as i64, snapshot.providers.len() as i64);

    let state = Arc::new(AppState {
        snapshot,
        analyst,
        health_registry,
    });
    let router = create_test_router(state.clone());
    (router, state, cache_dir)
}

async fn setup_app() -> (Router, Arc<AppState>, TempDir) {
    setup_app_with(MarketSnapshot::builtin()).await
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_summary_returns_market_extremes() {
    let (app, _state, _dir) = setup_app().await;

    let (status, summary) = get_json(app, "/api/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_gpus_tracked"], 16);
    assert_eq!(summary["total_providers_tracked"], 10);
    assert!(summary["best_flops_per_dollar"]["value"].as_f64().unwrap() > 0.0);
    assert!(summary["comparison_matrix"].is_array());
}

#[tokio::test]
async fn test_summary_returns_503_on_empty_catalog() {
    let (app, _state, _dir) = setup_app_with(empty_snapshot()).await;

    let (status, body) = get_json(app, "/api/summary").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("insufficient data"));
}

#[tokio::test]
async fn test_matrix_sorted_by_cheapest_descending() {
    let (app, _state, _dir) = setup_app().await;

    let (status, matrix) = get_json(app, "/api/matrix").await;
    assert_eq!(status, StatusCode::OK);
    let rows = matrix.as_array().unwrap();
    assert!(!rows.is_empty());

    let prices: Vec<f64> = rows
        .iter()
        .map(|r| r["cheapest_price"].as_f64().unwrap())
        .collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_gpu_detail_known_id() {
    let (app, _state, _dir) = setup_app().await;

    let (status, detail) = get_json(app, "/api/gpu?id=H100-SXM").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["spec"]["id"], "H100-SXM");
    assert!(!detail["providers"].as_array().unwrap().is_empty());
    assert!(!detail["price_trends"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_gpu_detail_unknown_id_returns_404() {
    let (app, _state, _dir) = setup_app().await;

    let (status, body) = get_json(app, "/api/gpu?id=TPU-V9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown GPU: TPU-V9");
}

#[tokio::test]
async fn test_news_returns_items() {
    let (app, _state, _dir) = setup_app().await;

    let (status, news) = get_json(app, "/api/news").await;
    assert_eq!(status, StatusCode::OK);
    let items = news.as_array().unwrap();
    // Stub generator output is not valid news JSON, so the static feed
    // is served with shifted dates.
    assert!(items.len() >= 5);
    assert!(items[0]["headline"].is_string());
}

#[tokio::test]
async fn test_analyst_section_returns_generated_text() {
    let (app, _state, _dir) = setup_app().await;

    let (status, body) = get_json(app, "/api/analyst/market_trends").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["section"], "market_trends");
    assert_eq!(body["analysis"], "stub analysis");
}

#[tokio::test]
async fn test_analyst_unknown_section_returns_404() {
    let (app, _state, _dir) = setup_app().await;

    let (status, body) = get_json(app, "/api/analyst/astrology").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("astrology"));
}

#[tokio::test]
async fn test_healthz_returns_ok_when_healthy() {
    let (app, _state, _dir) = setup_app().await;

    let (status, health) = get_json(app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert!(health["components"]["catalog"].is_object());
}

#[tokio::test]
async fn test_healthz_degrades_after_generation_failure() {
    struct FailingGenerator;
    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _: &str, _: &str, _: u32) -> Result<String, GenerationError> {
            Err(GenerationError::Empty)
        }
    }

    let cache_dir = TempDir::new().unwrap();
    let snapshot = Arc::new(MarketSnapshot::builtin());
    let health_registry = HealthRegistry::new();
    health_registry.register(components::CATALOG).await;
    health_registry.register(components::ANALYST).await;
    let analyst = Analyst::new(
        Box::new(FailingGenerator),
        snapshot.clone(),
        cache_dir.path(),
        health_registry.clone(),
    );
    let state = Arc::new(AppState {
        snapshot,
        analyst,
        health_registry,
    });
    let app = create_test_router(state);

    let (status, _) = get_json(app.clone(), "/api/analyst/market_trends").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    // The failed generation is now visible on the probe
    let (status, health) = get_json(app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "degraded");
    assert_eq!(health["components"]["analyst"]["status"], "degraded");
}

#[tokio::test]
async fn test_healthz_returns_503_when_unhealthy() {
    let (app, state, _dir) = setup_app().await;

    state
        .health_registry
        .set_unhealthy(components::ANALYST, "Model endpoint unreachable")
        .await;

    let (status, health) = get_json(app, "/healthz").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(health["status"], "unhealthy");
}

#[tokio::test]
async fn test_readyz_returns_503_before_ready() {
    let (app, _state, _dir) = setup_app().await;

    let (status, readiness) = get_json(app, "/readyz").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(readiness["ready"], false);
}

#[tokio::test]
async fn test_readyz_returns_ok_when_ready() {
    let (app, state, _dir) = setup_app().await;

    state.health_registry.set_ready(true).await;

    let (status, readiness) = get_json(app, "/readyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(readiness["ready"], true);
}

#[tokio::test]
async fn test_metrics_endpoint_returns_prometheus_format() {
    let (app, _state, _dir) = setup_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().contains("text/plain"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let metrics_text = String::from_utf8(body.to_vec()).unwrap();

    assert!(metrics_text.contains("gpu_market_gpus_tracked"));
    assert!(metrics_text.contains("gpu_market_providers_tracked"));
}
