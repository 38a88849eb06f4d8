//! HTTP JSON API for catalog data, aggregation, analysis, health, and metrics

use axum::{
    extract::{MatchedPath, Path, Query, State},
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use market_lib::{
    aggregate::{
        cheapest_offerings, comparison_matrix, market_summary, model_fit_matrix, price_trends,
        regional_summary, supply_chain_summary, sustainability_summary, utilization_summary,
        workload_recommendations,
    },
    analyst::{Analyst, GenerationError, Section},
    catalog::MarketSnapshot,
    health::{ComponentStatus, HealthRegistry},
    observability::MarketMetrics,
    MarketError,
};
use prometheus::{Encoder, TextEncoder};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Shared application state
pub struct AppState {
    pub snapshot: Arc<MarketSnapshot>,
    pub analyst: Analyst,
    pub health_registry: HealthRegistry,
    pub metrics: MarketMetrics,
}

impl AppState {
    pub fn new(
        snapshot: Arc<MarketSnapshot>,
        analyst: Analyst,
        health_registry: HealthRegistry,
        metrics: MarketMetrics,
    ) -> Self {
        Self {
            snapshot,
            analyst,
            health_registry,
            metrics,
        }
    }
}

#[derive(Deserialize)]
struct GpuQuery {
    id: String,
}

#[derive(Deserialize)]
struct CacheQuery {
    /// Present (any value) to bypass the analysis cache
    nocache: Option<String>,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

fn generation_error(err: GenerationError) -> Response {
    error_response(StatusCode::BAD_GATEWAY, err.to_string())
}

/// Market summary - 503 when no GPU has any offering
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

/// Per-GPU detail: spec, priced offerings, and price history
async fn gpu_detail(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GpuQuery>,
) -> Response {
    let Some(spec) = state.snapshot.spec(&query.id) else {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("Unknown GPU: {}", query.id),
        );
    };
    Json(json!({
        "spec": spec,
        "providers": cheapest_offerings(&state.snapshot, &query.id),
        "price_trends": price_trends(&state.snapshot, &query.id),
    }))
    .into_response()
}

async fn specs(State(state): State<Arc<AppState>>) -> Response {
    Json(&state.snapshot.gpus).into_response()
}

async fn providers(State(state): State<Arc<AppState>>) -> Response {
    Json(&state.snapshot.providers).into_response()
}

async fn historical(State(state): State<Arc<AppState>>) -> Response {
    Json(&state.snapshot.history).into_response()
}

async fn indicators(State(state): State<Arc<AppState>>) -> Response {
    Json(&state.snapshot.indicators).into_response()
}

async fn regional(State(state): State<Arc<AppState>>) -> Response {
    Json(regional_summary(&state.snapshot)).into_response()
}

async fn workloads(State(state): State<Arc<AppState>>) -> Response {
    Json(workload_recommendations(&state.snapshot)).into_response()
}

async fn utilization(State(state): State<Arc<AppState>>) -> Response {
    Json(utilization_summary(&state.snapshot)).into_response()
}

async fn reservations(State(state): State<Arc<AppState>>) -> Response {
    Json(&state.snapshot.reservations).into_response()
}

async fn forecasts(State(state): State<Arc<AppState>>) -> Response {
    Json(&state.snapshot.forecasts).into_response()
}

async fn competitive(State(state): State<Arc<AppState>>) -> Response {
    Json(&state.snapshot.moat).into_response()
}

async fn sustainability(State(state): State<Arc<AppState>>) -> Response {
    Json(sustainability_summary(&state.snapshot)).into_response()
}

async fn supply_chain(State(state): State<Arc<AppState>>) -> Response {
    Json(supply_chain_summary(&state.snapshot)).into_response()
}

async fn model_fit(State(state): State<Arc<AppState>>) -> Response {
    Json(model_fit_matrix(&state.snapshot)).into_response()
}

async fn news(State(state): State<Arc<AppState>>) -> Response {
    Json(state.analyst.daily_news().await).into_response()
}

/// One analysis section by key - 404 for unknown keys
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
        Err(err) => generation_error(err),
    }
}

/// All analysis sections in one response; failed sections carry
/// placeholder text instead of failing the whole request
async fn analyst_all(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CacheQuery>,
) -> Response {
    let sections = state.analyst.all_sections(query.nocache.is_none()).await;
    let body: serde_json::Map<String, serde_json::Value> = sections
        .into_iter()
        .map(|(key, text)| (key.to_string(), json!(text)))
        .collect();
    Json(json!({
        "sections": body,
        "generated_at": Utc::now().to_rfc3339(),
    }))
    .into_response()
}

async fn analyst_gpu(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GpuQuery>,
) -> Response {
    match state.analyst.gpu_deep_dive(&query.id).await {
        Ok(text) => Json(json!({ "gpu": query.id, "analysis": text })).into_response(),
        Err(err) => generation_error(err),
    }
}

/// Health check response - returns 200 if healthy, 503 if unhealthy
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_registry.health().await;

    let status_code = match health.status {
        ComponentStatus::Healthy => StatusCode::OK,
        ComponentStatus::Degraded => StatusCode::OK, // Still operational
        ComponentStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}

/// Readiness check response - returns 200 if ready, 503 if not ready
async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = state.health_registry.readiness().await;

    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(readiness))
}

/// Prometheus metrics endpoint
async fn metrics() -> Response {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string());
    }

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
        .into_response()
}

/// Record request count and latency per matched route
async fn track_requests(
    State(state): State<Arc<AppState>>,
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    state.metrics.observe_request(
        &route,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    response
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/summary", get(summary))
        .route("/api/matrix", get(matrix))
        .route("/api/gpu", get(gpu_detail))
        .route("/api/specs", get(specs))
        .route("/api/providers", get(providers))
        .route("/api/historical", get(historical))
        .route("/api/indicators", get(indicators))
        .route("/api/regional", get(regional))
        .route("/api/workloads", get(workloads))
        .route("/api/utilization", get(utilization))
        .route("/api/reservations", get(reservations))
        .route("/api/forecasts", get(forecasts))
        .route("/api/competitive", get(competitive))
        .route("/api/sustainability", get(sustainability))
        .route("/api/supplychain", get(supply_chain))
        .route("/api/modelfit", get(model_fit))
        .route("/api/news", get(news))
        .route("/api/analyst/all", get(analyst_all))
        .route("/api/analyst/gpu", get(analyst_gpu))
        .route("/api/analyst/:section", get(analyst_section))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
