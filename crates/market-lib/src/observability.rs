//! Observability infrastructure for the market server
//!
//! Provides:
//! - Prometheus metrics (request latency, analyst generation/cache counters, catalog gauges)
//! - Structured JSON logging with tracing

use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, register_int_gauge,
    HistogramVec, IntCounter, IntCounterVec, IntGauge,
};
use std::sync::OnceLock;
use tracing::info;

/// Default histogram buckets for request latency measurements (in seconds)
const LATENCY_BUCKETS: &[f64] = &[
    0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 5.0, 30.0,
];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<MarketMetricsInner> = OnceLock::new();

/// Inner metrics structure that holds the actual Prometheus metrics
struct MarketMetricsInner {
    http_requests: IntCounterVec,
    http_request_latency_seconds: HistogramVec,
    analyst_generations: IntCounterVec,
    analyst_cache_hits: IntCounterVec,
    analyst_failures: IntCounter,
    news_fallbacks: IntCounter,
    gpus_tracked: IntGauge,
    providers_tracked: IntGauge,
}

impl MarketMetricsInner {
    fn new() -> Self {
        Self {
            http_requests: register_int_counter_vec!(
                "gpu_market_http_requests_total",
                "Total HTTP requests served, by route and status",
                &["route", "status"]
            )
            .expect("Failed to register http_requests_total"),

            http_request_latency_seconds: register_histogram_vec!(
                "gpu_market_http_request_latency_seconds",
                "Time spent handling HTTP requests, by route",
                &["route"],
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register http_request_latency_seconds"),

            analyst_generations: register_int_counter_vec!(
                "gpu_market_analyst_generations_total",
                "Completed analysis generations, by section",
                &["section"]
            )
            .expect("Failed to register analyst_generations_total"),

            analyst_cache_hits: register_int_counter_vec!(
                "gpu_market_analyst_cache_hits_total",
                "Analysis requests served from the disk cache, by section",
                &["section"]
            )
            .expect("Failed to register analyst_cache_hits_total"),

            analyst_failures: register_int_counter!(
                "gpu_market_analyst_failures_total",
                "Analysis generations that returned an error"
            )
            .expect("Failed to register analyst_failures_total"),

            news_fallbacks: register_int_counter!(
                "gpu_market_news_fallbacks_total",
                "Daily news requests served from the shifted static feed"
            )
            .expect("Failed to register news_fallbacks_total"),

            gpus_tracked: register_int_gauge!(
                "gpu_market_gpus_tracked",
                "Number of GPU models in the catalog"
            )
            .expect("Failed to register gpus_tracked"),

            providers_tracked: register_int_gauge!(
                "gpu_market_providers_tracked",
                "Number of providers in the catalog"
            )
            .expect("Failed to register providers_tracked"),
        }
    }
}

/// Market metrics for Prometheus exposition
///
/// This is a lightweight handle to the global metrics instance.
/// Multiple clones share the same underlying metrics.
#[derive(Clone)]
pub struct MarketMetrics {
    // This is just a marker - we use the global instance
    _private: (),
}

impl Default for MarketMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketMetrics {
    /// Create a new metrics handle (initializes global metrics if needed)
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(MarketMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &MarketMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    /// Record one handled HTTP request
    pub fn observe_request(&self, route: &str, status: u16, duration_secs: f64) {
        self.inner()
            .http_requests
            .with_label_values(&[route, &status.to_string()])
            .inc();
        self.inner()
            .http_request_latency_seconds
            .with_label_values(&[route])
            .observe(duration_secs);
    }

    /// Increment completed generations for one analysis section
    pub fn inc_analyst_generation(&self, section: &str) {
        self.inner()
            .analyst_generations
            .with_label_values(&[section])
            .inc();
    }

    /// Increment cache hits for one analysis section
    pub fn inc_analyst_cache_hit(&self, section: &str) {
        self.inner()
            .analyst_cache_hits
            .with_label_values(&[section])
            .inc();
    }

    /// Increment failed generations counter
    pub fn inc_analyst_failure(&self) {
        self.inner().analyst_failures.inc();
    }

    /// Increment static news fallback counter
    pub fn inc_news_fallback(&self) {
        self.inner().news_fallbacks.inc();
    }

    /// Publish catalog sizes
    pub fn set_catalog_sizes(&self, gpus: i64, providers: i64) {
        self.inner().gpus_tracked.set(gpus);
        self.inner().providers_tracked.set(providers);
    }
}

/// Structured logger for server lifecycle events
#[derive(Clone)]
pub struct StructuredLogger {
    service_name: String,
}

impl StructuredLogger {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    /// Log server startup
    pub fn log_startup(&self, version: &str, gpus: usize, providers: usize, model: &str) {
        info!(
            event = "server_started",
            service = %self.service_name,
            version = %version,
            gpus_tracked = gpus,
            providers_tracked = providers,
            model = %model,
            "Market server started"
        );
    }

    /// Log server shutdown
    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "server_shutdown",
            service = %self.service_name,
            reason = %reason,
            "Market server shutting down"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_metrics_creation() {
        // Note: This test may fail if run multiple times in the same process
        // due to Prometheus global registry. In practice, metrics are created once.
        let metrics = MarketMetrics::new();

        metrics.observe_request("/api/summary", 200, 0.002);
        metrics.inc_analyst_generation("market_trends");
        metrics.inc_analyst_cache_hit("market_trends");
        metrics.inc_analyst_failure();
        metrics.inc_news_fallback();
        metrics.set_catalog_sizes(16, 10);
    }

    #[test]
    fn test_structured_logger_creation() {
        let logger = StructuredLogger::new("market-server");
        assert_eq!(logger.service_name, "market-server");
    }
}
