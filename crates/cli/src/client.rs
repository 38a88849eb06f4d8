//! API client for communicating with the market server

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// API client for the market server
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(180))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url).context("Invalid API URL")?;

        Ok(Self { client, base_url })
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse response")
    }
}

// API response types

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub gpu_id: String,
    pub name: String,
    pub vendor: String,
    pub vram_gb: u32,
    pub arch: String,
    pub tier: String,
    pub cheapest_price: f64,
    pub cheapest_provider: String,
    pub most_expensive: f64,
    pub avg_price: f64,
    pub num_providers: usize,
    pub price_spread_pct: f64,
    pub monthly_change_pct: f64,
    pub flops_per_dollar: f64,
    pub vram_per_dollar: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtremeEntry {
    pub gpu: String,
    pub value: f64,
    pub at_price: f64,
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceMove {
    pub gpu: String,
    pub change_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSpread {
    pub gpu: String,
    pub num_providers: usize,
    pub price_spread_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSummary {
    pub generated_at: String,
    pub total_gpus_tracked: usize,
    pub total_providers_tracked: usize,
    pub best_flops_per_dollar: ExtremeEntry,
    pub best_vram_per_dollar: ExtremeEntry,
    pub biggest_price_drop: PriceMove,
    pub most_competitive_market: ProviderSpread,
    pub indicators: serde_json::Value,
    pub comparison_matrix: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuSpec {
    pub id: String,
    pub name: String,
    pub vendor: String,
    pub vram_gb: u32,
    pub arch: String,
    pub fp16_tflops: f64,
    pub fp32_tflops: f64,
    pub tdp_watts: u32,
    pub interconnect: String,
    pub release_year: u16,
    pub msrp_usd: u32,
    pub tier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricedOffering {
    pub provider: String,
    pub provider_name: String,
    pub provider_kind: String,
    pub instance: String,
    pub hourly_usd: f64,
    pub monthly_usd: f64,
    pub reserved_1yr_usd: f64,
    pub reserved_3yr_usd: f64,
    pub regions: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    pub period: String,
    pub avg_usd: f64,
    pub min_usd: f64,
    pub max_usd: f64,
    pub availability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuDetail {
    pub spec: GpuSpec,
    pub providers: Vec<PricedOffering>,
    pub price_trends: Vec<PricePoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offering {
    pub gpu_id: String,
    pub instance: String,
    pub gpus_per_instance: u32,
    pub hourly_usd: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub offerings: Vec<Offering>,
    pub reserved_1yr_discount: f64,
    pub reserved_3yr_discount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionProfile {
    pub region: String,
    pub market_share_pct: f64,
    pub yoy_growth_pct: f64,
    pub top_providers: Vec<String>,
    pub gpu_demand_index: u32,
    pub key_hubs: Vec<String>,
    pub avg_price_premium_pct: f64,
    pub energy_cost_kwh: f64,
    pub regulatory_score: f64,
    pub data_centers_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentPrice {
    pub cheapest_usd: f64,
    pub provider: String,
    pub monthly_1gpu_usd: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadRecommendation {
    pub workload: String,
    pub recommended: Vec<String>,
    pub min_gpus: u32,
    pub budget_monthly_low: u32,
    pub budget_monthly_high: u32,
    pub best_value: String,
    pub current_prices: BTreeMap<String, CurrentPrice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuUtilizationSummary {
    pub avg_utilization_pct: f64,
    pub avg_efficiency_score: f64,
    pub provider_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitmentSavings {
    pub spot_pct: f64,
    pub reserved_1yr_pct: f64,
    pub reserved_3yr_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitmentAdvice {
    pub utilization_band: String,
    pub commitment: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationProfile {
    pub gpu_id: String,
    pub on_demand_rate: f64,
    pub spot_avg_rate: f64,
    pub reserved_1yr_rate: f64,
    pub reserved_3yr_rate: f64,
    pub breakeven_monthly_hrs_1yr: u32,
    pub breakeven_monthly_hrs_3yr: u32,
    pub savings_at_utilization: BTreeMap<String, CommitmentSavings>,
    pub recommended_commitment: Vec<CommitmentAdvice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastBand {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceForecast {
    pub gpu_id: String,
    pub current_avg: f64,
    pub elasticity_coefficient: f64,
    pub forecast_3mo: ForecastBand,
    pub forecast_6mo: ForecastBand,
    pub forecast_12mo: ForecastBand,
    pub price_floor: f64,
    pub supply_signal: String,
    pub demand_signal: String,
    pub pattern_match: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorMoat {
    pub vendor: String,
    pub performance_score: u32,
    pub ecosystem_maturity: u32,
    pub software_compatibility: u32,
    pub price_performance_ratio: u32,
    pub moat_strength_score: u32,
    pub market_share_pct: f64,
    pub key_products: Vec<String>,
    pub parity_timeline: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSustainabilitySummary {
    pub provider: String,
    pub avg_sustainability_score: f64,
    pub avg_green_energy_pct: f64,
    pub avg_pue: f64,
    pub best_region: String,
    pub worst_region: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonFootprint {
    pub gpu_id: String,
    pub tdp_watts: u32,
    pub kwh_per_hour: f64,
    pub carbon_kg_per_year_us_avg: u32,
    pub carbon_kg_per_year_eu_nordic: u32,
    pub embodied_carbon_kg: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SustainabilitySummary {
    pub providers: Vec<ProviderSustainabilitySummary>,
    pub gpu_carbon: Vec<CarbonFootprint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyRisk {
    pub vendor: String,
    pub supply_risk_score: u32,
    pub tsmc_dependency_pct: u32,
    pub geopolitical_risk: String,
    pub lead_time_weeks: u32,
    pub risk_trend: String,
    pub bottlenecks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportControlEvent {
    pub date: String,
    pub regulation: String,
    pub category: String,
    pub target: String,
    pub status: String,
    pub impact: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyChainSummary {
    pub vendors: Vec<SupplyRisk>,
    pub export_controls: Vec<ExportControlEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareFit {
    pub optimal_config: String,
    pub throughput_tok_s: u32,
    pub cost_per_1m_tokens: f64,
    pub fit_score: u32,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelClassFit {
    pub size_class: String,
    pub models: Vec<String>,
    pub vram_required_gb: u32,
    pub gpus: BTreeMap<String, HardwareFit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub date: String,
    pub source: String,
    pub headline: String,
    pub category: String,
    pub sentiment: String,
    pub impact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub section: String,
    pub analysis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuAnalysisResponse {
    pub gpu: String,
    pub analysis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllAnalysesResponse {
    pub sections: BTreeMap<String, String>,
    pub generated_at: String,
}
