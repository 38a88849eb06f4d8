//! Core data models for the GPU pricing catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// GPU vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vendor {
    #[serde(rename = "NVIDIA")]
    Nvidia,
    #[serde(rename = "AMD")]
    Amd,
}

/// Coarse market tier of a GPU model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Ultra,
    Flagship,
    High,
    Mid,
    Consumer,
    Legacy,
}

/// Hardware specification of one GPU model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuSpec {
    pub id: String,
    pub name: String,
    pub vendor: Vendor,
    pub vram_gb: u32,
    pub arch: String,
    pub fp16_tflops: f64,
    pub fp32_tflops: f64,
    pub tdp_watts: u32,
    pub interconnect: String,
    pub release_year: u16,
    pub msrp_usd: u32,
    pub tier: Tier,
}

/// Kind of compute provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Cloud,
    Marketplace,
}

/// One GPU SKU listed by a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offering {
    pub gpu_id: String,
    pub instance: String,
    pub gpus_per_instance: u32,
    /// On-demand price, $/hr per GPU
    pub hourly_usd: f64,
    /// Per-region price overrides, $/hr per GPU
    pub regions: BTreeMap<String, f64>,
}

/// A cloud or marketplace provider with its price list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub kind: ProviderKind,
    pub offerings: Vec<Offering>,
    /// Discount rate for a 1-year commitment, 0.0..=1.0
    pub reserved_1yr_discount: f64,
    /// Discount rate for a 3-year commitment, 0.0..=1.0
    pub reserved_3yr_discount: f64,
}

/// Qualitative availability label, display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Scarce,
    Limited,
    Moderate,
    Good,
    Abundant,
}

/// One month of observed pricing for a GPU
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    /// Period in YYYY-MM form
    pub period: String,
    pub avg_usd: f64,
    pub min_usd: f64,
    pub max_usd: f64,
    pub availability: Availability,
}

/// Stock snapshot for a tracked vendor ticker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockIndicator {
    pub ticker: String,
    pub current: f64,
    pub change_1m_pct: f64,
    pub change_3m_pct: f64,
    pub change_ytd_pct: f64,
    pub high_52w: f64,
    pub low_52w: f64,
}

/// Lead-time status for a GPU model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadTime {
    pub gpu_id: String,
    pub weeks: u32,
    pub status: String,
    pub note: String,
}

/// Macro demand indicators embedded in the market summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketIndicators {
    pub nvidia_stock: StockIndicator,
    pub amd_stock: StockIndicator,
    /// Year -> market size, $B
    pub gpu_market_size_bn: BTreeMap<String, f64>,
    /// Year -> AI capex, $B
    pub ai_capex_bn: BTreeMap<String, f64>,
    /// YYYY-MM -> flagship lead time in weeks
    pub flagship_lead_time_weeks: BTreeMap<String, u32>,
    /// YYYY-MM -> AMD datacenter GPU share, %
    pub amd_market_share_pct: BTreeMap<String, f64>,
    pub gpu_lead_times: Vec<LeadTime>,
}

/// Regional adoption and demand profile
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
    /// GPU id -> observed regional price band
    pub gpu_pricing: BTreeMap<String, RegionalPriceBand>,
}

/// Regional avg/low/high price band for one GPU
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalPriceBand {
    pub avg_usd: f64,
    pub low_usd: f64,
    pub high_usd: f64,
}

/// Workload class with recommended GPUs and budget band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadProfile {
    pub workload: String,
    pub recommended: Vec<String>,
    pub min_gpus: u32,
    pub budget_monthly_low: u32,
    pub budget_monthly_high: u32,
    pub best_value: String,
}

/// Utilization metrics for one GPU at one provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtilizationMetrics {
    pub avg_utilization_pct: f64,
    pub peak_pct: f64,
    pub off_peak_pct: f64,
    pub idle_cost_per_hr: f64,
    pub efficiency_score: f64,
    pub utilization_trend: Vec<f64>,
}

/// Per-provider utilization table, keyed by GPU id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderUtilization {
    pub provider: String,
    pub gpus: BTreeMap<String, UtilizationMetrics>,
}

/// Commitment-term economics for one GPU
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationProfile {
    pub gpu_id: String,
    pub on_demand_rate: f64,
    pub spot_avg_rate: f64,
    pub reserved_1yr_rate: f64,
    pub reserved_3yr_rate: f64,
    pub breakeven_monthly_hrs_1yr: u32,
    pub breakeven_monthly_hrs_3yr: u32,
    /// Utilization % -> savings % per commitment type
    pub savings_at_utilization: BTreeMap<String, CommitmentSavings>,
    pub recommended_commitment: Vec<CommitmentAdvice>,
}

/// Savings percentages at one utilization level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitmentSavings {
    pub spot_pct: f64,
    pub reserved_1yr_pct: f64,
    pub reserved_3yr_pct: f64,
}

/// Commitment recommendation for one utilization band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitmentAdvice {
    pub utilization_band: String,
    pub commitment: String,
    pub reason: String,
}

/// Forward price estimate band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastBand {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
    pub confidence: f64,
}

/// Price forecast for one GPU
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

/// Competitive position of one accelerator vendor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorMoat {
    pub vendor: String,
    pub performance_score: u32,
    pub ecosystem_maturity: u32,
    pub software_compatibility: u32,
    pub price_performance_ratio: u32,
    pub moat_strength_score: u32,
    pub market_share_pct: f64,
    pub market_share_trend: Vec<f64>,
    pub key_products: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub parity_timeline: Option<String>,
}

/// Datacenter sustainability metrics for one provider region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionFootprint {
    pub region: String,
    pub pue: f64,
    pub carbon_gco2_per_kwh: u32,
    pub green_energy_pct: u32,
    pub water_usage_l_per_kwh: f64,
    pub sustainability_score: u32,
}

/// Per-provider sustainability index, regions in catalog order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSustainability {
    pub provider: String,
    pub regions: Vec<RegionFootprint>,
}

/// Power and carbon profile of one GPU model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonFootprint {
    pub gpu_id: String,
    pub tdp_watts: u32,
    pub typical_watts: u32,
    pub kwh_per_hour: f64,
    pub annual_kwh_full_util: u32,
    pub carbon_kg_per_year_us_avg: u32,
    pub carbon_kg_per_year_eu_nordic: u32,
    pub embodied_carbon_kg: u32,
}

/// Supply-chain risk posture of one vendor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyRisk {
    pub vendor: String,
    pub supply_risk_score: u32,
    pub tsmc_dependency_pct: u32,
    pub geopolitical_risk: String,
    pub lead_time_weeks: u32,
    pub lead_time_trend: Vec<u32>,
    pub export_control_impact: String,
    pub bottlenecks: Vec<String>,
    pub risk_trend: String,
    pub single_source_components: Vec<String>,
    pub inventory_weeks: u32,
}

/// One export-control or industrial-policy event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportControlEvent {
    pub date: String,
    pub regulation: String,
    pub category: String,
    pub target: String,
    pub status: String,
    pub impact: String,
    pub affected_gpus: Vec<String>,
    pub description: String,
}

/// How well one GPU serves a model size class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareFit {
    pub optimal_config: String,
    pub batch_size: u32,
    pub throughput_tok_s: u32,
    pub cost_per_1m_tokens: f64,
    pub vram_headroom_pct: u32,
    pub fit_score: u32,
    pub notes: String,
}

/// Model size class with per-GPU fit entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelClassFit {
    pub size_class: String,
    pub models: Vec<String>,
    pub vram_required_gb: u32,
    pub gpus: BTreeMap<String, HardwareFit>,
}

/// One market news headline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub date: String,
    pub source: String,
    pub headline: String,
    pub category: String,
    pub sentiment: String,
    pub impact: String,
}
