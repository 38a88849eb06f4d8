//! Pure aggregation over a [`MarketSnapshot`](crate::catalog::MarketSnapshot)
//!
//! Every function here is a read-only fold over the snapshot it is handed.
//! Nothing in this module touches the clock except the summary timestamp,
//! and nothing performs I/O.

mod matrix;
mod offerings;
mod secondary;
mod summary;

pub use matrix::{comparison_matrix, ComparisonRow};
pub use offerings::{cheapest_offerings, price_trends, PricedOffering, HOURS_PER_MONTH};
pub use secondary::{
    model_fit_matrix, regional_summary, supply_chain_summary, sustainability_summary,
    utilization_summary, workload_recommendations, CurrentPrice, GpuUtilizationSummary,
    ProviderSustainabilitySummary, SupplyChainSummary, SustainabilitySummary,
    WorkloadRecommendation,
};
pub use summary::{market_summary, ExtremeEntry, MarketSummary, PriceMove, ProviderSpread};

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::catalog::MarketSnapshot;
    use crate::models::*;
    use std::collections::BTreeMap;

    pub fn empty_snapshot() -> MarketSnapshot {
        MarketSnapshot {
            gpus: Vec::new(),
            providers: Vec::new(),
            history: BTreeMap::new(),
            indicators: indicators(),
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

    pub fn indicators() -> MarketIndicators {
        MarketIndicators {
            nvidia_stock: stock("NVDA"),
            amd_stock: stock("AMD"),
            gpu_market_size_bn: BTreeMap::new(),
            ai_capex_bn: BTreeMap::new(),
            flagship_lead_time_weeks: BTreeMap::new(),
            amd_market_share_pct: BTreeMap::new(),
            gpu_lead_times: Vec::new(),
        }
    }

    fn stock(ticker: &str) -> StockIndicator {
        StockIndicator {
            ticker: ticker.to_string(),
            current: 100.0,
            change_1m_pct: 0.0,
            change_3m_pct: 0.0,
            change_ytd_pct: 0.0,
            high_52w: 120.0,
            low_52w: 80.0,
        }
    }

    pub fn gpu(id: &str, vram_gb: u32, fp16_tflops: f64) -> GpuSpec {
        GpuSpec {
            id: id.to_string(),
            name: format!("Test {id}"),
            vendor: Vendor::Nvidia,
            vram_gb,
            arch: "TestArch".to_string(),
            fp16_tflops,
            fp32_tflops: fp16_tflops / 2.0,
            tdp_watts: 400,
            interconnect: "PCIe".to_string(),
            release_year: 2024,
            msrp_usd: 10_000,
            tier: Tier::High,
        }
    }

    pub fn provider(id: &str, disc_1yr: f64, disc_3yr: f64, offers: &[(&str, f64)]) -> Provider {
        Provider {
            id: id.to_string(),
            name: format!("{id} Inc"),
            kind: ProviderKind::Cloud,
            offerings: offers
                .iter()
                .map(|(gpu_id, hourly)| Offering {
                    gpu_id: gpu_id.to_string(),
                    instance: format!("{}-node", gpu_id.to_lowercase()),
                    gpus_per_instance: 1,
                    hourly_usd: *hourly,
                    regions: BTreeMap::new(),
                })
                .collect(),
            reserved_1yr_discount: disc_1yr,
            reserved_3yr_discount: disc_3yr,
        }
    }

    pub fn point(period: &str, avg: f64) -> PricePoint {
        PricePoint {
            period: period.to_string(),
            avg_usd: avg,
            min_usd: avg * 0.8,
            max_usd: avg * 1.2,
            availability: Availability::Good,
        }
    }
}
