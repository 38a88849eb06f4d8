//! Hand-curated reference data for the GPU cloud market
//!
//! Everything lives in one immutable [`MarketSnapshot`], built once at
//! startup and passed by reference into the aggregation layer. Tests inject
//! fixture snapshots instead of the builtin catalog.

mod analytics;
mod history;
mod pricing;
mod regions;
mod specs;

use crate::models::*;
use std::collections::BTreeMap;

/// Immutable snapshot of every reference table.
///
/// Provider order and region order are the catalog's insertion order and are
/// part of the contract: tie-breaks in the aggregation layer fall back to it.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub gpus: Vec<GpuSpec>,
    pub providers: Vec<Provider>,
    /// GPU id -> chronologically sorted monthly price series
    pub history: BTreeMap<String, Vec<PricePoint>>,
    pub indicators: MarketIndicators,
    pub regions: Vec<RegionProfile>,
    pub workloads: Vec<WorkloadProfile>,
    pub utilization: Vec<ProviderUtilization>,
    pub reservations: Vec<ReservationProfile>,
    pub forecasts: Vec<PriceForecast>,
    pub moat: Vec<VendorMoat>,
    pub sustainability: Vec<ProviderSustainability>,
    pub carbon: Vec<CarbonFootprint>,
    pub supply_chain: Vec<SupplyRisk>,
    pub export_controls: Vec<ExportControlEvent>,
    pub model_fit: Vec<ModelClassFit>,
    pub news_feed: Vec<NewsItem>,
}

impl MarketSnapshot {
    /// Build the full hand-curated catalog.
    pub fn builtin() -> Self {
        Self {
            gpus: specs::gpu_specs(),
            providers: pricing::providers(),
            history: history::price_history(),
            indicators: regions::market_indicators(),
            regions: regions::regional_profiles(),
            workloads: analytics::workload_profiles(),
            utilization: analytics::utilization_metrics(),
            reservations: analytics::reservation_profiles(),
            forecasts: analytics::price_forecasts(),
            moat: analytics::vendor_moat(),
            sustainability: analytics::sustainability_index(),
            carbon: analytics::carbon_footprints(),
            supply_chain: analytics::supply_chain_risk(),
            export_controls: analytics::export_controls(),
            model_fit: analytics::model_hardware_fit(),
            news_feed: analytics::news_feed(),
        }
    }

    /// Look up a GPU spec by id.
    pub fn spec(&self, gpu_id: &str) -> Option<&GpuSpec> {
        self.gpus.iter().find(|g| g.id == gpu_id)
    }

    /// Historical series for a GPU, oldest first. Empty for unknown ids.
    pub fn history_for(&self, gpu_id: &str) -> &[PricePoint] {
        self.history.get(gpu_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_offering_references_a_known_gpu() {
        let snapshot = MarketSnapshot::builtin();
        for provider in &snapshot.providers {
            for offering in &provider.offerings {
                assert!(
                    snapshot.spec(&offering.gpu_id).is_some(),
                    "{} lists unknown GPU {}",
                    provider.id,
                    offering.gpu_id
                );
            }
        }
    }

    #[test]
    fn discounts_are_rates_and_3yr_dominates_1yr() {
        let snapshot = MarketSnapshot::builtin();
        for provider in &snapshot.providers {
            assert!((0.0..=1.0).contains(&provider.reserved_1yr_discount));
            assert!((0.0..=1.0).contains(&provider.reserved_3yr_discount));
            assert!(
                provider.reserved_3yr_discount >= provider.reserved_1yr_discount,
                "{}: 3yr discount below 1yr",
                provider.id
            );
        }
    }

    #[test]
    fn offering_prices_are_positive() {
        let snapshot = MarketSnapshot::builtin();
        for provider in &snapshot.providers {
            for offering in &provider.offerings {
                assert!(offering.hourly_usd > 0.0);
                for price in offering.regions.values() {
                    assert!(*price > 0.0, "{} has a zero regional price", offering.instance);
                }
            }
        }
    }

    #[test]
    fn history_is_chronological_and_non_empty() {
        let snapshot = MarketSnapshot::builtin();
        for (gpu_id, series) in &snapshot.history {
            assert!(!series.is_empty(), "{gpu_id} has an empty series");
            for pair in series.windows(2) {
                assert!(
                    pair[0].period < pair[1].period,
                    "{gpu_id} series out of order at {}",
                    pair[1].period
                );
            }
            assert!(snapshot.spec(gpu_id).is_some(), "history for unknown GPU {gpu_id}");
        }
    }

    #[test]
    fn history_bands_are_consistent() {
        let snapshot = MarketSnapshot::builtin();
        for series in snapshot.history.values() {
            for point in series {
                assert!(point.min_usd <= point.avg_usd && point.avg_usd <= point.max_usd);
            }
        }
    }

    #[test]
    fn unknown_gpu_has_empty_history() {
        let snapshot = MarketSnapshot::builtin();
        assert!(snapshot.history_for("TPU-V9").is_empty());
    }
}
