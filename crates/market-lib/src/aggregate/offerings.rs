//! Per-GPU offering lookups

use crate::catalog::MarketSnapshot;
use crate::models::{PricePoint, ProviderKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// Billing-month convention: 730 hours.
pub const HOURS_PER_MONTH: f64 = 730.0;

/// One provider's offering for a GPU with derived price points.
#[derive(Debug, Clone, Serialize)]
pub struct PricedOffering {
    pub provider: String,
    pub provider_name: String,
    pub provider_kind: ProviderKind,
    pub instance: String,
    pub hourly_usd: f64,
    pub monthly_usd: f64,
    pub reserved_1yr_usd: f64,
    pub reserved_3yr_usd: f64,
    pub regions: BTreeMap<String, f64>,
}

/// Every provider offering for `gpu_id`, cheapest hourly rate first.
///
/// Providers at equal rates keep snapshot order. Unknown GPUs yield an
/// empty vector, never an error.
pub fn cheapest_offerings(snapshot: &MarketSnapshot, gpu_id: &str) -> Vec<PricedOffering> {
    let mut results: Vec<PricedOffering> = Vec::new();
    for provider in &snapshot.providers {
        if let Some(offering) = provider.offerings.iter().find(|o| o.gpu_id == gpu_id) {
            results.push(PricedOffering {
                provider: provider.id.clone(),
                provider_name: provider.name.clone(),
                provider_kind: provider.kind,
                instance: offering.instance.clone(),
                hourly_usd: offering.hourly_usd,
                monthly_usd: offering.hourly_usd * HOURS_PER_MONTH,
                reserved_1yr_usd: offering.hourly_usd * (1.0 - provider.reserved_1yr_discount),
                reserved_3yr_usd: offering.hourly_usd * (1.0 - provider.reserved_3yr_discount),
                regions: offering.regions.clone(),
            });
        }
    }
    results.sort_by(|a, b| a.hourly_usd.total_cmp(&b.hourly_usd));
    results
}

/// Historical monthly series for a GPU, oldest first. Empty for unknown ids.
pub fn price_trends<'a>(snapshot: &'a MarketSnapshot, gpu_id: &str) -> &'a [PricePoint] {
    snapshot.history_for(gpu_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures;

    #[test]
    fn offerings_sorted_cheapest_first() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("G1", 80, 900.0));
        snapshot.providers.push(fixtures::provider("Pricey", 0.4, 0.6, &[("G1", 3.00)]));
        snapshot.providers.push(fixtures::provider("Cheap", 0.2, 0.3, &[("G1", 1.20)]));
        snapshot.providers.push(fixtures::provider("Middle", 0.1, 0.2, &[("G1", 2.10)]));

        let offerings = cheapest_offerings(&snapshot, "G1");
        let order: Vec<&str> = offerings.iter().map(|o| o.provider.as_str()).collect();
        assert_eq!(order, ["Cheap", "Middle", "Pricey"]);
    }

    #[test]
    fn monthly_and_reserved_rates_derive_from_hourly() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("G1", 80, 900.0));
        snapshot.providers.push(fixtures::provider("P", 0.25, 0.50, &[("G1", 2.00)]));

        let offerings = cheapest_offerings(&snapshot, "G1");
        assert_eq!(offerings.len(), 1);
        let o = &offerings[0];
        assert!((o.monthly_usd - 1460.0).abs() < 1e-9);
        assert!((o.reserved_1yr_usd - 1.50).abs() < 1e-9);
        assert!((o.reserved_3yr_usd - 1.00).abs() < 1e-9);
        assert!(o.reserved_3yr_usd <= o.reserved_1yr_usd);
        assert!(o.reserved_1yr_usd <= o.hourly_usd);
    }

    #[test]
    fn zero_discount_provider_keeps_on_demand_rate() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("G1", 80, 900.0));
        snapshot.providers.push(fixtures::provider("Spot", 0.0, 0.0, &[("G1", 0.90)]));

        let offerings = cheapest_offerings(&snapshot, "G1");
        assert!((offerings[0].reserved_1yr_usd - 0.90).abs() < 1e-9);
        assert!((offerings[0].reserved_3yr_usd - 0.90).abs() < 1e-9);
    }

    #[test]
    fn unknown_gpu_yields_empty_vec() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.providers.push(fixtures::provider("P", 0.2, 0.4, &[("G1", 1.00)]));
        assert!(cheapest_offerings(&snapshot, "NO-SUCH-GPU").is_empty());
    }

    #[test]
    fn ties_keep_snapshot_provider_order() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("G1", 80, 900.0));
        snapshot.providers.push(fixtures::provider("First", 0.1, 0.2, &[("G1", 1.00)]));
        snapshot.providers.push(fixtures::provider("Second", 0.1, 0.2, &[("G1", 1.00)]));

        let offerings = cheapest_offerings(&snapshot, "G1");
        assert_eq!(offerings[0].provider, "First");
        assert_eq!(offerings[1].provider, "Second");
    }
}
