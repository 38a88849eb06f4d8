//! Cross-GPU price comparison matrix

use super::offerings::cheapest_offerings;
use super::{round1, round2};
use crate::catalog::MarketSnapshot;
use crate::models::{ProviderKind, Tier, Vendor};
use serde::Serialize;

/// One row of the comparison matrix: a GPU with market-wide price stats.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub gpu_id: String,
    pub name: String,
    pub vendor: Vendor,
    pub vram_gb: u32,
    pub arch: String,
    pub tier: Tier,
    pub cheapest_price: f64,
    pub cheapest_provider: String,
    pub cheapest_provider_kind: ProviderKind,
    pub most_expensive: f64,
    pub avg_price: f64,
    pub num_providers: usize,
    pub price_spread_pct: f64,
    pub monthly_change_pct: f64,
    pub flops_per_dollar: f64,
    pub vram_per_dollar: f64,
}

/// One matrix row per GPU with at least one offering, sorted by cheapest
/// hourly rate descending (priciest hardware first).
///
/// Month-over-month change comes from the two latest history periods and is
/// exactly 0.0 when fewer than two exist. The per-dollar and spread ratios
/// are 0.0 when the cheapest price is zero.
pub fn comparison_matrix(snapshot: &MarketSnapshot) -> Vec<ComparisonRow> {
    let mut rows: Vec<ComparisonRow> = Vec::new();
    for spec in &snapshot.gpus {
        let offerings = cheapest_offerings(snapshot, &spec.id);
        let (first, last) = match (offerings.first(), offerings.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => continue,
        };
        let cheapest = first.hourly_usd;
        let most_expensive = last.hourly_usd;
        let avg_price =
            offerings.iter().map(|o| o.hourly_usd).sum::<f64>() / offerings.len() as f64;

        let series = snapshot.history_for(&spec.id);
        let monthly_change_pct = match series {
            [.., prev, latest] => round1((latest.avg_usd - prev.avg_usd) / prev.avg_usd * 100.0),
            _ => 0.0,
        };

        let guard = |value: f64| if cheapest > 0.0 { round1(value) } else { 0.0 };
        rows.push(ComparisonRow {
            gpu_id: spec.id.clone(),
            name: spec.name.clone(),
            vendor: spec.vendor,
            vram_gb: spec.vram_gb,
            arch: spec.arch.clone(),
            tier: spec.tier,
            cheapest_price: cheapest,
            cheapest_provider: first.provider.clone(),
            cheapest_provider_kind: first.provider_kind,
            most_expensive,
            avg_price: round2(avg_price),
            num_providers: offerings.len(),
            price_spread_pct: guard((most_expensive - cheapest) / cheapest * 100.0),
            monthly_change_pct,
            flops_per_dollar: guard(spec.fp16_tflops / cheapest),
            vram_per_dollar: guard(spec.vram_gb as f64 / cheapest),
        });
    }
    rows.sort_by(|a, b| b.cheapest_price.total_cmp(&a.cheapest_price));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures;

    #[test]
    fn gpus_without_offerings_are_skipped() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("LISTED", 80, 800.0));
        snapshot.gpus.push(fixtures::gpu("UNLISTED", 48, 300.0));
        snapshot.providers.push(fixtures::provider("P", 0.2, 0.4, &[("LISTED", 2.00)]));

        let rows = comparison_matrix(&snapshot);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].gpu_id, "LISTED");
    }

    #[test]
    fn rows_sorted_by_cheapest_price_descending() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("CHEAP", 24, 300.0));
        snapshot.gpus.push(fixtures::gpu("DEAR", 192, 2000.0));
        snapshot.gpus.push(fixtures::gpu("MID", 80, 900.0));
        snapshot.providers.push(fixtures::provider(
            "P",
            0.2,
            0.4,
            &[("CHEAP", 0.30), ("DEAR", 4.50), ("MID", 2.00)],
        ));

        let order: Vec<String> = comparison_matrix(&snapshot)
            .into_iter()
            .map(|r| r.gpu_id)
            .collect();
        assert_eq!(order, ["DEAR", "MID", "CHEAP"]);
    }

    #[test]
    fn month_over_month_change_uses_two_latest_periods() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("G1", 80, 900.0));
        snapshot.providers.push(fixtures::provider("P", 0.2, 0.4, &[("G1", 2.00)]));
        snapshot.history.insert(
            "G1".to_string(),
            vec![
                fixtures::point("2025-11", 9.99),
                fixtures::point("2025-12", 2.00),
                fixtures::point("2026-01", 1.80),
            ],
        );

        let rows = comparison_matrix(&snapshot);
        // (1.80 - 2.00) / 2.00 * 100 = -10.0
        assert_eq!(rows[0].monthly_change_pct, -10.0);
    }

    #[test]
    fn short_history_means_zero_change() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("G1", 80, 900.0));
        snapshot.providers.push(fixtures::provider("P", 0.2, 0.4, &[("G1", 2.00)]));
        snapshot
            .history
            .insert("G1".to_string(), vec![fixtures::point("2026-01", 2.00)]);

        assert_eq!(comparison_matrix(&snapshot)[0].monthly_change_pct, 0.0);
    }

    #[test]
    fn no_history_means_zero_change() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("G1", 80, 900.0));
        snapshot.providers.push(fixtures::provider("P", 0.2, 0.4, &[("G1", 2.00)]));
        assert_eq!(comparison_matrix(&snapshot)[0].monthly_change_pct, 0.0);
    }

    #[test]
    fn per_dollar_ratios_round_to_one_decimal() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("G1", 80, 1000.0));
        snapshot.providers.push(fixtures::provider("P", 0.2, 0.4, &[("G1", 2.00)]));

        let row = &comparison_matrix(&snapshot)[0];
        assert_eq!(row.flops_per_dollar, 500.0);
        assert_eq!(row.vram_per_dollar, 40.0);
    }

    #[test]
    fn zero_price_guards_ratios_to_zero() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("G1", 80, 1000.0));
        snapshot.providers.push(fixtures::provider("Free", 0.0, 0.0, &[("G1", 0.0)]));

        let row = &comparison_matrix(&snapshot)[0];
        assert_eq!(row.flops_per_dollar, 0.0);
        assert_eq!(row.vram_per_dollar, 0.0);
        assert_eq!(row.price_spread_pct, 0.0);
    }

    #[test]
    fn spread_and_avg_cover_all_providers() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("G1", 80, 900.0));
        snapshot.providers.push(fixtures::provider("A", 0.2, 0.4, &[("G1", 1.00)]));
        snapshot.providers.push(fixtures::provider("B", 0.2, 0.4, &[("G1", 2.00)]));
        snapshot.providers.push(fixtures::provider("C", 0.2, 0.4, &[("G1", 3.00)]));

        let row = &comparison_matrix(&snapshot)[0];
        assert_eq!(row.num_providers, 3);
        assert_eq!(row.cheapest_provider, "A");
        assert_eq!(row.avg_price, 2.00);
        assert_eq!(row.price_spread_pct, 200.0);
    }
}
