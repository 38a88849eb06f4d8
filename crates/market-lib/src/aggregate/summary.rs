//! Market-wide summary over the comparison matrix

use super::matrix::{comparison_matrix, ComparisonRow};
use crate::catalog::MarketSnapshot;
use crate::error::MarketError;
use crate::models::MarketIndicators;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A GPU that tops one of the per-dollar rankings.
#[derive(Debug, Clone, Serialize)]
pub struct ExtremeEntry {
    pub gpu: String,
    pub value: f64,
    pub at_price: f64,
    pub provider: String,
}

/// The GPU with the most negative month-over-month change.
///
/// When every tracked GPU rose this still reports the smallest rise;
/// callers phrase it as the "biggest drop" regardless.
#[derive(Debug, Clone, Serialize)]
pub struct PriceMove {
    pub gpu: String,
    pub change_pct: f64,
}

/// The GPU listed by the most providers.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSpread {
    pub gpu: String,
    pub num_providers: usize,
    pub price_spread_pct: f64,
}

/// Full market summary: headline extremes plus the matrix they came from.
#[derive(Debug, Clone, Serialize)]
pub struct MarketSummary {
    pub generated_at: DateTime<Utc>,
    pub total_gpus_tracked: usize,
    pub total_providers_tracked: usize,
    pub best_flops_per_dollar: ExtremeEntry,
    pub best_vram_per_dollar: ExtremeEntry,
    pub biggest_price_drop: PriceMove,
    pub most_competitive_market: ProviderSpread,
    pub indicators: MarketIndicators,
    pub comparison_matrix: Vec<ComparisonRow>,
}

// Extremes keep the first row on ties, matching matrix (descending price)
// order, so the result is deterministic for a given snapshot.
fn pick<'a, F: Fn(&ComparisonRow) -> f64>(
    rows: &'a [ComparisonRow],
    key: F,
    want_max: bool,
) -> &'a ComparisonRow {
    let mut best = &rows[0];
    for row in &rows[1..] {
        let better = if want_max {
            key(row) > key(best)
        } else {
            key(row) < key(best)
        };
        if better {
            best = row;
        }
    }
    best
}

/// Build the market summary, or fail when no GPU has a single offering.
pub fn market_summary(snapshot: &MarketSnapshot) -> Result<MarketSummary, MarketError> {
    let matrix = comparison_matrix(snapshot);
    if matrix.is_empty() {
        return Err(MarketError::InsufficientData);
    }

    let best_flops = pick(&matrix, |r| r.flops_per_dollar, true);
    let best_vram = pick(&matrix, |r| r.vram_per_dollar, true);
    let biggest_drop = pick(&matrix, |r| r.monthly_change_pct, false);
    let most_competitive = pick(&matrix, |r| r.num_providers as f64, true);

    Ok(MarketSummary {
        generated_at: Utc::now(),
        total_gpus_tracked: snapshot.gpus.len(),
        total_providers_tracked: snapshot.providers.len(),
        best_flops_per_dollar: ExtremeEntry {
            gpu: best_flops.name.clone(),
            value: best_flops.flops_per_dollar,
            at_price: best_flops.cheapest_price,
            provider: best_flops.cheapest_provider.clone(),
        },
        best_vram_per_dollar: ExtremeEntry {
            gpu: best_vram.name.clone(),
            value: best_vram.vram_per_dollar,
            at_price: best_vram.cheapest_price,
            provider: best_vram.cheapest_provider.clone(),
        },
        biggest_price_drop: PriceMove {
            gpu: biggest_drop.name.clone(),
            change_pct: biggest_drop.monthly_change_pct,
        },
        most_competitive_market: ProviderSpread {
            gpu: most_competitive.name.clone(),
            num_providers: most_competitive.num_providers,
            price_spread_pct: most_competitive.price_spread_pct,
        },
        indicators: snapshot.indicators.clone(),
        comparison_matrix: matrix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures;

    #[test]
    fn empty_market_is_insufficient_data() {
        let snapshot = fixtures::empty_snapshot();
        assert!(matches!(
            market_summary(&snapshot),
            Err(MarketError::InsufficientData)
        ));

        // GPUs without offerings still count as an empty matrix.
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("G1", 80, 900.0));
        assert!(matches!(
            market_summary(&snapshot),
            Err(MarketError::InsufficientData)
        ));
    }

    #[test]
    fn extremes_never_come_from_unlisted_gpus() {
        let mut snapshot = fixtures::empty_snapshot();
        // GHOST has spectacular specs but no offering anywhere.
        snapshot.gpus.push(fixtures::gpu("GHOST", 512, 9000.0));
        snapshot.gpus.push(fixtures::gpu("REAL", 80, 900.0));
        snapshot.providers.push(fixtures::provider("P", 0.2, 0.4, &[("REAL", 2.00)]));

        let summary = market_summary(&snapshot).unwrap();
        assert_eq!(summary.best_flops_per_dollar.gpu, "Test REAL");
        assert_eq!(summary.best_vram_per_dollar.gpu, "Test REAL");
        assert_eq!(summary.most_competitive_market.gpu, "Test REAL");
    }

    #[test]
    fn counts_cover_the_whole_snapshot_not_the_matrix() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("GHOST", 512, 9000.0));
        snapshot.gpus.push(fixtures::gpu("REAL", 80, 900.0));
        snapshot.providers.push(fixtures::provider("P", 0.2, 0.4, &[("REAL", 2.00)]));

        let summary = market_summary(&snapshot).unwrap();
        assert_eq!(summary.total_gpus_tracked, 2);
        assert_eq!(summary.total_providers_tracked, 1);
        assert_eq!(summary.comparison_matrix.len(), 1);
    }

    #[test]
    fn biggest_drop_is_minimum_change_even_when_all_rise() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("UP-FAST", 80, 900.0));
        snapshot.gpus.push(fixtures::gpu("UP-SLOW", 80, 900.0));
        snapshot.providers.push(fixtures::provider(
            "P",
            0.2,
            0.4,
            &[("UP-FAST", 2.00), ("UP-SLOW", 2.00)],
        ));
        snapshot.history.insert(
            "UP-FAST".to_string(),
            vec![fixtures::point("2026-01", 2.00), fixtures::point("2026-02", 2.40)],
        );
        snapshot.history.insert(
            "UP-SLOW".to_string(),
            vec![fixtures::point("2026-01", 2.00), fixtures::point("2026-02", 2.02)],
        );

        let summary = market_summary(&snapshot).unwrap();
        assert_eq!(summary.biggest_price_drop.gpu, "Test UP-SLOW");
        assert_eq!(summary.biggest_price_drop.change_pct, 1.0);
    }

    #[test]
    fn repeated_summaries_agree_on_data_fields() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("A", 80, 900.0));
        snapshot.gpus.push(fixtures::gpu("B", 24, 300.0));
        snapshot.providers.push(fixtures::provider("P1", 0.2, 0.4, &[("A", 2.00), ("B", 0.40)]));
        snapshot.providers.push(fixtures::provider("P2", 0.1, 0.3, &[("A", 2.50)]));

        let first = market_summary(&snapshot).unwrap();
        let second = market_summary(&snapshot).unwrap();
        assert_eq!(
            serde_json::to_value(&first.comparison_matrix).unwrap(),
            serde_json::to_value(&second.comparison_matrix).unwrap()
        );
        assert_eq!(first.best_flops_per_dollar.gpu, second.best_flops_per_dollar.gpu);
        assert_eq!(first.biggest_price_drop.change_pct, second.biggest_price_drop.change_pct);
        assert_eq!(
            first.most_competitive_market.num_providers,
            second.most_competitive_market.num_providers
        );
    }

    #[test]
    fn two_gpu_scenario_picks_expected_extremes() {
        let mut snapshot = fixtures::empty_snapshot();
        // A: 900 TF at $2.00 -> 450 TF/$; B: 900 TF at $1.50 -> 600 TF/$.
        snapshot.gpus.push(fixtures::gpu("A", 80, 900.0));
        snapshot.gpus.push(fixtures::gpu("B", 80, 900.0));
        snapshot.providers.push(fixtures::provider("P", 0.25, 0.50, &[("A", 2.00), ("B", 1.50)]));

        let summary = market_summary(&snapshot).unwrap();
        assert_eq!(summary.best_flops_per_dollar.gpu, "Test B");
        assert_eq!(summary.best_flops_per_dollar.value, 600.0);
        assert_eq!(summary.best_flops_per_dollar.at_price, 1.50);

        let row_b = summary
            .comparison_matrix
            .iter()
            .find(|r| r.gpu_id == "B")
            .unwrap();
        assert_eq!(row_b.cheapest_price, 1.50);
        let offerings = crate::aggregate::cheapest_offerings(&snapshot, "B");
        assert!((offerings[0].reserved_3yr_usd - 0.75).abs() < 1e-9);
    }
}
