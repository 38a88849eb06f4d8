//! Narrow summaries: workloads, utilization, sustainability, supply chain

use super::offerings::{cheapest_offerings, HOURS_PER_MONTH};
use super::{round1, round2};
use crate::catalog::MarketSnapshot;
use crate::models::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Cheapest current rate for one recommended GPU.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentPrice {
    pub cheapest_usd: f64,
    pub provider: String,
    pub monthly_1gpu_usd: f64,
}

/// A workload profile enriched with live pricing for its recommended GPUs.
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadRecommendation {
    #[serde(flatten)]
    pub profile: WorkloadProfile,
    pub current_prices: BTreeMap<String, CurrentPrice>,
}

/// Workload profiles with the cheapest live rate attached to each
/// recommended GPU. GPUs without offerings are left out of the price map
/// but stay in the recommendation list.
pub fn workload_recommendations(snapshot: &MarketSnapshot) -> Vec<WorkloadRecommendation> {
    snapshot
        .workloads
        .iter()
        .map(|profile| {
            let mut current_prices = BTreeMap::new();
            for gpu_id in &profile.recommended {
                let offerings = cheapest_offerings(snapshot, gpu_id);
                if let Some(cheapest) = offerings.first() {
                    current_prices.insert(
                        gpu_id.clone(),
                        CurrentPrice {
                            cheapest_usd: cheapest.hourly_usd,
                            provider: cheapest.provider.clone(),
                            monthly_1gpu_usd: round2(cheapest.hourly_usd * HOURS_PER_MONTH),
                        },
                    );
                }
            }
            WorkloadRecommendation {
                profile: profile.clone(),
                current_prices,
            }
        })
        .collect()
}

/// Cross-provider utilization rollup for one GPU.
#[derive(Debug, Clone, Serialize)]
pub struct GpuUtilizationSummary {
    pub providers: BTreeMap<String, UtilizationMetrics>,
    pub avg_utilization_pct: f64,
    pub avg_efficiency_score: f64,
    pub provider_count: usize,
}

/// Pivot the per-provider utilization table into per-GPU averages.
pub fn utilization_summary(snapshot: &MarketSnapshot) -> BTreeMap<String, GpuUtilizationSummary> {
    let mut summary: BTreeMap<String, GpuUtilizationSummary> = BTreeMap::new();
    for entry in &snapshot.utilization {
        for (gpu_id, metrics) in &entry.gpus {
            let slot = summary
                .entry(gpu_id.clone())
                .or_insert_with(|| GpuUtilizationSummary {
                    providers: BTreeMap::new(),
                    avg_utilization_pct: 0.0,
                    avg_efficiency_score: 0.0,
                    provider_count: 0,
                });
            slot.providers.insert(entry.provider.clone(), metrics.clone());
            slot.avg_utilization_pct += metrics.avg_utilization_pct;
            slot.avg_efficiency_score += metrics.efficiency_score;
            slot.provider_count += 1;
        }
    }
    for slot in summary.values_mut() {
        let n = slot.provider_count as f64;
        slot.avg_utilization_pct = round1(slot.avg_utilization_pct / n);
        slot.avg_efficiency_score = round1(slot.avg_efficiency_score / n);
    }
    summary
}

/// Per-provider sustainability rollup with best and worst regions.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSustainabilitySummary {
    pub provider: String,
    pub regions: Vec<RegionFootprint>,
    pub avg_sustainability_score: f64,
    pub avg_green_energy_pct: f64,
    pub avg_pue: f64,
    pub best_region: String,
    pub worst_region: String,
}

/// Provider rollups plus the per-GPU carbon table.
#[derive(Debug, Clone, Serialize)]
pub struct SustainabilitySummary {
    pub providers: Vec<ProviderSustainabilitySummary>,
    pub gpu_carbon: Vec<CarbonFootprint>,
}

/// Average score, green share, and PUE per provider; the best and worst
/// regions are picked by sustainability score with ties going to the
/// region listed first. Providers with no region rows are left out.
pub fn sustainability_summary(snapshot: &MarketSnapshot) -> SustainabilitySummary {
    let providers = snapshot
        .sustainability
        .iter()
        .filter(|entry| !entry.regions.is_empty())
        .map(|entry| {
            let n = entry.regions.len() as f64;
            let score_sum: f64 = entry.regions.iter().map(|r| r.sustainability_score as f64).sum();
            let green_sum: f64 = entry.regions.iter().map(|r| r.green_energy_pct as f64).sum();
            let pue_sum: f64 = entry.regions.iter().map(|r| r.pue).sum();

            let mut best = &entry.regions[0];
            let mut worst = &entry.regions[0];
            for region in &entry.regions[1..] {
                if region.sustainability_score > best.sustainability_score {
                    best = region;
                }
                if region.sustainability_score < worst.sustainability_score {
                    worst = region;
                }
            }
            ProviderSustainabilitySummary {
                provider: entry.provider.clone(),
                regions: entry.regions.clone(),
                avg_sustainability_score: round1(score_sum / n),
                avg_green_energy_pct: round1(green_sum / n),
                avg_pue: round2(pue_sum / n),
                best_region: best.region.clone(),
                worst_region: worst.region.clone(),
            }
        })
        .collect();
    SustainabilitySummary {
        providers,
        gpu_carbon: snapshot.carbon.clone(),
    }
}

/// Vendor risk postures joined with the export-control timeline.
#[derive(Debug, Clone, Serialize)]
pub struct SupplyChainSummary {
    pub vendors: Vec<SupplyRisk>,
    pub export_controls: Vec<ExportControlEvent>,
}

pub fn supply_chain_summary(snapshot: &MarketSnapshot) -> SupplyChainSummary {
    SupplyChainSummary {
        vendors: snapshot.supply_chain.clone(),
        export_controls: snapshot.export_controls.clone(),
    }
}

/// Regional adoption profiles, catalog order.
pub fn regional_summary(snapshot: &MarketSnapshot) -> &[RegionProfile] {
    &snapshot.regions
}

/// Model-size-to-hardware fit matrix, catalog order.
pub fn model_fit_matrix(snapshot: &MarketSnapshot) -> &[ModelClassFit] {
    &snapshot.model_fit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures;

    fn util(avg: f64, efficiency: f64) -> UtilizationMetrics {
        UtilizationMetrics {
            avg_utilization_pct: avg,
            peak_pct: 95.0,
            off_peak_pct: 40.0,
            idle_cost_per_hr: 0.4,
            efficiency_score: efficiency,
            utilization_trend: vec![avg],
        }
    }

    #[test]
    fn workload_prices_skip_unlisted_gpus() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.gpus.push(fixtures::gpu("LISTED", 80, 900.0));
        snapshot.providers.push(fixtures::provider("P", 0.2, 0.4, &[("LISTED", 2.00)]));
        snapshot.workloads.push(WorkloadProfile {
            workload: "Training".to_string(),
            recommended: vec!["LISTED".to_string(), "UNLISTED".to_string()],
            min_gpus: 8,
            budget_monthly_low: 10_000,
            budget_monthly_high: 100_000,
            best_value: "P LISTED".to_string(),
        });

        let recs = workload_recommendations(&snapshot);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].profile.recommended.len(), 2);
        assert_eq!(recs[0].current_prices.len(), 1);
        let price = &recs[0].current_prices["LISTED"];
        assert_eq!(price.provider, "P");
        assert_eq!(price.monthly_1gpu_usd, 1460.0);
    }

    #[test]
    fn utilization_pivot_averages_across_providers() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.utilization.push(ProviderUtilization {
            provider: "P1".to_string(),
            gpus: [("G1".to_string(), util(80.0, 85.0))].into_iter().collect(),
        });
        snapshot.utilization.push(ProviderUtilization {
            provider: "P2".to_string(),
            gpus: [("G1".to_string(), util(61.0, 70.0))].into_iter().collect(),
        });

        let summary = utilization_summary(&snapshot);
        let g1 = &summary["G1"];
        assert_eq!(g1.provider_count, 2);
        assert_eq!(g1.avg_utilization_pct, 70.5);
        assert_eq!(g1.avg_efficiency_score, 77.5);
        assert!(g1.providers.contains_key("P1") && g1.providers.contains_key("P2"));
    }

    #[test]
    fn sustainability_rollup_picks_best_and_worst_regions() {
        let region = |name: &str, score: u32, green: u32, pue: f64| RegionFootprint {
            region: name.to_string(),
            pue,
            carbon_gco2_per_kwh: 200,
            green_energy_pct: green,
            water_usage_l_per_kwh: 1.0,
            sustainability_score: score,
        };
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.sustainability.push(ProviderSustainability {
            provider: "P".to_string(),
            regions: vec![
                region("mid", 80, 70, 1.10),
                region("best", 95, 90, 1.06),
                region("worst", 55, 30, 1.18),
            ],
        });

        let summary = sustainability_summary(&snapshot);
        let p = &summary.providers[0];
        assert_eq!(p.best_region, "best");
        assert_eq!(p.worst_region, "worst");
        assert_eq!(p.avg_sustainability_score, 76.7);
        assert_eq!(p.avg_green_energy_pct, 63.3);
        assert_eq!(p.avg_pue, 1.11);
    }

    #[test]
    fn sustainability_skips_providers_without_regions() {
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.sustainability.push(ProviderSustainability {
            provider: "NO-REGIONS".to_string(),
            regions: Vec::new(),
        });
        snapshot.sustainability.push(ProviderSustainability {
            provider: "P".to_string(),
            regions: vec![RegionFootprint {
                region: "only".to_string(),
                pue: 1.10,
                carbon_gco2_per_kwh: 200,
                green_energy_pct: 70,
                water_usage_l_per_kwh: 1.0,
                sustainability_score: 80,
            }],
        });

        let summary = sustainability_summary(&snapshot);
        assert_eq!(summary.providers.len(), 1);
        assert_eq!(summary.providers[0].provider, "P");
    }

    #[test]
    fn sustainability_ties_keep_first_region() {
        let region = |name: &str| RegionFootprint {
            region: name.to_string(),
            pue: 1.10,
            carbon_gco2_per_kwh: 200,
            green_energy_pct: 70,
            water_usage_l_per_kwh: 1.0,
            sustainability_score: 80,
        };
        let mut snapshot = fixtures::empty_snapshot();
        snapshot.sustainability.push(ProviderSustainability {
            provider: "P".to_string(),
            regions: vec![region("first"), region("second")],
        });

        let summary = sustainability_summary(&snapshot);
        assert_eq!(summary.providers[0].best_region, "first");
        assert_eq!(summary.providers[0].worst_region, "first");
    }
}
