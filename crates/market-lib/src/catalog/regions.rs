//! Macro demand indicators and regional adoption profiles

use crate::models::{
    LeadTime, MarketIndicators, RegionProfile, RegionalPriceBand, StockIndicator,
};
use std::collections::BTreeMap;

fn lead_time(gpu_id: &str, weeks: u32, status: &str, note: &str) -> LeadTime {
    LeadTime {
        gpu_id: gpu_id.to_string(),
        weeks,
        status: status.to_string(),
        note: note.to_string(),
    }
}

pub(super) fn market_indicators() -> MarketIndicators {
    MarketIndicators {
        nvidia_stock: StockIndicator {
            ticker: "NVDA".to_string(),
            current: 138.25,
            change_1m_pct: 4.2,
            change_3m_pct: 12.8,
            change_ytd_pct: 8.5,
            high_52w: 153.13,
            low_52w: 75.61,
        },
        amd_stock: StockIndicator {
            ticker: "AMD".to_string(),
            current: 119.50,
            change_1m_pct: -2.1,
            change_3m_pct: 5.3,
            change_ytd_pct: 3.8,
            high_52w: 164.46,
            low_52w: 100.55,
        },
        gpu_market_size_bn: [
            ("2023", 52.4),
            ("2024", 71.2),
            ("2025", 95.8),
            ("2026_est", 128.5),
            ("2027_est", 168.3),
        ]
        .into_iter()
        .map(|(y, v)| (y.to_string(), v))
        .collect(),
        ai_capex_bn: [
            ("2023", 55.0),
            ("2024", 95.0),
            ("2025_est", 150.0),
            ("2026_est", 210.0),
            ("2027_est", 280.0),
        ]
        .into_iter()
        .map(|(y, v)| (y.to_string(), v))
        .collect(),
        flagship_lead_time_weeks: [
            ("2023-01", 48),
            ("2023-06", 40),
            ("2023-12", 28),
            ("2024-03", 16),
            ("2024-06", 10),
            ("2024-09", 8),
            ("2024-11", 52),
            ("2025-01", 48),
            ("2025-06", 40),
            ("2025-12", 36),
            ("2026-02", 36),
        ]
        .into_iter()
        .map(|(p, w)| (p.to_string(), w))
        .collect(),
        amd_market_share_pct: [
            ("2023-01", 3.0),
            ("2023-06", 5.0),
            ("2024-01", 8.0),
            ("2024-06", 12.0),
            ("2025-01", 16.0),
            ("2025-06", 19.0),
            ("2026-01", 22.0),
        ]
        .into_iter()
        .map(|(p, v)| (p.to_string(), v))
        .collect(),
        gpu_lead_times: vec![
            lead_time("B200", 4, "available", "Shipping, broadly available"),
            lead_time("GB200", 10, "limited", "NVL72 racks ramping"),
            lead_time("H200", 12, "limited", "8-20 wk depending on volume"),
            lead_time("H100-SXM", 2, "available", "Broadly available"),
            lead_time("H100-PCIe", 2, "available", "Broadly available"),
            lead_time("A100-80GB", 1, "available", "Commodity"),
            lead_time("A100-40GB", 1, "available", "Commodity"),
            lead_time("MI300X", 10, "limited", "Ramping production"),
            lead_time("MI325X", 14, "limited", "Recently launched"),
            lead_time("L40S", 1, "available", "Broadly available"),
            lead_time("RTX-4090", 1, "available", "Consumer stock available"),
        ],
    }
}

fn band(avg: f64, low: f64, high: f64) -> RegionalPriceBand {
    RegionalPriceBand {
        avg_usd: avg,
        low_usd: low,
        high_usd: high,
    }
}

fn pricing(entries: &[(&str, RegionalPriceBand)]) -> BTreeMap<String, RegionalPriceBand> {
    entries
        .iter()
        .map(|(gpu, b)| (gpu.to_string(), b.clone()))
        .collect()
}

pub(super) fn regional_profiles() -> Vec<RegionProfile> {
    vec![
        RegionProfile {
            region: "North America".to_string(),
            market_share_pct: 42.5,
            yoy_growth_pct: 28.3,
            top_providers: vec!["AWS", "GCP", "Azure", "CoreWeave", "Lambda"]
                .into_iter()
                .map(String::from)
                .collect(),
            gpu_demand_index: 95,
            key_hubs: vec!["Virginia", "Oregon", "Texas", "California"]
                .into_iter()
                .map(String::from)
                .collect(),
            avg_price_premium_pct: 0.0,
            energy_cost_kwh: 0.065,
            regulatory_score: 8.5,
            data_centers_count: 1850,
            gpu_pricing: pricing(&[
                ("H100-SXM", band(2.80, 2.15, 4.28)),
                ("B200", band(4.50, 3.75, 5.35)),
                ("A100-80GB", band(1.55, 1.10, 2.52)),
                ("MI300X", band(2.30, 1.85, 3.15)),
            ]),
        },
        RegionProfile {
            region: "Europe".to_string(),
            market_share_pct: 22.8,
            yoy_growth_pct: 32.1,
            top_providers: vec!["Azure", "GCP", "AWS", "OVH"]
                .into_iter()
                .map(String::from)
                .collect(),
            gpu_demand_index: 78,
            key_hubs: vec!["Frankfurt", "Dublin", "Amsterdam", "London", "Paris"]
                .into_iter()
                .map(String::from)
                .collect(),
            avg_price_premium_pct: 10.0,
            energy_cost_kwh: 0.12,
            regulatory_score: 7.0,
            data_centers_count: 920,
            gpu_pricing: pricing(&[
                ("H100-SXM", band(3.50, 2.35, 4.73)),
                ("B200", band(5.40, 4.68, 5.89)),
                ("A100-80GB", band(1.85, 1.25, 2.84)),
                ("MI300X", band(2.75, 2.05, 3.47)),
            ]),
        },
        RegionProfile {
            region: "Asia Pacific".to_string(),
            market_share_pct: 24.3,
            yoy_growth_pct: 38.7,
            top_providers: vec!["AWS", "GCP", "Azure", "Alibaba", "Tencent"]
                .into_iter()
                .map(String::from)
                .collect(),
            gpu_demand_index: 88,
            key_hubs: vec!["Tokyo", "Singapore", "Mumbai", "Sydney", "Seoul"]
                .into_iter()
                .map(String::from)
                .collect(),
            avg_price_premium_pct: 15.0,
            energy_cost_kwh: 0.09,
            regulatory_score: 6.5,
            data_centers_count: 780,
            gpu_pricing: pricing(&[
                ("H100-SXM", band(3.95, 2.50, 5.14)),
                ("B200", band(5.90, 5.58, 6.42)),
                ("A100-80GB", band(2.10, 1.35, 3.03)),
                ("MI300X", band(2.95, 2.40, 3.68)),
            ]),
        },
        RegionProfile {
            region: "Middle East & Africa".to_string(),
            market_share_pct: 4.2,
            yoy_growth_pct: 52.4,
            top_providers: vec!["Azure", "AWS", "Oracle", "G42"]
                .into_iter()
                .map(String::from)
                .collect(),
            gpu_demand_index: 45,
            key_hubs: vec!["UAE", "Saudi Arabia", "South Africa"]
                .into_iter()
                .map(String::from)
                .collect(),
            avg_price_premium_pct: 20.0,
            energy_cost_kwh: 0.04,
            regulatory_score: 5.0,
            data_centers_count: 120,
            gpu_pricing: pricing(&[
                ("H100-SXM", band(4.50, 3.80, 5.50)),
                ("A100-80GB", band(2.40, 1.80, 3.20)),
            ]),
        },
        RegionProfile {
            region: "Latin America".to_string(),
            market_share_pct: 3.8,
            yoy_growth_pct: 44.2,
            top_providers: vec!["AWS", "Azure", "GCP", "Oracle"]
                .into_iter()
                .map(String::from)
                .collect(),
            gpu_demand_index: 35,
            key_hubs: vec!["Sao Paulo", "Mexico City", "Santiago"]
                .into_iter()
                .map(String::from)
                .collect(),
            avg_price_premium_pct: 18.0,
            energy_cost_kwh: 0.08,
            regulatory_score: 5.5,
            data_centers_count: 95,
            gpu_pricing: pricing(&[
                ("H100-SXM", band(4.30, 3.60, 5.20)),
                ("A100-80GB", band(2.25, 1.65, 3.00)),
            ]),
        },
        RegionProfile {
            region: "China (Domestic)".to_string(),
            market_share_pct: 2.4,
            yoy_growth_pct: 15.8,
            top_providers: vec!["Alibaba", "Tencent", "Huawei", "Baidu"]
                .into_iter()
                .map(String::from)
                .collect(),
            gpu_demand_index: 72,
            key_hubs: vec!["Beijing", "Shanghai", "Shenzhen", "Guizhou"]
                .into_iter()
                .map(String::from)
                .collect(),
            avg_price_premium_pct: 25.0,
            energy_cost_kwh: 0.06,
            regulatory_score: 4.0,
            data_centers_count: 450,
            gpu_pricing: pricing(&[
                ("A100-80GB", band(2.80, 2.20, 3.60)),
                ("A100-40GB", band(2.10, 1.60, 2.80)),
            ]),
        },
    ]
}
