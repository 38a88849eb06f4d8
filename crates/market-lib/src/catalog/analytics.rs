//! Secondary reference tables: workloads, utilization, reservations,
//! forecasts, competitive positioning, sustainability, supply chain,
//! model fit, and the static news feed.

use crate::models::*;
use std::collections::BTreeMap;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn workload(
    name: &str,
    recommended: &[&str],
    min_gpus: u32,
    budget_low: u32,
    budget_high: u32,
    best_value: &str,
) -> WorkloadProfile {
    WorkloadProfile {
        workload: name.to_string(),
        recommended: strings(recommended),
        min_gpus,
        budget_monthly_low: budget_low,
        budget_monthly_high: budget_high,
        best_value: best_value.to_string(),
    }
}

pub(super) fn workload_profiles() -> Vec<WorkloadProfile> {
    vec![
        workload(
            "LLM Training (>70B params)",
            &["B200", "H100-SXM", "H200", "GB200"],
            64,
            150_000,
            2_000_000,
            "Lambda B200 cluster",
        ),
        workload(
            "LLM Training (7B-70B)",
            &["H100-SXM", "A100-80GB", "MI300X", "B200"],
            8,
            15_000,
            200_000,
            "CoreWeave H100",
        ),
        workload(
            "LLM Fine-tuning",
            &["A100-80GB", "MI300X", "H100-SXM", "L40S"],
            1,
            1_000,
            25_000,
            "Vast.ai MI300X",
        ),
        workload("LLM Inference", &["A10G", "L40S"], 1, 300, 5_000, "GCP A10G"),
        workload(
            "Image/Video Generation",
            &["RTX-4090", "L40S", "A100-40GB", "MI250X"],
            1,
            200,
            3_000,
            "Vast.ai RTX 4090",
        ),
        workload(
            "Research / Experimentation",
            &["A10G", "RTX-4090", "MI210"],
            1,
            50,
            1_000,
            "Vast.ai RTX-4090 spot",
        ),
    ]
}

fn util(
    avg: f64,
    peak: f64,
    off_peak: f64,
    idle_cost: f64,
    efficiency: f64,
    trend: &[f64],
) -> UtilizationMetrics {
    UtilizationMetrics {
        avg_utilization_pct: avg,
        peak_pct: peak,
        off_peak_pct: off_peak,
        idle_cost_per_hr: idle_cost,
        efficiency_score: efficiency,
        utilization_trend: trend.to_vec(),
    }
}

fn provider_util(provider: &str, gpus: Vec<(&str, UtilizationMetrics)>) -> ProviderUtilization {
    ProviderUtilization {
        provider: provider.to_string(),
        gpus: gpus.into_iter().map(|(g, m)| (g.to_string(), m)).collect(),
    }
}

pub(super) fn utilization_metrics() -> Vec<ProviderUtilization> {
    vec![
        provider_util("AWS", vec![
            ("H100-SXM", util(78.0, 94.0, 52.0, 0.48, 82.0, &[68.0, 71.0, 74.0, 76.0, 78.0])),
            ("B200", util(85.0, 97.0, 61.0, 0.72, 88.0, &[72.0, 76.0, 80.0, 83.0, 85.0])),
            ("A100-80GB", util(65.0, 88.0, 38.0, 0.42, 70.0, &[75.0, 72.0, 70.0, 67.0, 65.0])),
            ("MI300X", util(58.0, 82.0, 30.0, 0.55, 62.0, &[40.0, 45.0, 50.0, 54.0, 58.0])),
        ]),
        provider_util("GCP", vec![
            ("H100-SXM", util(76.0, 93.0, 50.0, 0.52, 80.0, &[66.0, 69.0, 72.0, 74.0, 76.0])),
            ("B200", util(83.0, 96.0, 58.0, 0.78, 86.0, &[70.0, 74.0, 78.0, 81.0, 83.0])),
            ("A100-80GB", util(63.0, 86.0, 36.0, 0.45, 68.0, &[73.0, 70.0, 68.0, 65.0, 63.0])),
            ("MI300X", util(55.0, 80.0, 28.0, 0.58, 59.0, &[38.0, 42.0, 47.0, 51.0, 55.0])),
        ]),
        provider_util("Azure", vec![
            ("H100-SXM", util(74.0, 92.0, 48.0, 0.55, 78.0, &[64.0, 67.0, 70.0, 72.0, 74.0])),
            ("B200", util(81.0, 95.0, 55.0, 0.82, 84.0, &[68.0, 72.0, 76.0, 79.0, 81.0])),
            ("A100-80GB", util(62.0, 85.0, 35.0, 0.47, 67.0, &[72.0, 69.0, 67.0, 64.0, 62.0])),
            ("MI300X", util(60.0, 84.0, 32.0, 0.52, 64.0, &[42.0, 47.0, 52.0, 56.0, 60.0])),
        ]),
        provider_util("Lambda", vec![
            ("H100-SXM", util(82.0, 96.0, 60.0, 0.38, 87.0, &[72.0, 75.0, 78.0, 80.0, 82.0])),
            ("B200", util(88.0, 98.0, 68.0, 0.58, 91.0, &[76.0, 80.0, 84.0, 86.0, 88.0])),
            ("A100-80GB", util(70.0, 90.0, 42.0, 0.32, 75.0, &[78.0, 76.0, 74.0, 72.0, 70.0])),
            ("MI300X", util(62.0, 85.0, 34.0, 0.48, 66.0, &[44.0, 49.0, 54.0, 58.0, 62.0])),
        ]),
        provider_util("CoreWeave", vec![
            ("H100-SXM", util(84.0, 97.0, 62.0, 0.35, 89.0, &[74.0, 77.0, 80.0, 82.0, 84.0])),
            ("B200", util(90.0, 99.0, 72.0, 0.52, 93.0, &[78.0, 82.0, 86.0, 88.0, 90.0])),
            ("A100-80GB", util(68.0, 89.0, 40.0, 0.28, 73.0, &[76.0, 74.0, 72.0, 70.0, 68.0])),
            ("MI300X", util(64.0, 86.0, 36.0, 0.44, 68.0, &[46.0, 51.0, 56.0, 60.0, 64.0])),
        ]),
        provider_util("RunPod", vec![
            ("H100-SXM", util(80.0, 95.0, 56.0, 0.40, 85.0, &[70.0, 73.0, 76.0, 78.0, 80.0])),
            ("B200", util(86.0, 97.0, 64.0, 0.60, 89.0, &[74.0, 78.0, 82.0, 84.0, 86.0])),
            ("A100-80GB", util(66.0, 87.0, 38.0, 0.30, 71.0, &[74.0, 72.0, 70.0, 68.0, 66.0])),
            ("MI300X", util(56.0, 81.0, 29.0, 0.50, 60.0, &[38.0, 43.0, 48.0, 52.0, 56.0])),
        ]),
        provider_util("Vast.ai", vec![
            ("H100-SXM", util(71.0, 90.0, 44.0, 0.32, 76.0, &[61.0, 64.0, 67.0, 69.0, 71.0])),
            ("B200", util(78.0, 94.0, 52.0, 0.50, 82.0, &[66.0, 70.0, 74.0, 76.0, 78.0])),
            ("A100-80GB", util(64.0, 86.0, 36.0, 0.22, 69.0, &[72.0, 70.0, 68.0, 66.0, 64.0])),
            ("MI300X", util(50.0, 76.0, 24.0, 0.42, 54.0, &[34.0, 38.0, 42.0, 46.0, 50.0])),
        ]),
        provider_util("FluidStack", vec![
            ("H100-SXM", util(69.0, 88.0, 42.0, 0.30, 74.0, &[59.0, 62.0, 65.0, 67.0, 69.0])),
            ("B200", util(76.0, 93.0, 50.0, 0.48, 80.0, &[64.0, 68.0, 72.0, 74.0, 76.0])),
            ("A100-80GB", util(62.0, 84.0, 34.0, 0.20, 67.0, &[70.0, 68.0, 66.0, 64.0, 62.0])),
            ("MI300X", util(48.0, 74.0, 22.0, 0.40, 52.0, &[32.0, 36.0, 40.0, 44.0, 48.0])),
        ]),
    ]
}

fn savings(spot: f64, r1: f64, r3: f64) -> CommitmentSavings {
    CommitmentSavings {
        spot_pct: spot,
        reserved_1yr_pct: r1,
        reserved_3yr_pct: r3,
    }
}

fn advice(band: &str, commitment: &str, reason: &str) -> CommitmentAdvice {
    CommitmentAdvice {
        utilization_band: band.to_string(),
        commitment: commitment.to_string(),
        reason: reason.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn reservation(
    gpu_id: &str,
    on_demand: f64,
    spot: f64,
    r1: f64,
    r3: f64,
    breakeven_1yr: u32,
    breakeven_3yr: u32,
    savings_levels: Vec<(&str, CommitmentSavings)>,
    recommended: Vec<CommitmentAdvice>,
) -> ReservationProfile {
    ReservationProfile {
        gpu_id: gpu_id.to_string(),
        on_demand_rate: on_demand,
        spot_avg_rate: spot,
        reserved_1yr_rate: r1,
        reserved_3yr_rate: r3,
        breakeven_monthly_hrs_1yr: breakeven_1yr,
        breakeven_monthly_hrs_3yr: breakeven_3yr,
        savings_at_utilization: savings_levels
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        recommended_commitment: recommended,
    }
}

pub(super) fn reservation_profiles() -> Vec<ReservationProfile> {
    vec![
        reservation("H100-SXM", 2.18, 0.98, 1.53, 0.87, 438, 292,
            vec![
                ("40_pct", savings(55.0, -8.0, 22.0)),
                ("60_pct", savings(55.0, 12.0, 42.0)),
                ("80_pct", savings(55.0, 25.0, 55.0)),
                ("100_pct", savings(55.0, 30.0, 60.0)),
            ],
            vec![
                advice("low_util", "spot", "Best value under 50% utilization, accept interruption risk"),
                advice("medium_util", "reserved_1yr", "12-25% savings at 60-80% utilization with guaranteed capacity"),
                advice("high_util", "reserved_3yr", "Up to 60% savings at sustained high utilization"),
            ],
        ),
        reservation("B200", 4.25, 2.12, 3.19, 1.70, 450, 300,
            vec![
                ("40_pct", savings(50.0, -10.0, 18.0)),
                ("60_pct", savings(50.0, 10.0, 38.0)),
                ("80_pct", savings(50.0, 22.0, 52.0)),
                ("100_pct", savings(50.0, 25.0, 60.0)),
            ],
            vec![
                advice("low_util", "spot", "50% savings, limited availability for B200 spot"),
                advice("medium_util", "reserved_1yr", "Guaranteed Blackwell capacity, moderate savings"),
                advice("high_util", "reserved_3yr", "Lock in next-gen pricing before further demand increases"),
            ],
        ),
        reservation("A100-80GB", 1.10, 0.40, 0.77, 0.44, 420, 270,
            vec![
                ("40_pct", savings(64.0, -5.0, 28.0)),
                ("60_pct", savings(64.0, 15.0, 45.0)),
                ("80_pct", savings(64.0, 28.0, 58.0)),
                ("100_pct", savings(64.0, 30.0, 60.0)),
            ],
            vec![
                advice("low_util", "spot", "Abundant spot availability, 64% savings"),
                advice("medium_util", "spot", "A100 spot is reliable enough for medium workloads"),
                advice("high_util", "reserved_1yr", "Avoid 3yr lock-in on aging hardware"),
            ],
        ),
        reservation("MI300X", 1.72, 0.69, 1.20, 0.69, 430, 280,
            vec![
                ("40_pct", savings(60.0, -6.0, 25.0)),
                ("60_pct", savings(60.0, 13.0, 42.0)),
                ("80_pct", savings(60.0, 26.0, 56.0)),
                ("100_pct", savings(60.0, 30.0, 60.0)),
            ],
            vec![
                advice("low_util", "spot", "Good spot savings, growing AMD availability"),
                advice("medium_util", "reserved_1yr", "Lock in AMD pricing advantage vs NVIDIA"),
                advice("high_util", "reserved_3yr", "Best TCO for AMD-compatible workloads"),
            ],
        ),
        reservation("H200", 3.50, 1.58, 2.45, 1.40, 445, 290,
            vec![
                ("40_pct", savings(55.0, -9.0, 20.0)),
                ("60_pct", savings(55.0, 11.0, 40.0)),
                ("80_pct", savings(55.0, 24.0, 54.0)),
                ("100_pct", savings(55.0, 30.0, 60.0)),
            ],
            vec![
                advice("low_util", "spot", "H200 spot increasingly available"),
                advice("medium_util", "reserved_1yr", "Good bridge GPU before Blackwell ramp"),
                advice("high_util", "reserved_1yr", "Avoid 3yr on transitional hardware"),
            ],
        ),
        reservation("RTX-4090", 0.22, 0.11, 0.15, 0.09, 400, 250,
            vec![
                ("40_pct", savings(50.0, -3.0, 32.0)),
                ("60_pct", savings(50.0, 18.0, 48.0)),
                ("80_pct", savings(50.0, 30.0, 58.0)),
                ("100_pct", savings(50.0, 32.0, 59.0)),
            ],
            vec![
                advice("low_util", "spot", "Consumer GPU spot is very cheap"),
                advice("medium_util", "spot", "Spot reliability high for consumer GPUs"),
                advice("high_util", "reserved_1yr", "Consumer GPUs may phase out, avoid 3yr"),
            ],
        ),
    ]
}

fn fband(low: f64, mid: f64, high: f64, confidence: f64) -> ForecastBand {
    ForecastBand {
        low,
        mid,
        high,
        confidence,
    }
}

#[allow(clippy::too_many_arguments)]
fn forecast(
    gpu_id: &str,
    current_avg: f64,
    elasticity: f64,
    f3: ForecastBand,
    f6: ForecastBand,
    f12: ForecastBand,
    floor: f64,
    supply: &str,
    demand: &str,
    pattern: &str,
) -> PriceForecast {
    PriceForecast {
        gpu_id: gpu_id.to_string(),
        current_avg,
        elasticity_coefficient: elasticity,
        forecast_3mo: f3,
        forecast_6mo: f6,
        forecast_12mo: f12,
        price_floor: floor,
        supply_signal: supply.to_string(),
        demand_signal: demand.to_string(),
        pattern_match: pattern.to_string(),
    }
}

pub(super) fn price_forecasts() -> Vec<PriceForecast> {
    vec![
        forecast("H100-SXM", 2.18, -0.35,
            fband(1.85, 1.95, 2.10, 0.78),
            fband(1.55, 1.72, 1.95, 0.65),
            fband(1.20, 1.48, 1.80, 0.48),
            1.10, "increasing", "stable", "B-curve decline (Blackwell displacement)"),
        forecast("B200", 4.25, -0.18,
            fband(3.80, 4.05, 4.30, 0.72),
            fband(3.20, 3.60, 4.10, 0.58),
            fband(2.50, 3.10, 3.80, 0.42),
            2.20, "constrained", "strong", "Early-cycle premium (mirrors H100 2023 trajectory)"),
        forecast("A100-80GB", 1.10, -0.52,
            fband(0.88, 0.98, 1.08, 0.82),
            fband(0.70, 0.85, 1.00, 0.70),
            fband(0.55, 0.72, 0.90, 0.55),
            0.45, "surplus", "declining", "Late-cycle depreciation (2-gen behind)"),
        forecast("H200", 3.50, -0.28,
            fband(3.05, 3.25, 3.50, 0.75),
            fband(2.60, 2.90, 3.30, 0.62),
            fband(2.00, 2.45, 3.00, 0.45),
            1.80, "increasing", "moderate", "Mid-cycle transition (squeezed by B200 above, H100 below)"),
        forecast("MI300X", 1.72, -0.42,
            fband(1.45, 1.58, 1.72, 0.74),
            fband(1.20, 1.40, 1.65, 0.60),
            fband(0.95, 1.20, 1.50, 0.46),
            0.80, "increasing", "growing", "Competitive pressure play (AMD gaining share)"),
        forecast("RTX-4090", 0.22, -0.48,
            fband(0.18, 0.20, 0.23, 0.76),
            fband(0.14, 0.17, 0.22, 0.62),
            fband(0.10, 0.14, 0.20, 0.48),
            0.08, "stable", "niche", "Consumer surplus (RTX 5090 launch pressure)"),
        forecast("GB200", 7.50, -0.10,
            fband(6.80, 7.20, 7.60, 0.65),
            fband(5.80, 6.50, 7.30, 0.50),
            fband(4.50, 5.50, 6.80, 0.35),
            3.80, "very_constrained", "very_strong", "Launch premium (NVL72 rack-scale, limited supply)"),
        forecast("MI325X", 2.10, -0.38,
            fband(1.80, 1.95, 2.12, 0.70),
            fband(1.50, 1.72, 2.00, 0.56),
            fband(1.15, 1.45, 1.85, 0.42),
            0.95, "increasing", "growing", "AMD refresh cycle (MI300X successor, competitive pressure)"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn moat(
    vendor: &str,
    performance: u32,
    ecosystem: u32,
    compatibility: u32,
    price_perf: u32,
    moat_score: u32,
    share: f64,
    share_trend: &[f64],
    products: &[&str],
    strengths: &[&str],
    weaknesses: &[&str],
    parity: Option<&str>,
) -> VendorMoat {
    VendorMoat {
        vendor: vendor.to_string(),
        performance_score: performance,
        ecosystem_maturity: ecosystem,
        software_compatibility: compatibility,
        price_performance_ratio: price_perf,
        moat_strength_score: moat_score,
        market_share_pct: share,
        market_share_trend: share_trend.to_vec(),
        key_products: strings(products),
        strengths: strings(strengths),
        weaknesses: strings(weaknesses),
        parity_timeline: parity.map(String::from),
    }
}

pub(super) fn vendor_moat() -> Vec<VendorMoat> {
    vec![
        moat("NVIDIA", 95, 98, 99, 72, 92, 78.0, &[88.0, 86.0, 84.0, 81.0, 78.0],
            &["B200", "GB200", "H200", "H100-SXM"],
            &["CUDA ecosystem lock-in", "NVLink/NVSwitch interconnect", "Dominant software stack", "Training performance leadership"],
            &["Premium pricing", "Supply constraints on latest gen", "Growing competitive pressure"],
            None),
        moat("AMD", 78, 62, 58, 88, 48, 22.0, &[12.0, 14.0, 16.0, 19.0, 22.0],
            &["MI300X", "MI325X", "MI350X"],
            &["Price/perf advantage", "Large HBM capacity", "Open ROCm ecosystem", "Rapid market share growth"],
            &["ROCm maturity gap", "Limited training adoption", "Smaller ecosystem"],
            Some("2027-Q2 for inference, 2028+ for training")),
        moat("Google_TPU", 82, 75, 45, 85, 55, 8.0, &[5.0, 5.0, 6.0, 7.0, 8.0],
            &["TPU v5p", "TPU v5e", "TPU v6e (Trillium)"],
            &["Vertically integrated (GCP only)", "Excellent JAX/TF performance", "Competitive pricing", "Large-scale training proven"],
            &["GCP lock-in", "No PyTorch native support", "Limited availability outside Google"],
            Some("Niche, competes in JAX/TF workloads only")),
        moat("AWS_Trainium", 68, 42, 35, 90, 35, 4.0, &[1.0, 2.0, 2.0, 3.0, 4.0],
            &["Trainium2", "Inferentia2"],
            &["Aggressive pricing", "AWS ecosystem integration", "Neuron SDK improving", "Cost leadership strategy"],
            &["Limited model compatibility", "Early ecosystem", "Performance gaps on complex models"],
            Some("2028+ for broad adoption")),
        moat("Intel", 45, 38, 40, 65, 22, 2.0, &[4.0, 4.0, 3.0, 3.0, 2.0],
            &["Gaudi 3", "Gaudi 2"],
            &["Competitive Gaudi 3 pricing", "x86 ecosystem familiarity", "Enterprise relationships"],
            &["Poor market traction", "Software maturity issues", "Shrinking share", "Strategic uncertainty"],
            Some("Unlikely to achieve broad parity")),
    ]
}

fn footprint(
    region: &str,
    pue: f64,
    carbon: u32,
    green: u32,
    water: f64,
    score: u32,
) -> RegionFootprint {
    RegionFootprint {
        region: region.to_string(),
        pue,
        carbon_gco2_per_kwh: carbon,
        green_energy_pct: green,
        water_usage_l_per_kwh: water,
        sustainability_score: score,
    }
}

pub(super) fn sustainability_index() -> Vec<ProviderSustainability> {
    vec![
        ProviderSustainability {
            provider: "AWS".to_string(),
            regions: vec![
                footprint("us-east-1", 1.10, 380, 65, 1.8, 72),
                footprint("us-west-2", 1.08, 120, 90, 0.9, 92),
                footprint("eu-west-1", 1.12, 280, 78, 1.4, 80),
                footprint("eu-north-1", 1.06, 45, 98, 0.3, 97),
                footprint("ap-northeast-1", 1.15, 480, 35, 2.2, 55),
            ],
        },
        ProviderSustainability {
            provider: "GCP".to_string(),
            regions: vec![
                footprint("us-central1", 1.08, 350, 72, 1.5, 78),
                footprint("us-west1", 1.06, 100, 95, 0.7, 95),
                footprint("europe-west4", 1.09, 320, 80, 1.3, 82),
                footprint("europe-north1", 1.05, 30, 99, 0.2, 98),
                footprint("asia-east1", 1.14, 550, 28, 2.5, 48),
            ],
        },
        ProviderSustainability {
            provider: "Azure".to_string(),
            regions: vec![
                footprint("eastus", 1.12, 390, 60, 1.9, 68),
                footprint("westus2", 1.09, 140, 88, 1.0, 90),
                footprint("northeurope", 1.07, 60, 96, 0.4, 96),
                footprint("westeurope", 1.10, 300, 75, 1.5, 78),
                footprint("japaneast", 1.16, 470, 38, 2.1, 56),
            ],
        },
        ProviderSustainability {
            provider: "CoreWeave".to_string(),
            regions: vec![
                footprint("us-east", 1.15, 400, 55, 2.0, 65),
                footprint("us-west", 1.10, 150, 85, 1.1, 88),
                footprint("eu-west", 1.12, 290, 76, 1.5, 79),
            ],
        },
        ProviderSustainability {
            provider: "Lambda".to_string(),
            regions: vec![
                footprint("us-south", 1.18, 420, 50, 2.2, 60),
                footprint("us-west", 1.11, 160, 82, 1.2, 85),
            ],
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn carbon(
    gpu_id: &str,
    tdp: u32,
    typical: u32,
    kwh: f64,
    annual_kwh: u32,
    us_avg: u32,
    eu_nordic: u32,
    embodied: u32,
) -> CarbonFootprint {
    CarbonFootprint {
        gpu_id: gpu_id.to_string(),
        tdp_watts: tdp,
        typical_watts: typical,
        kwh_per_hour: kwh,
        annual_kwh_full_util: annual_kwh,
        carbon_kg_per_year_us_avg: us_avg,
        carbon_kg_per_year_eu_nordic: eu_nordic,
        embodied_carbon_kg: embodied,
    }
}

pub(super) fn carbon_footprints() -> Vec<CarbonFootprint> {
    vec![
        carbon("H100-SXM", 700, 580, 0.58, 5081, 2032, 228, 150),
        carbon("B200", 1000, 820, 0.82, 7183, 2873, 323, 200),
        carbon("A100-80GB", 400, 330, 0.33, 2891, 1156, 130, 100),
        carbon("MI300X", 750, 620, 0.62, 5431, 2172, 244, 160),
        carbon("H200", 700, 580, 0.58, 5081, 2032, 228, 155),
        carbon("RTX-4090", 450, 370, 0.37, 3241, 1296, 146, 80),
        carbon("MI325X", 1000, 830, 0.83, 7273, 2909, 327, 175),
        carbon("GB200", 2700, 2200, 2.20, 19272, 7709, 867, 350),
    ]
}

#[allow(clippy::too_many_arguments)]
fn risk(
    vendor: &str,
    score: u32,
    tsmc_pct: u32,
    geopolitical: &str,
    lead_weeks: u32,
    lead_trend: &[u32],
    export_impact: &str,
    bottlenecks: &[&str],
    trend: &str,
    single_source: &[&str],
    inventory_weeks: u32,
) -> SupplyRisk {
    SupplyRisk {
        vendor: vendor.to_string(),
        supply_risk_score: score,
        tsmc_dependency_pct: tsmc_pct,
        geopolitical_risk: geopolitical.to_string(),
        lead_time_weeks: lead_weeks,
        lead_time_trend: lead_trend.to_vec(),
        export_control_impact: export_impact.to_string(),
        bottlenecks: strings(bottlenecks),
        risk_trend: trend.to_string(),
        single_source_components: strings(single_source),
        inventory_weeks,
    }
}

pub(super) fn supply_chain_risk() -> Vec<SupplyRisk> {
    vec![
        risk("NVIDIA", 35, 100, "medium", 1, &[52, 36, 20, 8, 1], "moderate",
            &["TSMC CoWoS packaging", "HBM3e supply (SK Hynix/Samsung)", "NVLink switch availability"],
            "improving",
            &["CoWoS packaging (TSMC)", "NVSwitch (TSMC 4nm)"],
            6),
        risk("AMD", 42, 100, "medium", 3, &[24, 18, 12, 6, 3], "moderate",
            &["TSMC 5nm/3nm capacity", "HBM3 supply allocation", "ROCm software readiness"],
            "improving",
            &["Advanced packaging (TSMC)", "HBM3 (SK Hynix/Micron)"],
            8),
        risk("Google_TPU", 28, 100, "low", 0, &[4, 3, 2, 1, 0], "low",
            &["TSMC wafer allocation", "Internal demand vs cloud availability"],
            "stable",
            &["TPU dies (Broadcom design, TSMC fab)"],
            12),
        risk("Intel", 55, 30, "low", 2, &[8, 6, 4, 3, 2], "low",
            &["Intel Foundry yield issues", "Gaudi software ecosystem", "Customer confidence"],
            "worsening",
            &["Gaudi dies (TSMC 5nm)"],
            14),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    date: &str,
    regulation: &str,
    category: &str,
    target: &str,
    status: &str,
    impact: &str,
    affected: &[&str],
    description: &str,
) -> ExportControlEvent {
    ExportControlEvent {
        date: date.to_string(),
        regulation: regulation.to_string(),
        category: category.to_string(),
        target: target.to_string(),
        status: status.to_string(),
        impact: impact.to_string(),
        affected_gpus: strings(affected),
        description: description.to_string(),
    }
}

pub(super) fn export_controls() -> Vec<ExportControlEvent> {
    vec![
        event("2022-10", "BIS Advanced Computing Export Controls", "Export Control",
            "China, Macau", "enacted", "high", &["A100", "H100", "MI250X"],
            "First sweeping controls blocking A100-class+ chips to China. Introduced TPP and performance-density thresholds."),
        event("2023-10", "BIS Updated Export Controls (Loophole Closure)", "Export Control",
            "China, Macau", "enacted", "high", &["A800", "H800", "RTX 4090", "MI300X", "L40S"],
            "Closed loopholes blocking A800/H800 China workaround variants. Performance-density thresholds captured the RTX 4090."),
        event("2024-12", "Entity List + HBM Controls + FDPR Expansion", "Export Control",
            "China, Macau", "enacted", "high", &["HBM3/HBM3e stacks"],
            "Added 140 entities to the Entity List and imposed the first country-wide HBM export controls on China."),
        event("2025-01", "AI Diffusion Rule (3-Tier Framework)", "Export Control",
            "Global, 3 tiers", "rescinded", "high",
            &["H100", "H200", "B100", "B200", "GB200", "MI300X", "MI325X"],
            "3-tier global system with quantity caps for Tier 2 countries. Rescinded May 2025 before the compliance date."),
        event("2025-08", "H20 Revenue-Sharing Export License (15%)", "Export License",
            "China", "enacted", "medium", &["H20"],
            "Export license for H20-class chips to China with 15% of China sales revenue paid to the US government."),
        event("2025-12", "H200 to China (25% Revenue Share)", "Export License",
            "China (approved customers)", "enacted", "high", &["H200", "MI325X"],
            "Authorized H200 sales to vetted Chinese customers with a 25% revenue share to the US government."),
        event("2026-01", "BIS Codified H200/MI325X License Policy", "Export Control",
            "China, Macau", "enacted", "high", &["H200", "MI325X"],
            "Codified the shift from presumption of denial to case-by-case review for H200/MI325X-class exports to China."),
        event("2026-01", "Section 232 Semiconductor Tariff (25%)", "Tariff",
            "All non-US origins", "enacted", "high", &["All imported AI chips"],
            "25% tariff on imported advanced AI semiconductors with broad exemptions for US data center imports and R&D."),
    ]
}

#[allow(clippy::too_many_arguments)]
fn fit(
    config: &str,
    batch: u32,
    throughput: u32,
    cost_1m: f64,
    headroom: u32,
    score: u32,
    notes: &str,
) -> HardwareFit {
    HardwareFit {
        optimal_config: config.to_string(),
        batch_size: batch,
        throughput_tok_s: throughput,
        cost_per_1m_tokens: cost_1m,
        vram_headroom_pct: headroom,
        fit_score: score,
        notes: notes.to_string(),
    }
}

fn class_fit(
    size_class: &str,
    models: &[&str],
    vram_gb: u32,
    gpus: Vec<(&str, HardwareFit)>,
) -> ModelClassFit {
    ModelClassFit {
        size_class: size_class.to_string(),
        models: strings(models),
        vram_required_gb: vram_gb,
        gpus: gpus.into_iter().map(|(g, f)| (g.to_string(), f)).collect(),
    }
}

pub(super) fn model_hardware_fit() -> Vec<ModelClassFit> {
    vec![
        class_fit("7B", &["Llama-3.1-8B", "Mistral-7B", "Qwen2.5-7B"], 14, vec![
            ("H100-SXM", fit("1x H100", 256, 450, 0.055, 82, 65, "Overkill for 7B, wastes VRAM")),
            ("B200", fit("1x B200", 512, 680, 0.042, 93, 55, "Massive overkill, only if bundled")),
            ("A100-80GB", fit("1x A100", 128, 280, 0.048, 82, 72, "Good balance for small models")),
            ("MI300X", fit("1x MI300X", 256, 380, 0.045, 93, 60, "VRAM overkill, decent throughput")),
            ("RTX-4090", fit("1x RTX-4090", 64, 140, 0.035, 42, 92, "Best cost/perf for 7B inference")),
        ]),
        class_fit("13B", &["Llama-3.1-13B", "CodeLlama-13B", "Qwen2.5-14B"], 26, vec![
            ("H100-SXM", fit("1x H100", 128, 320, 0.078, 68, 75, "Good balance of speed and cost")),
            ("B200", fit("1x B200", 256, 480, 0.062, 86, 65, "Overkill but fast")),
            ("A100-80GB", fit("1x A100", 64, 195, 0.072, 68, 82, "Sweet spot for 13B inference")),
            ("MI300X", fit("1x MI300X", 128, 270, 0.065, 86, 70, "Good perf, VRAM headroom for batching")),
            ("RTX-4090", fit("2x RTX-4090", 32, 95, 0.058, 46, 72, "Best cost/perf if 2-GPU setup acceptable")),
        ]),
        class_fit("70B", &["Llama-3.1-70B", "Qwen2.5-72B", "Mixtral-8x22B"], 140, vec![
            ("H100-SXM", fit("2x H100 (NVLink)", 64, 95, 0.38, 14, 85, "Standard config for 70B, good perf")),
            ("B200", fit("1x B200", 128, 145, 0.28, 27, 92, "Single GPU! 192GB VRAM fits 70B")),
            ("A100-80GB", fit("2x A100 (NVLink)", 32, 52, 0.52, 14, 72, "Viable but slower, tight VRAM")),
            ("MI300X", fit("1x MI300X", 64, 82, 0.32, 27, 88, "Single GPU fits 70B, best AMD value")),
            ("H200", fit("2x H200", 64, 110, 0.42, 50, 80, "NVLink pair, good throughput")),
        ]),
        class_fit("180B", &["Falcon-180B", "DBRX-132B"], 360, vec![
            ("H100-SXM", fit("8x H100 (DGX)", 32, 48, 1.20, 44, 75, "Full DGX node, ample headroom for batching")),
            ("B200", fit("2x B200", 64, 85, 0.82, 6, 85, "384GB fits 180B FP16 comfortably")),
            ("MI300X", fit("2x MI300X", 48, 55, 0.95, 6, 80, "384GB HBM, good AMD value")),
            ("GB200", fit("1x GB200", 128, 120, 0.60, 6, 95, "Single NVL72 node fits 180B with headroom")),
            ("H200", fit("4x H200", 32, 58, 1.10, 36, 78, "564GB total, good headroom for batching")),
        ]),
        class_fit("405B", &["Llama-3.1-405B"], 810, vec![
            ("H100-SXM", fit("16x H100 (2x DGX)", 8, 28, 2.80, 37, 55, "Needs 2 DGX nodes, cross-node NVLink")),
            ("B200", fit("8x B200 (NVL)", 64, 65, 1.85, 47, 90, "1.5TB VRAM, excellent fit for mega-models")),
            ("MI300X", fit("8x MI300X", 32, 35, 2.20, 47, 78, "1.5TB HBM, competitive AMD option")),
            ("GB200", fit("4x GB200", 128, 95, 1.40, 47, 95, "NVL72 rack-scale, best for 400B+ models")),
            ("H200", fit("8x H200", 16, 32, 2.50, 28, 65, "1.13TB total, feasible but limited headroom")),
        ]),
    ]
}

fn news(date: &str, source: &str, headline: &str, category: &str, sentiment: &str, impact: &str) -> NewsItem {
    NewsItem {
        date: date.to_string(),
        source: source.to_string(),
        headline: headline.to_string(),
        category: category.to_string(),
        sentiment: sentiment.to_string(),
        impact: impact.to_string(),
    }
}

pub(super) fn news_feed() -> Vec<NewsItem> {
    vec![
        news("2026-02-17", "Motley Fool", "NVIDIA Q4 FY2026 earnings due Feb 25 -- Amazon, Google, Meta, Microsoft capex plans boost NVDA outlook", "earnings", "bullish", "high"),
        news("2026-02-14", "Motley Fool", "CoreWeave stock jumps 7% ahead of Feb 26 earnings; shares up 34% YTD to $96", "market", "bullish", "medium"),
        news("2026-02-12", "CNBC", "Anthropic closes $30B Series G at $380B valuation -- annualized revenue hits $14B", "demand", "bullish", "high"),
        news("2026-02-12", "TechCrunch", "OpenAI releases GPT-5.3-Codex-Spark; Google launches Gemini 3 Deep Think -- GPU demand intensifies", "demand", "bullish", "high"),
        news("2026-02-07", "Wolf Street", "Big Tech plans $700B in AI capex for 2026: Amazon $200B, Google $185B, Microsoft $145B, Meta $135B", "demand", "bullish", "high"),
        news("2026-02-06", "CNBC", "Tech AI spending approaches $700B in 2026 as free cash flow takes major hit across hyperscalers", "demand", "neutral", "high"),
        news("2026-02-06", "Bloomberg", "NVIDIA H200 chip sales to China stalled by US national security review despite approval", "policy", "negative", "high"),
        news("2026-02-04", "CNBC", "NVIDIA AI chip sales to China remain in limbo -- State Dept pushes for tougher H200 export restrictions", "policy", "negative", "high"),
        news("2026-02-01", "AI Business 2.0", "TSMC and ASML capacity constraints tighten -- CoWoS advanced packaging sold out through 2026", "supply", "bearish", "high"),
        news("2026-01-26", "CNBC", "NVIDIA invests $2B in CoreWeave to accelerate AI factory buildout targeting 5GW capacity by 2030", "expansion", "positive", "high"),
        news("2026-01-15", "Federal Register", "BIS revises AI chip export policy for China: H200 shifts from presumption of denial to case-by-case review", "policy", "neutral", "high"),
        news("2026-01-13", "TechSpot", "GPU prices up 19% in 3 months -- DRAM crisis and AI demand drive RTX 5090 to 65% above MSRP", "pricing", "bearish", "medium"),
        news("2026-01-05", "The Register", "AWS raises GPU instance prices 15% -- H200 p5e.48xlarge jumps from $34.61 to $39.80/hr", "pricing", "bearish", "high"),
        news("2026-01-05", "TrendForce", "NVIDIA and AMD plan phased GPU price hikes in Q1 2026 as HBM memory costs surge", "pricing", "bearish", "medium"),
        news("2026-01-05", "MIT Tech Review", "AI reasoning models drive insatiable GPU demand -- NVIDIA delays gaming GPUs as AI factories take priority", "demand", "bullish", "medium"),
    ]
}
