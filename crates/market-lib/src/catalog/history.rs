//! Monthly observed pricing series, $/hr per GPU on-demand, oldest first

use crate::models::{Availability, PricePoint};
use std::collections::BTreeMap;

fn point(period: &str, avg: f64, min: f64, max: f64, availability: Availability) -> PricePoint {
    PricePoint {
        period: period.to_string(),
        avg_usd: avg,
        min_usd: min,
        max_usd: max,
        availability,
    }
}

pub(super) fn price_history() -> BTreeMap<String, Vec<PricePoint>> {
    use Availability::*;
    let mut history = BTreeMap::new();

    history.insert(
        "B200".to_string(),
        vec![
            point("2025-01", 6.20, 5.80, 7.00, Scarce),
            point("2025-02", 6.00, 5.60, 6.80, Scarce),
            point("2025-03", 5.80, 5.40, 6.60, Scarce),
            point("2025-04", 5.55, 5.10, 6.40, Scarce),
            point("2025-05", 5.35, 4.85, 6.15, Scarce),
            point("2025-06", 5.15, 4.60, 5.95, Scarce),
            point("2025-07", 4.98, 4.40, 5.75, Limited),
            point("2025-08", 4.82, 4.25, 5.60, Limited),
            point("2025-09", 4.70, 4.10, 5.50, Limited),
            point("2025-10", 4.85, 4.20, 5.70, Scarce),
            point("2025-11", 4.95, 4.30, 5.85, Scarce),
            point("2025-12", 5.10, 4.40, 6.00, Scarce),
            point("2026-01", 5.05, 4.35, 5.95, Scarce),
            point("2026-02", 4.98, 4.30, 5.85, Scarce),
        ],
    );

    history.insert(
        "H100-SXM".to_string(),
        vec![
            point("2023-01", 4.70, 4.00, 5.80, Scarce),
            point("2023-04", 4.30, 3.65, 5.30, Scarce),
            point("2023-07", 4.00, 3.35, 4.95, Limited),
            point("2023-10", 3.70, 3.00, 4.60, Limited),
            point("2024-01", 3.40, 2.75, 4.30, Moderate),
            point("2024-04", 3.15, 2.48, 4.05, Moderate),
            point("2024-07", 2.92, 2.28, 3.85, Good),
            point("2024-10", 2.65, 2.10, 3.50, Good),
            point("2025-01", 2.42, 1.90, 3.25, Moderate),
            point("2025-04", 2.28, 1.82, 3.10, Moderate),
            point("2025-07", 2.10, 1.68, 2.88, Moderate),
            point("2025-09", 2.00, 1.55, 2.78, Limited),
            point("2025-10", 2.08, 1.60, 2.90, Limited),
            point("2025-11", 2.15, 1.65, 3.00, Limited),
            point("2025-12", 2.28, 1.72, 3.15, Limited),
            point("2026-01", 2.35, 1.78, 3.25, Limited),
            point("2026-02", 2.32, 1.75, 3.20, Limited),
        ],
    );

    history.insert(
        "H200".to_string(),
        vec![
            point("2024-04", 5.20, 4.70, 6.20, Scarce),
            point("2024-07", 4.70, 4.10, 5.70, Scarce),
            point("2024-10", 4.15, 3.55, 5.00, Limited),
            point("2025-01", 3.72, 3.20, 4.45, Limited),
            point("2025-04", 3.52, 3.05, 4.22, Limited),
            point("2025-07", 3.38, 2.92, 4.05, Limited),
            point("2025-08", 3.35, 2.88, 3.98, Limited),
            point("2025-09", 3.40, 2.92, 4.10, Scarce),
            point("2025-10", 3.52, 3.00, 4.25, Scarce),
            point("2025-11", 3.60, 3.08, 4.35, Scarce),
            point("2025-12", 3.68, 3.15, 4.45, Scarce),
            point("2026-01", 3.72, 3.20, 4.50, Scarce),
            point("2026-02", 3.70, 3.18, 4.48, Scarce),
        ],
    );

    history.insert(
        "A100-80GB".to_string(),
        vec![
            point("2022-01", 3.80, 3.20, 4.50, Scarce),
            point("2022-07", 3.20, 2.60, 3.90, Limited),
            point("2023-01", 2.80, 2.20, 3.40, Moderate),
            point("2023-07", 2.30, 1.78, 2.90, Good),
            point("2024-01", 1.88, 1.40, 2.48, Abundant),
            point("2024-07", 1.52, 1.14, 2.12, Abundant),
            point("2025-01", 1.34, 1.00, 1.92, Good),
            point("2025-04", 1.25, 0.92, 1.82, Good),
            point("2025-07", 1.15, 0.85, 1.68, Good),
            point("2025-09", 1.10, 0.80, 1.62, Moderate),
            point("2025-10", 1.15, 0.84, 1.70, Moderate),
            point("2025-11", 1.20, 0.88, 1.78, Moderate),
            point("2025-12", 1.28, 0.92, 1.88, Moderate),
            point("2026-01", 1.30, 0.95, 1.90, Moderate),
            point("2026-02", 1.28, 0.92, 1.85, Moderate),
        ],
    );

    history.insert(
        "A100-40GB".to_string(),
        vec![
            point("2022-01", 2.50, 2.00, 3.00, Limited),
            point("2022-07", 2.10, 1.60, 2.60, Moderate),
            point("2023-01", 1.70, 1.20, 2.20, Good),
            point("2023-07", 1.30, 0.90, 1.80, Abundant),
            point("2024-01", 1.05, 0.70, 1.45, Abundant),
            point("2024-07", 0.90, 0.60, 1.25, Abundant),
            point("2025-01", 0.82, 0.55, 1.15, Abundant),
            point("2025-07", 0.78, 0.52, 1.10, Abundant),
            point("2026-01", 0.76, 0.49, 1.06, Abundant),
            point("2026-02", 0.75, 0.48, 1.05, Abundant),
        ],
    );

    history.insert(
        "MI300X".to_string(),
        vec![
            point("2024-01", 3.60, 3.10, 4.30, Scarce),
            point("2024-04", 3.30, 2.82, 3.95, Limited),
            point("2024-07", 3.00, 2.55, 3.58, Limited),
            point("2024-10", 2.72, 2.28, 3.30, Moderate),
            point("2025-01", 2.45, 2.00, 3.02, Good),
            point("2025-04", 2.30, 1.86, 2.86, Good),
            point("2025-07", 2.18, 1.76, 2.70, Good),
            point("2025-10", 2.06, 1.66, 2.56, Good),
            point("2025-12", 1.98, 1.58, 2.48, Good),
            point("2026-01", 1.95, 1.55, 2.45, Good),
            point("2026-02", 1.90, 1.50, 2.40, Good),
        ],
    );

    history.insert(
        "MI325X".to_string(),
        vec![
            point("2025-03", 4.80, 4.20, 5.60, Scarce),
            point("2025-04", 4.60, 4.00, 5.40, Scarce),
            point("2025-05", 4.40, 3.80, 5.20, Scarce),
            point("2025-06", 4.25, 3.65, 5.05, Limited),
            point("2025-07", 4.10, 3.52, 4.90, Limited),
            point("2025-08", 3.95, 3.40, 4.75, Limited),
            point("2025-09", 3.82, 3.28, 4.60, Limited),
            point("2025-10", 3.70, 3.18, 4.48, Moderate),
            point("2025-11", 3.60, 3.08, 4.38, Moderate),
            point("2025-12", 3.50, 3.00, 4.28, Moderate),
            point("2026-01", 3.40, 2.92, 4.18, Moderate),
            point("2026-02", 3.32, 2.85, 4.10, Moderate),
        ],
    );

    history.insert(
        "MI250X".to_string(),
        vec![
            point("2022-07", 2.80, 2.20, 3.50, Limited),
            point("2023-01", 2.40, 1.80, 3.10, Moderate),
            point("2023-07", 2.00, 1.50, 2.60, Good),
            point("2024-01", 1.60, 1.20, 2.15, Abundant),
            point("2024-07", 1.25, 0.95, 1.70, Abundant),
            point("2025-01", 1.00, 0.78, 1.40, Abundant),
            point("2025-07", 0.88, 0.68, 1.22, Abundant),
            point("2025-10", 0.85, 0.65, 1.18, Abundant),
            point("2026-01", 0.82, 0.62, 1.15, Abundant),
            point("2026-02", 0.80, 0.60, 1.12, Abundant),
        ],
    );

    history.insert(
        "RTX-4090".to_string(),
        vec![
            point("2023-01", 0.82, 0.52, 1.22, Moderate),
            point("2023-07", 0.70, 0.42, 1.02, Good),
            point("2024-01", 0.60, 0.34, 0.90, Abundant),
            point("2024-07", 0.50, 0.28, 0.80, Abundant),
            point("2025-01", 0.43, 0.24, 0.72, Abundant),
            point("2025-07", 0.38, 0.21, 0.66, Abundant),
            point("2025-10", 0.37, 0.20, 0.64, Abundant),
            point("2026-01", 0.36, 0.19, 0.62, Abundant),
            point("2026-02", 0.35, 0.18, 0.60, Abundant),
        ],
    );

    history.insert(
        "L40S".to_string(),
        vec![
            point("2023-10", 1.30, 1.05, 1.60, Moderate),
            point("2024-01", 1.22, 0.98, 1.50, Good),
            point("2024-04", 1.15, 0.92, 1.42, Good),
            point("2024-07", 1.08, 0.86, 1.35, Abundant),
            point("2024-10", 1.02, 0.82, 1.28, Abundant),
            point("2025-01", 0.98, 0.78, 1.22, Abundant),
            point("2025-04", 0.95, 0.75, 1.18, Abundant),
            point("2025-07", 0.92, 0.73, 1.15, Abundant),
            point("2025-10", 0.90, 0.72, 1.13, Abundant),
            point("2026-01", 0.88, 0.70, 1.10, Abundant),
            point("2026-02", 0.87, 0.69, 1.08, Abundant),
        ],
    );

    history.insert(
        "GB200".to_string(),
        vec![
            point("2025-06", 28.00, 26.50, 30.00, Scarce),
            point("2025-07", 27.50, 26.00, 29.50, Scarce),
            point("2025-08", 27.20, 25.80, 29.00, Scarce),
            point("2025-09", 27.00, 25.50, 28.80, Scarce),
            point("2025-10", 27.10, 25.60, 29.00, Scarce),
            point("2025-11", 27.00, 25.40, 28.80, Scarce),
            point("2025-12", 27.05, 25.50, 28.90, Scarce),
            point("2026-01", 27.04, 25.40, 28.80, Scarce),
            point("2026-02", 26.90, 25.20, 28.60, Scarce),
        ],
    );

    history.insert(
        "H100-PCIe".to_string(),
        vec![
            point("2023-06", 3.20, 2.90, 3.60, Scarce),
            point("2023-09", 3.10, 2.80, 3.50, Limited),
            point("2023-12", 3.00, 2.70, 3.40, Limited),
            point("2024-03", 2.90, 2.60, 3.30, Good),
            point("2024-06", 2.80, 2.50, 3.20, Good),
            point("2024-09", 2.70, 2.40, 3.10, Good),
            point("2024-12", 2.60, 2.30, 3.00, Good),
            point("2025-03", 2.40, 2.10, 2.80, Good),
            point("2025-06", 2.20, 1.95, 2.55, Good),
            point("2025-09", 2.05, 1.80, 2.40, Good),
            point("2025-12", 1.95, 1.70, 2.25, Good),
            point("2026-02", 1.90, 1.65, 2.20, Good),
        ],
    );

    history.insert(
        "A10G".to_string(),
        vec![
            point("2023-01", 1.20, 1.00, 1.45, Good),
            point("2023-06", 1.15, 0.95, 1.40, Good),
            point("2023-12", 1.10, 0.90, 1.35, Good),
            point("2024-06", 1.00, 0.80, 1.25, Good),
            point("2024-12", 0.85, 0.65, 1.10, Abundant),
            point("2025-06", 0.72, 0.55, 0.95, Abundant),
            point("2025-12", 0.62, 0.45, 0.82, Abundant),
            point("2026-02", 0.58, 0.39, 0.78, Abundant),
        ],
    );

    history.insert(
        "RTX-5090".to_string(),
        vec![
            point("2025-03", 0.60, 0.50, 0.75, Scarce),
            point("2025-06", 0.55, 0.47, 0.68, Limited),
            point("2025-09", 0.50, 0.44, 0.62, Limited),
            point("2025-12", 0.48, 0.42, 0.58, Good),
            point("2026-02", 0.45, 0.40, 0.55, Good),
        ],
    );

    history.insert(
        "V100".to_string(),
        vec![
            point("2021-01", 3.20, 2.90, 3.60, Good),
            point("2021-06", 3.40, 3.00, 3.90, Limited),
            point("2022-01", 3.50, 3.10, 4.00, Limited),
            point("2022-06", 3.30, 2.90, 3.80, Good),
            point("2023-01", 3.10, 2.70, 3.60, Good),
            point("2023-06", 2.90, 2.50, 3.40, Good),
            point("2024-01", 2.50, 2.10, 3.00, Abundant),
            point("2024-06", 2.20, 1.80, 2.70, Abundant),
            point("2025-01", 1.80, 1.40, 2.30, Abundant),
            point("2025-06", 1.50, 1.10, 2.00, Abundant),
            point("2026-02", 1.20, 0.85, 1.65, Abundant),
        ],
    );

    history
}
