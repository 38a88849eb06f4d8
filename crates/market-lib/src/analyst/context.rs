//! Prompt context assembly from the market snapshot

use crate::aggregate::comparison_matrix;
use crate::catalog::MarketSnapshot;
use chrono::Utc;
use std::fmt::Write;

/// GPUs whose recent history goes into every prompt.
const TREND_GPUS: [&str; 6] = ["H100-SXM", "H200", "B200", "A100-80GB", "MI300X", "RTX-4090"];

/// Render the snapshot into the markdown context block every analysis
/// prompt is grounded on: top matrix rows, recent trends, indicators,
/// and regional lines.
pub fn market_context(snapshot: &MarketSnapshot) -> String {
    let matrix = comparison_matrix(snapshot);
    let mut ctx = String::new();

    ctx.push_str("## CURRENT GPU CLOUD PRICING ($/hr per GPU, on-demand)\n\n");
    for row in matrix.iter().take(12) {
        let _ = writeln!(
            ctx,
            "- {}: ${:.2}/hr (cheapest: {}) to ${:.2}/hr | {} providers | MoM change: {:+.1}% | TFLOPS/$: {}",
            row.name,
            row.cheapest_price,
            row.cheapest_provider,
            row.most_expensive,
            row.num_providers,
            row.monthly_change_pct,
            row.flops_per_dollar,
        );
    }

    ctx.push_str("\n## HISTORICAL PRICE TRENDS\n\n");
    for gpu_id in TREND_GPUS {
        let series = snapshot.history_for(gpu_id);
        if series.is_empty() {
            continue;
        }
        let _ = write!(ctx, "- {gpu_id}: ");
        let tail_start = series.len().saturating_sub(4);
        for point in &series[tail_start..] {
            let _ = write!(ctx, "{}=${:.2} ", point.period, point.avg_usd);
        }
        ctx.push('\n');
    }

    ctx.push_str("\n## MARKET INDICATORS\n\n");
    let nvda = &snapshot.indicators.nvidia_stock;
    let amd = &snapshot.indicators.amd_stock;
    let _ = writeln!(ctx, "- NVDA: ${} (YTD: {:+.1}%)", nvda.current, nvda.change_ytd_pct);
    let _ = writeln!(ctx, "- AMD: ${} (YTD: {:+.1}%)", amd.current, amd.change_ytd_pct);
    for (year, size) in &snapshot.indicators.gpu_market_size_bn {
        let _ = writeln!(ctx, "- GPU market size {year}: ${size}B");
    }
    if let Some((period, weeks)) = snapshot.indicators.flagship_lead_time_weeks.iter().next_back() {
        let _ = writeln!(ctx, "- Flagship lead time as of {period}: {weeks} weeks");
    }

    ctx.push_str("\n## REGIONAL MARKET\n\n");
    for region in &snapshot.regions {
        let _ = writeln!(
            ctx,
            "- {}: {}% share, {:+.1}% YoY, demand index: {}/100, premium: +{}%",
            region.region,
            region.market_share_pct,
            region.yoy_growth_pct,
            region.gpu_demand_index,
            region.avg_price_premium_pct,
        );
    }

    let _ = write!(ctx, "\n## DATE: {}\n", Utc::now().format("%Y-%m-%d"));
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MarketSnapshot;

    #[test]
    fn context_covers_every_section() {
        let snapshot = MarketSnapshot::builtin();
        let ctx = market_context(&snapshot);
        assert!(ctx.contains("## CURRENT GPU CLOUD PRICING"));
        assert!(ctx.contains("## HISTORICAL PRICE TRENDS"));
        assert!(ctx.contains("## MARKET INDICATORS"));
        assert!(ctx.contains("## REGIONAL MARKET"));
        assert!(ctx.contains("## DATE: "));
        assert!(ctx.contains("NVDA"));
        assert!(ctx.contains("H100-SXM"));
    }

    #[test]
    fn trend_lines_hold_at_most_four_periods() {
        let snapshot = MarketSnapshot::builtin();
        let ctx = market_context(&snapshot);
        let line = ctx
            .lines()
            .find(|l| l.starts_with("- H100-SXM: "))
            .expect("trend line present");
        assert_eq!(line.matches('$').count(), 4);
        assert!(line.contains("2026-02=$2.32"));
    }
}
