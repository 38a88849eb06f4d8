//! Market-level commands: summary, comparison matrix, per-GPU detail

use anyhow::Result;
use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::client::{ApiClient, ComparisonRow, GpuDetail, MarketSummary};
use crate::output::{
    color_availability, color_price_change, format_timestamp, format_usd, OutputFormat,
};

/// Row for the comparison matrix table
#[derive(Tabled)]
struct MatrixRow {
    #[tabled(rename = "GPU")]
    name: String,
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "VRAM")]
    vram: String,
    #[tabled(rename = "Cheapest")]
    cheapest: String,
    #[tabled(rename = "Avg")]
    avg: String,
    #[tabled(rename = "Providers")]
    providers: usize,
    #[tabled(rename = "MoM")]
    change: String,
    #[tabled(rename = "TFLOPS/$")]
    flops_per_dollar: String,
}

impl From<&ComparisonRow> for MatrixRow {
    fn from(row: &ComparisonRow) -> Self {
        Self {
            name: row.name.clone(),
            tier: row.tier.clone(),
            vram: format!("{}GB", row.vram_gb),
            cheapest: format!("{} ({})", format_usd(row.cheapest_price), row.cheapest_provider),
            avg: format_usd(row.avg_price),
            providers: row.num_providers,
            change: color_price_change(row.monthly_change_pct),
            flops_per_dollar: format!("{:.1}", row.flops_per_dollar),
        }
    }
}

/// Row for the per-GPU offerings table
#[derive(Tabled)]
struct OfferingRow {
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Instance")]
    instance: String,
    #[tabled(rename = "$/hr")]
    hourly: String,
    #[tabled(rename = "$/month")]
    monthly: String,
    #[tabled(rename = "1yr reserved")]
    reserved_1yr: String,
    #[tabled(rename = "3yr reserved")]
    reserved_3yr: String,
}

/// Row for the price history table
#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Avg")]
    avg: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
    #[tabled(rename = "Availability")]
    availability: String,
}

/// Show the market summary
pub async fn show_summary(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: MarketSummary = client.get("api/summary").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            println!("{}", "GPU Market Summary".bold());
            println!("{}", "=".repeat(60));
            println!(
                "Tracking:               {} GPUs across {} providers",
                result.total_gpus_tracked, result.total_providers_tracked
            );
            println!();

            let flops = &result.best_flops_per_dollar;
            println!(
                "Best TFLOPS per dollar: {} ({:.1} at {} on {})",
                flops.gpu.cyan(),
                flops.value,
                format_usd(flops.at_price),
                flops.provider
            );
            let vram = &result.best_vram_per_dollar;
            println!(
                "Best VRAM per dollar:   {} ({:.1}GB at {} on {})",
                vram.gpu.cyan(),
                vram.value,
                format_usd(vram.at_price),
                vram.provider
            );
            let drop = &result.biggest_price_drop;
            println!(
                "Biggest price drop:     {} ({})",
                drop.gpu.cyan(),
                color_price_change(drop.change_pct)
            );
            let competitive = &result.most_competitive_market;
            println!(
                "Most competitive:       {} ({} providers, {:.0}% spread)",
                competitive.gpu.cyan(),
                competitive.num_providers,
                competitive.price_spread_pct
            );
            println!();

            let rows: Vec<MatrixRow> = result.comparison_matrix.iter().map(MatrixRow::from).collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);

            println!();
            println!(
                "Generated: {}",
                format_timestamp(&result.generated_at).dimmed()
            );
        }
    }

    Ok(())
}

/// Show the full comparison matrix
pub async fn show_matrix(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: Vec<ComparisonRow> = client.get("api/matrix").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let rows: Vec<MatrixRow> = result.iter().map(MatrixRow::from).collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);
        }
    }

    Ok(())
}

/// Show one GPU: spec, provider offerings, and price history
pub async fn show_gpu(client: &ApiClient, gpu_id: &str, format: OutputFormat) -> Result<()> {
    let result: GpuDetail = client.get(&format!("api/gpu?id={}", gpu_id)).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let spec = &result.spec;
            println!("{} ({})", spec.name.bold(), spec.id);
            println!("{}", "=".repeat(60));
            println!("Vendor:                 {}", spec.vendor);
            println!("Architecture:           {}", spec.arch);
            println!("VRAM:                   {}GB", spec.vram_gb);
            println!(
                "Compute:                {:.0} TFLOPS fp16 / {:.1} TFLOPS fp32",
                spec.fp16_tflops, spec.fp32_tflops
            );
            println!("TDP:                    {}W", spec.tdp_watts);
            println!("Interconnect:           {}", spec.interconnect);
            println!(
                "Released:               {} (MSRP ${})",
                spec.release_year, spec.msrp_usd
            );
            println!();

            if result.providers.is_empty() {
                println!("{}", "No provider offerings".yellow());
            } else {
                println!("{}", "Provider Offerings".bold());
                let rows: Vec<OfferingRow> = result
                    .providers
                    .iter()
                    .map(|o| OfferingRow {
                        provider: o.provider_name.clone(),
                        instance: o.instance.clone(),
                        hourly: format_usd(o.hourly_usd),
                        monthly: format_usd(o.monthly_usd),
                        reserved_1yr: format_usd(o.reserved_1yr_usd),
                        reserved_3yr: format_usd(o.reserved_3yr_usd),
                    })
                    .collect();
                let table = Table::new(rows).with(Style::rounded()).to_string();
                println!("{}", table);
            }

            if !result.price_trends.is_empty() {
                println!();
                println!("{}", "Price History".bold());
                let rows: Vec<TrendRow> = result
                    .price_trends
                    .iter()
                    .map(|p| TrendRow {
                        period: p.period.clone(),
                        avg: format_usd(p.avg_usd),
                        min: format_usd(p.min_usd),
                        max: format_usd(p.max_usd),
                        availability: color_availability(&p.availability),
                    })
                    .collect();
                let table = Table::new(rows).with(Style::rounded()).to_string();
                println!("{}", table);
            }
        }
    }

    Ok(())
}
