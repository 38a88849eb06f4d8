//! Catalog commands: GPU specs, providers, regions, workloads

use anyhow::Result;
use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::client::{ApiClient, GpuSpec, Provider, RegionProfile, WorkloadRecommendation};
use crate::output::{format_usd, OutputFormat};

#[derive(Tabled)]
struct SpecRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "VRAM")]
    vram: String,
    #[tabled(rename = "FP16 TFLOPS")]
    fp16: String,
    #[tabled(rename = "TDP")]
    tdp: String,
    #[tabled(rename = "Year")]
    year: u16,
}

#[derive(Tabled)]
struct ProviderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "GPUs listed")]
    gpus: usize,
    #[tabled(rename = "1yr discount")]
    discount_1yr: String,
    #[tabled(rename = "3yr discount")]
    discount_3yr: String,
}

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "YoY")]
    growth: String,
    #[tabled(rename = "Demand")]
    demand: u32,
    #[tabled(rename = "Premium")]
    premium: String,
    #[tabled(rename = "Energy $/kWh")]
    energy: String,
    #[tabled(rename = "DCs")]
    data_centers: u32,
}

#[derive(Tabled)]
struct WorkloadRow {
    #[tabled(rename = "Workload")]
    workload: String,
    #[tabled(rename = "Recommended")]
    recommended: String,
    #[tabled(rename = "Min GPUs")]
    min_gpus: u32,
    #[tabled(rename = "Monthly budget")]
    budget: String,
    #[tabled(rename = "Best value")]
    best_value: String,
}

/// List GPU hardware specs
pub async fn show_specs(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: Vec<GpuSpec> = client.get("api/specs").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let rows: Vec<SpecRow> = result
                .iter()
                .map(|s| SpecRow {
                    id: s.id.clone(),
                    name: s.name.clone(),
                    vendor: s.vendor.clone(),
                    tier: s.tier.clone(),
                    vram: format!("{}GB", s.vram_gb),
                    fp16: format!("{:.0}", s.fp16_tflops),
                    tdp: format!("{}W", s.tdp_watts),
                    year: s.release_year,
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);
        }
    }

    Ok(())
}

/// List providers and their commitment discounts
pub async fn show_providers(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: Vec<Provider> = client.get("api/providers").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let rows: Vec<ProviderRow> = result
                .iter()
                .map(|p| ProviderRow {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    kind: p.kind.clone(),
                    gpus: p.offerings.len(),
                    discount_1yr: format!("{:.0}%", p.reserved_1yr_discount * 100.0),
                    discount_3yr: format!("{:.0}%", p.reserved_3yr_discount * 100.0),
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);
        }
    }

    Ok(())
}

/// Show regional market profiles
pub async fn show_regional(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: Vec<RegionProfile> = client.get("api/regional").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let rows: Vec<RegionRow> = result
                .iter()
                .map(|r| RegionRow {
                    region: r.region.clone(),
                    share: format!("{:.1}%", r.market_share_pct),
                    growth: format!("{:+.1}%", r.yoy_growth_pct),
                    demand: r.gpu_demand_index,
                    premium: format!("+{:.0}%", r.avg_price_premium_pct),
                    energy: format!("{:.3}", r.energy_cost_kwh),
                    data_centers: r.data_centers_count,
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);

            for region in &result {
                println!(
                    "{} {}: {}",
                    "hubs".dimmed(),
                    region.region,
                    region.key_hubs.join(", ")
                );
            }
        }
    }

    Ok(())
}

/// Show workload recommendations with live pricing
pub async fn show_workloads(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: Vec<WorkloadRecommendation> = client.get("api/workloads").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let rows: Vec<WorkloadRow> = result
                .iter()
                .map(|w| WorkloadRow {
                    workload: w.workload.clone(),
                    recommended: w.recommended.join(", "),
                    min_gpus: w.min_gpus,
                    budget: format!("${}-${}", w.budget_monthly_low, w.budget_monthly_high),
                    best_value: w.best_value.clone(),
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);

            println!();
            println!("{}", "Cheapest current rates".bold());
            for workload in &result {
                for (gpu_id, price) in &workload.current_prices {
                    println!(
                        "  {} {}: {}/hr on {} ({}/month)",
                        workload.workload.dimmed(),
                        gpu_id,
                        format_usd(price.cheapest_usd),
                        price.provider,
                        format_usd(price.monthly_1gpu_usd)
                    );
                }
            }
        }
    }

    Ok(())
}
