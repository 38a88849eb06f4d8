//! Analytics commands: utilization, reservations, forecasts, competitive
//! landscape, sustainability, supply chain, model fit

use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::client::{
    ApiClient, GpuUtilizationSummary, ModelClassFit, PriceForecast, ReservationProfile,
    SupplyChainSummary, SustainabilitySummary, VendorMoat,
};
use crate::output::{color_impact, color_score, format_usd, OutputFormat};

#[derive(Tabled)]
struct UtilizationRow {
    #[tabled(rename = "GPU")]
    gpu: String,
    #[tabled(rename = "Avg util")]
    utilization: String,
    #[tabled(rename = "Efficiency")]
    efficiency: String,
    #[tabled(rename = "Providers")]
    providers: usize,
}

#[derive(Tabled)]
struct ReservationRow {
    #[tabled(rename = "GPU")]
    gpu: String,
    #[tabled(rename = "On-demand")]
    on_demand: String,
    #[tabled(rename = "Spot")]
    spot: String,
    #[tabled(rename = "1yr")]
    reserved_1yr: String,
    #[tabled(rename = "3yr")]
    reserved_3yr: String,
    #[tabled(rename = "Breakeven 1yr")]
    breakeven_1yr: String,
    #[tabled(rename = "Breakeven 3yr")]
    breakeven_3yr: String,
}

#[derive(Tabled)]
struct ForecastRow {
    #[tabled(rename = "GPU")]
    gpu: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "3mo")]
    three_mo: String,
    #[tabled(rename = "12mo")]
    twelve_mo: String,
    #[tabled(rename = "Floor")]
    floor: String,
    #[tabled(rename = "Supply")]
    supply: String,
    #[tabled(rename = "Demand")]
    demand: String,
}

#[derive(Tabled)]
struct MoatRow {
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Moat")]
    moat: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Perf")]
    performance: String,
    #[tabled(rename = "Ecosystem")]
    ecosystem: String,
    #[tabled(rename = "Price/perf")]
    price_performance: String,
    #[tabled(rename = "Parity")]
    parity: String,
}

#[derive(Tabled)]
struct SustainabilityRow {
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Green energy")]
    green: String,
    #[tabled(rename = "PUE")]
    pue: String,
    #[tabled(rename = "Best region")]
    best: String,
    #[tabled(rename = "Worst region")]
    worst: String,
}

#[derive(Tabled)]
struct SupplyRiskRow {
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Risk")]
    risk: String,
    #[tabled(rename = "TSMC dep")]
    tsmc: String,
    #[tabled(rename = "Lead time")]
    lead_time: String,
    #[tabled(rename = "Trend")]
    trend: String,
    #[tabled(rename = "Bottlenecks")]
    bottlenecks: String,
}

#[derive(Tabled)]
struct ModelFitRow {
    #[tabled(rename = "GPU")]
    gpu: String,
    #[tabled(rename = "Config")]
    config: String,
    #[tabled(rename = "Tok/s")]
    throughput: u32,
    #[tabled(rename = "$/1M tokens")]
    cost: String,
    #[tabled(rename = "Fit")]
    fit: String,
}

/// Show per-GPU utilization averaged across providers
pub async fn show_utilization(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: BTreeMap<String, GpuUtilizationSummary> = client.get("api/utilization").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let rows: Vec<UtilizationRow> = result
                .iter()
                .map(|(gpu, summary)| UtilizationRow {
                    gpu: gpu.clone(),
                    utilization: format!("{:.1}%", summary.avg_utilization_pct),
                    efficiency: color_score(summary.avg_efficiency_score),
                    providers: summary.provider_count,
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);
        }
    }

    Ok(())
}

/// Show commitment-term economics
pub async fn show_reservations(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: Vec<ReservationProfile> = client.get("api/reservations").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let rows: Vec<ReservationRow> = result
                .iter()
                .map(|r| ReservationRow {
                    gpu: r.gpu_id.clone(),
                    on_demand: format_usd(r.on_demand_rate),
                    spot: format_usd(r.spot_avg_rate),
                    reserved_1yr: format_usd(r.reserved_1yr_rate),
                    reserved_3yr: format_usd(r.reserved_3yr_rate),
                    breakeven_1yr: format!("{}h/mo", r.breakeven_monthly_hrs_1yr),
                    breakeven_3yr: format!("{}h/mo", r.breakeven_monthly_hrs_3yr),
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);

            println!();
            println!("{}", "Recommended commitments".bold());
            for profile in &result {
                for advice in &profile.recommended_commitment {
                    println!(
                        "  {} at {}: {} ({})",
                        profile.gpu_id.cyan(),
                        advice.utilization_band,
                        advice.commitment.bold(),
                        advice.reason.dimmed()
                    );
                }
            }
        }
    }

    Ok(())
}

/// Show model-based price forecasts
pub async fn show_forecasts(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: Vec<PriceForecast> = client.get("api/forecasts").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let rows: Vec<ForecastRow> = result
                .iter()
                .map(|f| ForecastRow {
                    gpu: f.gpu_id.clone(),
                    current: format_usd(f.current_avg),
                    three_mo: format!(
                        "{} ({:.0}%)",
                        format_usd(f.forecast_3mo.mid),
                        f.forecast_3mo.confidence * 100.0
                    ),
                    twelve_mo: format!(
                        "{} ({:.0}%)",
                        format_usd(f.forecast_12mo.mid),
                        f.forecast_12mo.confidence * 100.0
                    ),
                    floor: format_usd(f.price_floor),
                    supply: f.supply_signal.clone(),
                    demand: f.demand_signal.clone(),
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);
        }
    }

    Ok(())
}

/// Show the competitive landscape
pub async fn show_competitive(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: Vec<VendorMoat> = client.get("api/competitive").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let rows: Vec<MoatRow> = result
                .iter()
                .map(|v| MoatRow {
                    vendor: v.vendor.clone(),
                    moat: color_score(v.moat_strength_score as f64),
                    share: format!("{:.1}%", v.market_share_pct),
                    performance: color_score(v.performance_score as f64),
                    ecosystem: color_score(v.ecosystem_maturity as f64),
                    price_performance: color_score(v.price_performance_ratio as f64),
                    parity: v.parity_timeline.clone().unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);
        }
    }

    Ok(())
}

/// Show sustainability rollups and per-GPU carbon data
pub async fn show_sustainability(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: SustainabilitySummary = client.get("api/sustainability").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let rows: Vec<SustainabilityRow> = result
                .providers
                .iter()
                .map(|p| SustainabilityRow {
                    provider: p.provider.clone(),
                    score: color_score(p.avg_sustainability_score),
                    green: format!("{:.0}%", p.avg_green_energy_pct),
                    pue: format!("{:.2}", p.avg_pue),
                    best: p.best_region.clone(),
                    worst: p.worst_region.clone(),
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);

            println!();
            println!("{}", "Annual carbon at full utilization".bold());
            for gpu in &result.gpu_carbon {
                println!(
                    "  {}: {}kg (US grid) / {}kg (EU nordic), {:.2} kWh/hr",
                    gpu.gpu_id.cyan(),
                    gpu.carbon_kg_per_year_us_avg,
                    gpu.carbon_kg_per_year_eu_nordic,
                    gpu.kwh_per_hour
                );
            }
        }
    }

    Ok(())
}

/// Show supply chain risk and export control timeline
pub async fn show_supply_chain(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: SupplyChainSummary = client.get("api/supplychain").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let rows: Vec<SupplyRiskRow> = result
                .vendors
                .iter()
                .map(|v| SupplyRiskRow {
                    vendor: v.vendor.clone(),
                    risk: color_score(100.0 - v.supply_risk_score as f64),
                    tsmc: format!("{}%", v.tsmc_dependency_pct),
                    lead_time: format!("{}wk", v.lead_time_weeks),
                    trend: color_impact(&v.risk_trend),
                    bottlenecks: v.bottlenecks.join(", "),
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);

            println!();
            println!("{}", "Export control timeline".bold());
            for event in &result.export_controls {
                println!(
                    "  [{}] {} - {} (impact: {})",
                    event.date.dimmed(),
                    event.regulation.bold(),
                    event.description,
                    color_impact(&event.impact)
                );
            }
        }
    }

    Ok(())
}

/// Show the model-size to hardware fit matrix
pub async fn show_model_fit(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: Vec<ModelClassFit> = client.get("api/modelfit").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            for class in &result {
                println!(
                    "{} (needs {}GB VRAM; e.g. {})",
                    class.size_class.bold(),
                    class.vram_required_gb,
                    class.models.join(", ")
                );
                let rows: Vec<ModelFitRow> = class
                    .gpus
                    .iter()
                    .map(|(gpu, fit)| ModelFitRow {
                        gpu: gpu.clone(),
                        config: fit.optimal_config.clone(),
                        throughput: fit.throughput_tok_s,
                        cost: format!("${:.2}", fit.cost_per_1m_tokens),
                        fit: color_score(fit.fit_score as f64),
                    })
                    .collect();
                let table = Table::new(rows).with(Style::rounded()).to_string();
                println!("{}", table);
                println!();
            }
        }
    }

    Ok(())
}
