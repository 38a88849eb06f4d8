//! GPU Market Dashboard CLI
//!
//! A command-line tool for querying GPU cloud pricing, market analytics,
//! and generated analysis from the market server.

mod client;
mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{analyst, analytics, catalog, market};

/// GPU Market Dashboard CLI
#[derive(Parser)]
#[command(name = "gpumkt")]
#[command(author, version, about = "CLI for the GPU Market Dashboard", long_about = None)]
pub struct Cli {
    /// API endpoint URL (can also be set via GPUMKT_API_URL env var)
    #[arg(long, env = "GPUMKT_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the market summary with headline extremes
    Summary,

    /// Show the full cross-GPU price comparison matrix
    Matrix,

    /// Show one GPU: spec, offerings, and price history
    Gpu {
        /// GPU id, e.g. H100-SXM
        id: String,
    },

    /// List GPU hardware specs
    Specs,

    /// List providers and their commitment discounts
    Providers,

    /// Show regional market profiles
    Regional,

    /// Show workload recommendations with live pricing
    Workloads,

    /// Show GPU utilization averaged across providers
    Utilization,

    /// Show reserved-commitment economics
    Reservations,

    /// Show price forecasts
    Forecasts,

    /// Show the accelerator vendor competitive landscape
    Competitive,

    /// Show sustainability rollups and carbon data
    Sustainability,

    /// Show supply chain risk and export controls
    SupplyChain,

    /// Show the model-size to hardware fit matrix
    ModelFit,

    /// Show today's market news
    News,

    /// Show generated market analysis
    Analyst {
        /// Section key (e.g. market_trends); all sections when omitted
        section: Option<String>,

        /// Analyze one GPU instead of a section
        #[arg(long, conflicts_with = "section")]
        gpu: Option<String>,

        /// Bypass the server-side analysis cache
        #[arg(long)]
        nocache: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize client
    let client = client::ApiClient::new(&cli.api_url)?;

    // Execute command
    match cli.command {
        Commands::Summary => market::show_summary(&client, cli.format).await?,
        Commands::Matrix => market::show_matrix(&client, cli.format).await?,
        Commands::Gpu { id } => market::show_gpu(&client, &id, cli.format).await?,
        Commands::Specs => catalog::show_specs(&client, cli.format).await?,
        Commands::Providers => catalog::show_providers(&client, cli.format).await?,
        Commands::Regional => catalog::show_regional(&client, cli.format).await?,
        Commands::Workloads => catalog::show_workloads(&client, cli.format).await?,
        Commands::Utilization => analytics::show_utilization(&client, cli.format).await?,
        Commands::Reservations => analytics::show_reservations(&client, cli.format).await?,
        Commands::Forecasts => analytics::show_forecasts(&client, cli.format).await?,
        Commands::Competitive => analytics::show_competitive(&client, cli.format).await?,
        Commands::Sustainability => analytics::show_sustainability(&client, cli.format).await?,
        Commands::SupplyChain => analytics::show_supply_chain(&client, cli.format).await?,
        Commands::ModelFit => analytics::show_model_fit(&client, cli.format).await?,
        Commands::News => analyst::show_news(&client, cli.format).await?,
        Commands::Analyst {
            section,
            gpu,
            nocache,
        } => {
            if let Some(gpu_id) = gpu {
                analyst::show_gpu_analysis(&client, &gpu_id, cli.format).await?;
            } else if let Some(section) = section {
                analyst::show_section(&client, &section, nocache, cli.format).await?;
            } else {
                analyst::show_all(&client, nocache, cli.format).await?;
            }
        }
    }

    Ok(())
}
