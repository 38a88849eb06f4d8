//! Analyst commands: generated analysis sections, GPU deep dives, daily news

use anyhow::Result;
use colored::Colorize;

use crate::client::{
    AllAnalysesResponse, AnalysisResponse, ApiClient, GpuAnalysisResponse, NewsItem,
};
use crate::output::{color_impact, color_sentiment, format_timestamp, print_info, OutputFormat};

/// Show one analysis section
pub async fn show_section(
    client: &ApiClient,
    section: &str,
    nocache: bool,
    format: OutputFormat,
) -> Result<()> {
    let path = if nocache {
        format!("api/analyst/{}?nocache=1", section)
    } else {
        format!("api/analyst/{}", section)
    };
    let result: AnalysisResponse = client.get(&path).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            println!("{}", result.section.replace('_', " ").to_uppercase().bold());
            println!("{}", "=".repeat(60));
            println!("{}", result.analysis);
        }
    }

    Ok(())
}

/// Show every analysis section
pub async fn show_all(client: &ApiClient, nocache: bool, format: OutputFormat) -> Result<()> {
    if nocache {
        print_info("Regenerating all sections, this can take a while");
    }
    let path = if nocache {
        "api/analyst/all?nocache=1"
    } else {
        "api/analyst/all"
    };
    let result: AllAnalysesResponse = client.get(path).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            for (section, analysis) in &result.sections {
                println!("{}", section.replace('_', " ").to_uppercase().bold());
                println!("{}", "=".repeat(60));
                println!("{}", analysis);
                println!();
            }
            println!(
                "Generated: {}",
                format_timestamp(&result.generated_at).dimmed()
            );
        }
    }

    Ok(())
}

/// Show a deep-dive analysis for one GPU
pub async fn show_gpu_analysis(
    client: &ApiClient,
    gpu_id: &str,
    format: OutputFormat,
) -> Result<()> {
    let result: GpuAnalysisResponse = client
        .get(&format!("api/analyst/gpu?id={}", gpu_id))
        .await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            println!("{}", format!("DEEP DIVE: {}", result.gpu).bold());
            println!("{}", "=".repeat(60));
            println!("{}", result.analysis);
        }
    }

    Ok(())
}

/// Show today's market news
pub async fn show_news(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: Vec<NewsItem> = client.get("api/news").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            println!("{}", "GPU Market News".bold());
            println!("{}", "=".repeat(60));
            for item in &result {
                println!(
                    "[{}] {} {}",
                    item.date.dimmed(),
                    item.source.cyan(),
                    format!("({})", item.category).dimmed()
                );
                println!(
                    "  {} [{} / {}]",
                    item.headline,
                    color_sentiment(&item.sentiment),
                    color_impact(&item.impact)
                );
            }
        }
    }

    Ok(())
}
