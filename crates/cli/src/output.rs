//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message
#[allow(dead_code)]
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Format a dollar amount
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a signed percentage, green for price drops and red for rises
pub fn color_price_change(pct: f64) -> String {
    let formatted = format!("{:+.1}%", pct);
    if pct < 0.0 {
        formatted.green().to_string()
    } else if pct > 0.0 {
        formatted.red().to_string()
    } else {
        formatted
    }
}

/// Color an availability label
pub fn color_availability(availability: &str) -> String {
    match availability {
        "scarce" => availability.red().to_string(),
        "limited" => availability.yellow().to_string(),
        "moderate" => availability.normal().to_string(),
        "good" | "abundant" => availability.green().to_string(),
        _ => availability.to_string(),
    }
}

/// Color a news sentiment label
pub fn color_sentiment(sentiment: &str) -> String {
    match sentiment {
        "bullish" | "positive" => sentiment.green().to_string(),
        "bearish" | "negative" => sentiment.red().to_string(),
        _ => sentiment.to_string(),
    }
}

/// Color an impact or risk label
pub fn color_impact(impact: &str) -> String {
    match impact.to_lowercase().as_str() {
        "high" | "critical" | "worsening" => impact.red().to_string(),
        "medium" | "stable" => impact.yellow().to_string(),
        "low" | "improving" => impact.green().to_string(),
        _ => impact.to_string(),
    }
}

/// Color a 0-100 score
pub fn color_score(score: f64) -> String {
    let formatted = format!("{:.0}", score);
    if score >= 80.0 {
        formatted.green().to_string()
    } else if score >= 60.0 {
        formatted.yellow().to_string()
    } else {
        formatted.red().to_string()
    }
}

/// Format timestamp for display
pub fn format_timestamp(ts: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(ts) {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        ts.to_string()
    }
}
