//! Narrative analysis over the market snapshot
//!
//! Wraps an injected [`TextGenerator`] with prompt assembly, an hour-TTL
//! disk cache per analysis section, and a date-keyed cache for generated
//! daily news with a static fallback.

mod cache;
mod context;
mod generator;

pub use cache::{AnalysisCache, NewsCache, ANALYSIS_TTL};
pub use context::market_context;
pub use generator::{GenerationError, LlmClient, LlmConfig, TextGenerator};

use crate::aggregate::{
    cheapest_offerings, sustainability_summary, utilization_summary,
};
use crate::catalog::MarketSnapshot;
use crate::health::{components, HealthRegistry};
use crate::models::NewsItem;
use crate::observability::MarketMetrics;
use chrono::{Duration as ChronoDuration, NaiveDate, Utc};
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Dashboard analysis sections, each cached under its own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    QuickSummary,
    MarketTrends,
    RegionalOpportunities,
    InvestmentOutlook,
    MarketNotes,
    EfficiencyOptimization,
    PriceForecasts,
    SustainabilityRisk,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::QuickSummary,
        Section::MarketTrends,
        Section::RegionalOpportunities,
        Section::InvestmentOutlook,
        Section::MarketNotes,
        Section::EfficiencyOptimization,
        Section::PriceForecasts,
        Section::SustainabilityRisk,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::QuickSummary => "quick_summary",
            Section::MarketTrends => "market_trends",
            Section::RegionalOpportunities => "regional_opportunities",
            Section::InvestmentOutlook => "investment_outlook",
            Section::MarketNotes => "market_notes",
            Section::EfficiencyOptimization => "efficiency_optimization",
            Section::PriceForecasts => "price_forecasts",
            Section::SustainabilityRisk => "sustainability_risk",
        }
    }

    pub fn parse(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }

    fn max_tokens(self) -> u32 {
        match self {
            Section::QuickSummary => 500,
            Section::RegionalOpportunities => 2500,
            Section::MarketNotes => 4000,
            Section::PriceForecasts => 3500,
            _ => 3000,
        }
    }
}

/// Generates, caches, and serves narrative analyses of the snapshot.
///
/// Reports its own condition through the shared [`HealthRegistry`]: the
/// `analyst` component degrades on generation failures and recovers on the
/// next success, the `cache` component degrades when writes miss the disk.
pub struct Analyst {
    generator: Box<dyn TextGenerator>,
    snapshot: Arc<MarketSnapshot>,
    cache: AnalysisCache,
    news_cache: NewsCache,
    metrics: MarketMetrics,
    health: HealthRegistry,
}

impl Analyst {
    pub fn new(
        generator: Box<dyn TextGenerator>,
        snapshot: Arc<MarketSnapshot>,
        cache_dir: &Path,
        health: HealthRegistry,
    ) -> Self {
        Self {
            generator,
            snapshot,
            cache: AnalysisCache::new(cache_dir),
            news_cache: NewsCache::new(cache_dir),
            metrics: MarketMetrics::new(),
            health,
        }
    }

    async fn record_cache_write(&self, persisted: bool, what: &str) {
        if persisted {
            self.health.set_healthy(components::CACHE).await;
        } else {
            self.health
                .set_degraded(components::CACHE, format!("{what} write failed"))
                .await;
        }
    }

    /// Generate one analysis section, serving a fresh cached copy unless
    /// `use_cache` is false.
    pub async fn section(&self, section: Section, use_cache: bool) -> Result<String, GenerationError> {
        if use_cache {
            if let Some(text) = self.cache.get(section.key()) {
                self.metrics.inc_analyst_cache_hit(section.key());
                return Ok(text);
            }
        }

        let (system, user) = self.prompts(section);
        match self.generator.generate(&system, &user, section.max_tokens()).await {
            Ok(text) => {
                self.metrics.inc_analyst_generation(section.key());
                let persisted = self.cache.put(section.key(), &text);
                self.record_cache_write(persisted, "analysis cache").await;
                self.health.set_healthy(components::ANALYST).await;
                Ok(text)
            }
            Err(err) => {
                self.metrics.inc_analyst_failure();
                self.health
                    .set_degraded(components::ANALYST, err.to_string())
                    .await;
                // An expired cached copy beats no analysis at all.
                if let Some(stale) = self.cache.get_stale(section.key()) {
                    warn!(section = section.key(), %err, "generation failed, serving stale cache");
                    return Ok(stale);
                }
                warn!(section = section.key(), %err, "analysis generation failed");
                Err(err)
            }
        }
    }

    /// Deep-dive on a single GPU. Never cached; unknown ids short-circuit.
    pub async fn gpu_deep_dive(&self, gpu_id: &str) -> Result<String, GenerationError> {
        let Some(spec) = self.snapshot.spec(gpu_id) else {
            return Ok(format!("Unknown GPU: {gpu_id}"));
        };
        let offerings = cheapest_offerings(&self.snapshot, gpu_id);
        let trends = self.snapshot.history_for(gpu_id);

        let system = "You are a GPU market analyst. Provide a focused analysis.".to_string();
        let mut user = format!("Deep-dive on {}:\n\n", spec.name);
        let _ = writeln!(user, "Specs: {}", serde_json::to_string_pretty(spec).unwrap_or_default());
        let _ = writeln!(
            user,
            "Providers (by price): {}",
            serde_json::to_string_pretty(&offerings.iter().take(5).collect::<Vec<_>>())
                .unwrap_or_default()
        );
        let _ = writeln!(
            user,
            "Historical pricing: {}",
            serde_json::to_string_pretty(&trends).unwrap_or_default()
        );
        user.push_str(
            "\nProvide:\n\
             1. Current market positioning and value proposition\n\
             2. Price trend analysis and forecast\n\
             3. Best use cases at current pricing\n\
             4. Buy/wait/skip recommendation\n\
             5. Best provider recommendation with reasoning",
        );

        let result = self.generator.generate(&system, &user, 2000).await;
        match &result {
            Ok(_) => {
                self.metrics.inc_analyst_generation("gpu_deep_dive");
                self.health.set_healthy(components::ANALYST).await;
            }
            Err(err) => {
                self.metrics.inc_analyst_failure();
                self.health
                    .set_degraded(components::ANALYST, err.to_string())
                    .await;
            }
        }
        result
    }

    /// Today's news list: cached per calendar date, generated by the model,
    /// falling back to the static feed with dates shifted to today.
    pub async fn daily_news(&self) -> Vec<NewsItem> {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        if let Some(news) = self.news_cache.get(&today) {
            self.metrics.inc_analyst_cache_hit("daily_news");
            return news;
        }

        match self.generate_news(&today).await {
            Ok(news) => {
                self.metrics.inc_analyst_generation("daily_news");
                let persisted = self.news_cache.put(&today, &news);
                self.record_cache_write(persisted, "news cache").await;
                self.health.set_healthy(components::ANALYST).await;
                news
            }
            Err(err) => {
                warn!(%err, "news generation failed, shifting static feed");
                self.metrics.inc_news_fallback();
                self.health
                    .set_degraded(components::ANALYST, format!("news generation failed: {err}"))
                    .await;
                shift_news_to(&self.snapshot.news_feed, &today)
            }
        }
    }

    async fn generate_news(&self, today: &str) -> Result<Vec<NewsItem>, GenerationError> {
        let system = "You are a financial news wire editor covering the AI GPU compute market. \
                      Generate realistic news headlines that could appear on major outlets. \
                      Headlines should be specific, data-driven, and reflect current market \
                      dynamics. Return ONLY valid JSON, no markdown fences, no commentary."
            .to_string();
        let context = market_context(&self.snapshot);
        let user = format!(
            "Based on this GPU market data, generate exactly 15 realistic news headlines \
             for today ({today}).\n\n{context}\n\
             Return a JSON array of exactly 15 objects with keys: date, source, headline, \
             category (pricing|demand|supply|policy|earnings|expansion), \
             sentiment (bullish|bearish|neutral|positive|negative), impact (high|medium|low).\n\
             Use varied sources, cover all categories, mix sentiments, spread dates over \
             the last 5 days with {today} as the most recent, and return ONLY the JSON array."
        );

        let raw = self.generator.generate(&system, &user, 3000).await?;
        let news = parse_news_json(&raw)?;
        info!(items = news.len(), "generated daily news");
        Ok(news)
    }

    /// All sections in one pass; failed sections carry a placeholder so
    /// the dashboard still renders.
    pub async fn all_sections(&self, use_cache: bool) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            let text = self
                .section(section, use_cache)
                .await
                .unwrap_or_else(|err| format!("[analysis unavailable: {err}]"));
            out.push((section.key(), text));
        }
        out
    }

    fn prompts(&self, section: Section) -> (String, String) {
        let context = market_context(&self.snapshot);
        match section {
            Section::QuickSummary => (
                "You are a GPU market analyst. Be extremely concise.".to_string(),
                format!(
                    "In 3-4 sentences, summarize the current AI GPU market state:\n\n{context}\n\
                     Focus on: current pricing levels, direction of travel, key risks, and one \
                     actionable insight."
                ),
            ),
            Section::MarketTrends => (
                "You are a senior GPU market analyst at a financial intelligence firm. \
                 Be specific with numbers, cite data points, identify key inflection points, \
                 and provide actionable intelligence. Use bullet points and ## headers."
                    .to_string(),
                format!(
                    "Based on this real-time GPU market data, provide a comprehensive market \
                     trend analysis:\n\n{context}\n\
                     Cover: price trajectory across GPU tiers, supply/demand dynamics, the \
                     Blackwell generational transition, AMD competitive pressure, and key \
                     signals for procurement teams. Be concise but data-dense."
                ),
            ),
            Section::RegionalOpportunities => (
                "You are a GPU infrastructure strategist advising on global compute \
                 deployment. Provide data-driven regional analysis with specific \
                 recommendations."
                    .to_string(),
                format!(
                    "Analyze regional GPU market opportunities:\n\n{context}\n\
                     Cover: regional price arbitrage, fastest-growing markets, regulatory \
                     impact, energy cost impact on total cost, and where to deploy for cost \
                     versus latency versus compliance."
                ),
            ),
            Section::InvestmentOutlook => (
                "You are a senior technology investment analyst specializing in AI \
                 infrastructure. Provide actionable investment intelligence on the GPU \
                 compute market."
                    .to_string(),
                format!(
                    "Based on this GPU market data, provide an investment outlook:\n\n{context}\n\
                     Cover: buy-versus-rent decision framework, price floor analysis per tier, \
                     technology transition timing, provider risk assessment, budget planning \
                     for the next four quarters, and underpriced opportunities."
                ),
            ),
            Section::MarketNotes => {
                let news_ctx: String = self
                    .snapshot
                    .news_feed
                    .iter()
                    .take(10)
                    .map(|n| {
                        format!(
                            "- [{}] {}: {} (sentiment: {}, impact: {})\n",
                            n.date, n.source, n.headline, n.sentiment, n.impact
                        )
                    })
                    .collect();
                (
                    "You are a senior GPU market strategist writing analyst notes for an \
                     institutional trading desk. Be specific, data-driven, and include \
                     actionable predictions with timeframes. Use bullet points with \
                     [BUY]/[SELL]/[HOLD]/[WATCH] tags."
                        .to_string(),
                    format!(
                        "Write institutional analyst notes.\n\n## MARKET DATA\n{context}\n\
                         ## RECENT NEWS\n{news_ctx}\n\
                         Generate: a 30/60/90-day outlook with price predictions, key trade \
                         ideas with providers and commitment types, risk signals, sector \
                         rotation calls, and arbitrage opportunities, as 5-8 concise notes."
                    ),
                )
            }
            Section::EfficiencyOptimization => {
                let mut util_ctx = String::new();
                for (gpu_id, data) in utilization_summary(&self.snapshot) {
                    let _ = writeln!(
                        util_ctx,
                        "- {gpu_id}: avg utilization {:.1}%, avg efficiency {:.1}/100 across {} providers",
                        data.avg_utilization_pct, data.avg_efficiency_score, data.provider_count
                    );
                }
                (
                    "You are a GPU infrastructure efficiency consultant. Provide data-driven \
                     recommendations for optimizing GPU utilization and reducing waste."
                        .to_string(),
                    format!(
                        "Analyze GPU utilization efficiency:\n\n## MARKET CONTEXT\n{context}\n\
                         ## UTILIZATION DATA\n{util_ctx}\n\
                         Cover: where compute is wasted, right-sizing migrations, off-peak \
                         scheduling, a provider efficiency ranking, and quantified savings."
                    ),
                )
            }
            Section::PriceForecasts => {
                let mut forecast_ctx = String::new();
                for f in &self.snapshot.forecasts {
                    let _ = writeln!(
                        forecast_ctx,
                        "- {}: current=${:.2}, elasticity={:.2}, 3mo=${:.2} (conf {:.0}%), \
                         12mo=${:.2} (conf {:.0}%), floor=${:.2}, supply={}, demand={}, pattern={}",
                        f.gpu_id,
                        f.current_avg,
                        f.elasticity_coefficient,
                        f.forecast_3mo.mid,
                        f.forecast_3mo.confidence * 100.0,
                        f.forecast_12mo.mid,
                        f.forecast_12mo.confidence * 100.0,
                        f.price_floor,
                        f.supply_signal,
                        f.demand_signal,
                        f.pattern_match,
                    );
                }
                let mut comp_ctx = String::new();
                for v in &self.snapshot.moat {
                    let _ = writeln!(
                        comp_ctx,
                        "- {}: moat={}/100, share={}%, perf={}/100, price/perf={}/100",
                        v.vendor,
                        v.moat_strength_score,
                        v.market_share_pct,
                        v.performance_score,
                        v.price_performance_ratio,
                    );
                }
                (
                    "You are a quantitative analyst specializing in GPU compute pricing \
                     models. Provide data-driven price forecasts with confidence intervals."
                        .to_string(),
                    format!(
                        "Generate GPU price forecasts and competitive analysis:\n\n\
                         ## MARKET CONTEXT\n{context}\n\
                         ## PRICE FORECAST MODELS\n{forecast_ctx}\n\
                         ## COMPETITIVE LANDSCAPE\n{comp_ctx}\n\
                         Cover: 30/60/90-day targets with confidence, elasticity analysis, \
                         competitive displacement, generational crossover points, arbitrage \
                         opportunities, and bull/bear scenarios for the next 12 months."
                    ),
                )
            }
            Section::SustainabilityRisk => {
                let summary = sustainability_summary(&self.snapshot);
                let mut sus_ctx = String::new();
                for p in &summary.providers {
                    let _ = writeln!(
                        sus_ctx,
                        "- {}: avg sustainability={}/100, green energy={}%, PUE={}, best={}, worst={}",
                        p.provider,
                        p.avg_sustainability_score,
                        p.avg_green_energy_pct,
                        p.avg_pue,
                        p.best_region,
                        p.worst_region,
                    );
                }
                let mut supply_ctx = String::new();
                for v in &self.snapshot.supply_chain {
                    let _ = writeln!(
                        supply_ctx,
                        "- {}: risk_score={}/100, TSMC_dep={}%, lead_time={}wk, trend={}",
                        v.vendor,
                        v.supply_risk_score,
                        v.tsmc_dependency_pct,
                        v.lead_time_weeks,
                        v.risk_trend,
                    );
                }
                let export_ctx: String = self
                    .snapshot
                    .export_controls
                    .iter()
                    .rev()
                    .take(5)
                    .map(|e| format!("- [{}] {}: {} (impact: {})\n", e.date, e.regulation, e.description, e.impact))
                    .collect();
                (
                    "You are an ESG analyst and supply chain risk specialist for AI \
                     infrastructure. Include specific data points and actionable \
                     recommendations."
                        .to_string(),
                    format!(
                        "Analyze sustainability and supply chain risks for GPU compute:\n\n\
                         ## SUSTAINABILITY METRICS\n{sus_ctx}\n\
                         ## SUPPLY CHAIN RISK\n{supply_ctx}\n\
                         ## RECENT EXPORT CONTROLS\n{export_ctx}\n\
                         Cover: an ESG provider ranking, carbon cost per GPU-hour by region, \
                         supply chain single points of failure, the geopolitical risk map, \
                         the regulatory outlook, and resilience recommendations."
                    ),
                )
            }
        }
    }
}

/// Strip optional markdown fences and parse the model's news JSON.
fn parse_news_json(raw: &str) -> Result<Vec<NewsItem>, GenerationError> {
    let mut text = raw.trim();
    if let Some(stripped) = text.strip_prefix("```") {
        text = stripped.strip_prefix("json").unwrap_or(stripped);
    }
    if let Some(stripped) = text.strip_suffix("```") {
        text = stripped;
    }
    let text = text.trim();

    let news: Vec<NewsItem> = serde_json::from_str(text)
        .map_err(|err| GenerationError::MalformedNews(err.to_string()))?;
    if news.len() < 5 {
        return Err(GenerationError::MalformedNews(format!(
            "expected at least 5 items, got {}",
            news.len()
        )));
    }
    Ok(news)
}

/// Shift the static feed so its newest item lands on `today`, preserving
/// the relative spacing of older items.
fn shift_news_to(feed: &[NewsItem], today: &str) -> Vec<NewsItem> {
    let Some(most_recent) = feed.iter().map(|n| n.date.as_str()).max() else {
        return Vec::new();
    };
    let (Ok(most_recent), Ok(today)) = (
        NaiveDate::parse_from_str(most_recent, "%Y-%m-%d"),
        NaiveDate::parse_from_str(today, "%Y-%m-%d"),
    ) else {
        return feed.to_vec();
    };
    let gap = today.signed_duration_since(most_recent).num_days();

    feed.iter()
        .map(|item| {
            let mut shifted = item.clone();
            if let Ok(date) = NaiveDate::parse_from_str(&item.date, "%Y-%m-%d") {
                shifted.date = (date + ChronoDuration::days(gap)).format("%Y-%m-%d").to_string();
            }
            shifted
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::ComponentStatus;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::tempdir;

    struct CannedGenerator {
        responses: Mutex<Vec<Result<String, GenerationError>>>,
        calls: Mutex<u32>,
    }

    impl CannedGenerator {
        fn new(responses: Vec<Result<String, GenerationError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _: &str, _: &str, _: u32) -> Result<String, GenerationError> {
            *self.calls.lock().unwrap() += 1;
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Err(GenerationError::Empty))
        }
    }

    fn analyst_with(responses: Vec<Result<String, GenerationError>>) -> (Analyst, Arc<CannedGenerator>, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let generator = Arc::new(CannedGenerator::new(responses));
        let snapshot = Arc::new(MarketSnapshot::builtin());

        struct Forward(Arc<CannedGenerator>);
        #[async_trait]
        impl TextGenerator for Forward {
            async fn generate(&self, s: &str, u: &str, m: u32) -> Result<String, GenerationError> {
                self.0.generate(s, u, m).await
            }
        }

        let analyst = Analyst::new(
            Box::new(Forward(generator.clone())),
            snapshot,
            dir.path(),
            HealthRegistry::new(),
        );
        (analyst, generator, dir)
    }

    #[tokio::test]
    async fn section_caches_generated_text() {
        let (analyst, generator, _dir) =
            analyst_with(vec![Ok("fresh analysis".to_string())]);

        let first = analyst.section(Section::MarketTrends, true).await.unwrap();
        let second = analyst.section(Section::MarketTrends, true).await.unwrap();
        assert_eq!(first, "fresh analysis");
        assert_eq!(second, "fresh analysis");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn nocache_bypasses_but_still_stores() {
        let (analyst, generator, _dir) = analyst_with(vec![
            Ok("second".to_string()),
            Ok("first".to_string()),
        ]);

        assert_eq!(analyst.section(Section::QuickSummary, true).await.unwrap(), "first");
        assert_eq!(analyst.section(Section::QuickSummary, false).await.unwrap(), "second");
        // The refreshed text is now the cached copy.
        assert_eq!(analyst.section(Section::QuickSummary, true).await.unwrap(), "second");
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn generation_failure_serves_cached_text() {
        let (analyst, generator, _dir) = analyst_with(vec![
            Err(GenerationError::Empty),
            Ok("original".to_string()),
        ]);

        assert_eq!(analyst.section(Section::QuickSummary, true).await.unwrap(), "original");
        // Forced regeneration fails, so the cached copy is served instead.
        assert_eq!(analyst.section(Section::QuickSummary, false).await.unwrap(), "original");
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn unknown_gpu_deep_dive_never_calls_the_model() {
        let (analyst, generator, _dir) = analyst_with(vec![Ok("unused".to_string())]);
        let text = analyst.gpu_deep_dive("TPU-V9").await.unwrap();
        assert_eq!(text, "Unknown GPU: TPU-V9");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn daily_news_falls_back_to_shifted_static_feed() {
        let (analyst, _generator, _dir) = analyst_with(vec![Err(GenerationError::Empty)]);
        let news = analyst.daily_news().await;

        assert_eq!(news.len(), analyst.snapshot.news_feed.len());
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let newest = news.iter().map(|n| n.date.clone()).max().unwrap();
        assert_eq!(newest, today);
        // Headlines are untouched, only dates move.
        assert_eq!(news[0].headline, analyst.snapshot.news_feed[0].headline);
    }

    #[tokio::test]
    async fn daily_news_accepts_fenced_json() {
        let payload = serde_json::to_string(
            &(0..6)
                .map(|i| NewsItem {
                    date: "2026-02-18".to_string(),
                    source: "Wire".to_string(),
                    headline: format!("headline {i}"),
                    category: "pricing".to_string(),
                    sentiment: "neutral".to_string(),
                    impact: "low".to_string(),
                })
                .collect::<Vec<_>>(),
        )
        .unwrap();
        let fenced = format!("```json\n{payload}\n```");
        let (analyst, _generator, _dir) = analyst_with(vec![Ok(fenced)]);

        let news = analyst.daily_news().await;
        assert_eq!(news.len(), 6);
        assert_eq!(news[0].headline, "headline 0");
    }

    #[tokio::test]
    async fn daily_news_rejects_short_lists() {
        let (analyst, _generator, _dir) =
            analyst_with(vec![Ok("[]".to_string())]);
        // Parse fails validation, so the static fallback is served.
        let news = analyst.daily_news().await;
        assert_eq!(news.len(), analyst.snapshot.news_feed.len());
    }

    #[tokio::test]
    async fn generation_failure_degrades_analyst_health() {
        let (analyst, _generator, _dir) = analyst_with(vec![Err(GenerationError::Empty)]);
        assert!(analyst.section(Section::MarketTrends, true).await.is_err());

        let report = analyst.health.health().await;
        assert_eq!(
            report.components[components::ANALYST].status,
            ComponentStatus::Degraded
        );
    }

    #[tokio::test]
    async fn successful_generation_restores_analyst_health() {
        let (analyst, _generator, _dir) = analyst_with(vec![
            Ok("recovered".to_string()),
            Err(GenerationError::Empty),
        ]);

        assert!(analyst.section(Section::MarketTrends, true).await.is_err());
        assert_eq!(analyst.section(Section::MarketTrends, true).await.unwrap(), "recovered");

        let report = analyst.health.health().await;
        assert_eq!(
            report.components[components::ANALYST].status,
            ComponentStatus::Healthy
        );
        assert_eq!(
            report.components[components::CACHE].status,
            ComponentStatus::Healthy
        );
    }

    #[tokio::test]
    async fn unwritable_cache_degrades_cache_health() {
        struct AlwaysOk;
        #[async_trait]
        impl TextGenerator for AlwaysOk {
            async fn generate(&self, _: &str, _: &str, _: u32) -> Result<String, GenerationError> {
                Ok("fresh".to_string())
            }
        }

        let dir = tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, "a file, not a directory").unwrap();

        let health = HealthRegistry::new();
        let analyst = Analyst::new(
            Box::new(AlwaysOk),
            Arc::new(MarketSnapshot::builtin()),
            &blocked,
            health.clone(),
        );

        assert_eq!(analyst.section(Section::QuickSummary, true).await.unwrap(), "fresh");
        let report = health.health().await;
        assert_eq!(
            report.components[components::CACHE].status,
            ComponentStatus::Degraded
        );
        // Generation itself still works.
        assert_eq!(
            report.components[components::ANALYST].status,
            ComponentStatus::Healthy
        );
    }

    #[test]
    fn section_keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.key()), Some(section));
        }
        assert_eq!(Section::parse("nonsense"), None);
    }
}
