//! Disk caches for generated analysis and daily news
//!
//! Both caches fail open: a missing, stale, or unreadable file is a miss,
//! and write failures are logged and swallowed so generation still returns.

use crate::models::NewsItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::warn;

pub const ANALYSIS_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Default, Serialize, Deserialize)]
struct AnalysisCacheFile {
    /// Unix seconds of the last write
    timestamp: u64,
    sections: BTreeMap<String, String>,
}

/// Hour-TTL cache for generated analysis text, one file for all sections.
#[derive(Debug, Clone)]
pub struct AnalysisCache {
    path: PathBuf,
    ttl: Duration,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl AnalysisCache {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join("analysis_cache.json"),
            ttl: ANALYSIS_TTL,
        }
    }

    #[cfg(test)]
    pub fn with_ttl(dir: &Path, ttl: Duration) -> Self {
        Self {
            path: dir.join("analysis_cache.json"),
            ttl,
        }
    }

    fn load_any(&self) -> Option<AnalysisCacheFile> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn load(&self) -> Option<AnalysisCacheFile> {
        let file = self.load_any()?;
        let age = now_secs().saturating_sub(file.timestamp);
        (age < self.ttl.as_secs()).then_some(file)
    }

    pub fn get(&self, section: &str) -> Option<String> {
        self.load()?.sections.remove(section)
    }

    /// Read a section regardless of age, for serving when regeneration fails.
    pub fn get_stale(&self, section: &str) -> Option<String> {
        self.load_any()?.sections.remove(section)
    }

    /// Store one section, preserving other fresh sections in the file.
    /// Returns false when the write did not reach disk.
    pub fn put(&self, section: &str, text: &str) -> bool {
        let mut file = self.load().unwrap_or_default();
        file.sections.insert(section.to_string(), text.to_string());
        file.timestamp = now_secs();
        self.write(&file)
    }

    fn write(&self, file: &AnalysisCacheFile) -> bool {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(path = %self.path.display(), %err, "cache dir create failed");
                return false;
            }
        }
        match serde_json::to_string_pretty(file) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    warn!(path = %self.path.display(), %err, "cache write failed");
                    return false;
                }
                true
            }
            Err(err) => {
                warn!(%err, "cache serialize failed");
                false
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct NewsCacheFile {
    date: String,
    news: Vec<NewsItem>,
}

/// Date-keyed cache for the generated daily news list. Entries from any
/// previous date are misses regardless of age.
#[derive(Debug, Clone)]
pub struct NewsCache {
    path: PathBuf,
}

impl NewsCache {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join("news_cache.json"),
        }
    }

    pub fn get(&self, date: &str) -> Option<Vec<NewsItem>> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let file: NewsCacheFile = serde_json::from_str(&raw).ok()?;
        (file.date == date && !file.news.is_empty()).then_some(file.news)
    }

    /// Returns false when the write did not reach disk.
    pub fn put(&self, date: &str, news: &[NewsItem]) -> bool {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(path = %self.path.display(), %err, "news cache dir create failed");
                return false;
            }
        }
        let file = NewsCacheFile {
            date: date.to_string(),
            news: news.to_vec(),
        };
        match serde_json::to_string_pretty(&file) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    warn!(path = %self.path.display(), %err, "news cache write failed");
                    return false;
                }
                true
            }
            Err(err) => {
                warn!(%err, "news cache serialize failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn item(date: &str) -> NewsItem {
        NewsItem {
            date: date.to_string(),
            source: "Wire".to_string(),
            headline: "GPU prices move".to_string(),
            category: "pricing".to_string(),
            sentiment: "neutral".to_string(),
            impact: "low".to_string(),
        }
    }

    #[test]
    fn analysis_cache_round_trips_within_ttl() {
        let dir = tempdir().unwrap();
        let cache = AnalysisCache::new(dir.path());
        assert_eq!(cache.get("market_trends"), None);

        cache.put("market_trends", "prices fell");
        assert_eq!(cache.get("market_trends").as_deref(), Some("prices fell"));
        assert_eq!(cache.get("quick_summary"), None);
    }

    #[test]
    fn analysis_cache_expires() {
        let dir = tempdir().unwrap();
        let cache = AnalysisCache::with_ttl(dir.path(), Duration::from_secs(0));
        cache.put("market_trends", "prices fell");
        assert_eq!(cache.get("market_trends"), None);
    }

    #[test]
    fn stale_read_ignores_ttl() {
        let dir = tempdir().unwrap();
        let cache = AnalysisCache::with_ttl(dir.path(), Duration::from_secs(0));
        cache.put("market_trends", "prices fell");
        assert_eq!(cache.get_stale("market_trends").as_deref(), Some("prices fell"));
    }

    #[test]
    fn analysis_cache_keeps_sibling_sections() {
        let dir = tempdir().unwrap();
        let cache = AnalysisCache::new(dir.path());
        cache.put("a", "first");
        cache.put("b", "second");
        assert_eq!(cache.get("a").as_deref(), Some("first"));
        assert_eq!(cache.get("b").as_deref(), Some("second"));
    }

    #[test]
    fn put_reports_write_failure() {
        let dir = tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        fs::write(&blocked, "a file, not a directory").unwrap();

        let cache = AnalysisCache::new(&blocked);
        assert!(!cache.put("market_trends", "prices fell"));

        let news = NewsCache::new(&blocked);
        assert!(!news.put("2026-02-18", &[item("2026-02-18")]));

        let writable = AnalysisCache::new(dir.path());
        assert!(writable.put("market_trends", "prices fell"));
    }

    #[test]
    fn corrupt_analysis_cache_is_a_miss() {
        let dir = tempdir().unwrap();
        let cache = AnalysisCache::new(dir.path());
        fs::write(dir.path().join("analysis_cache.json"), "{not json").unwrap();
        assert_eq!(cache.get("market_trends"), None);
    }

    #[test]
    fn news_cache_hits_only_on_matching_date() {
        let dir = tempdir().unwrap();
        let cache = NewsCache::new(dir.path());
        cache.put("2026-02-18", &[item("2026-02-18")]);

        assert!(cache.get("2026-02-18").is_some());
        assert!(cache.get("2026-02-19").is_none());
    }

    #[test]
    fn empty_news_list_is_a_miss() {
        let dir = tempdir().unwrap();
        let cache = NewsCache::new(dir.path());
        cache.put("2026-02-18", &[]);
        assert!(cache.get("2026-02-18").is_none());
    }
}
