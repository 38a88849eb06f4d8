//! Server configuration

use anyhow::Result;
use market_lib::analyst::LlmConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration, read from MARKET_* environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Port for the JSON API, health, and metrics endpoints
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of an OpenAI-compatible completion API
    #[serde(default = "default_llm_api_base")]
    pub llm_api_base: String,

    /// API key for the completion endpoint (empty disables live analysis)
    #[serde(default)]
    pub llm_api_key: String,

    /// Model name passed to the completion endpoint
    #[serde(default = "default_llm_model")]
    pub llm_model: String,

    /// Completion request timeout in seconds
    #[serde(default = "default_llm_timeout")]
    pub llm_timeout_secs: u64,

    /// Directory holding the analysis and news caches
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
}

fn default_port() -> u16 {
    8080
}

fn default_llm_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_llm_timeout() -> u64 {
    120
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".market-cache")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            llm_api_base: default_llm_api_base(),
            llm_api_key: String::new(),
            llm_model: default_llm_model(),
            llm_timeout_secs: default_llm_timeout(),
            cache_dir: default_cache_dir(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("MARKET"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_default())
    }

    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig {
            api_base: self.llm_api_base.clone(),
            api_key: self.llm_api_key.clone(),
            model: self.llm_model.clone(),
            request_timeout: Duration::from_secs(self.llm_timeout_secs),
        }
    }
}
