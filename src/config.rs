//! Application configuration.
//!
//! Every section is optional; anything missing falls back to the defaults the
//! desktop build ships with (bundled feed, 1 s simulated latency).

use crate::domain::chart::ChartTheme;
use crate::domain::errors::ConfigError;
use crate::domain::logging::LogLevel;
use crate::domain::market_data::RecordPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Where kline records come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    /// Static dataset compiled into the binary, served after a fixed delay
    #[default]
    Bundled,
    /// `GET` against [`FeedConfig::url`]
    Http,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub source: SourceKind,
    pub url: Option<String>,
    pub simulated_delay_ms: u64,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub record_policy: RecordPolicy,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Bundled,
            url: None,
            simulated_delay_ms: 1000,
            timeout_ms: 5000,
            max_retries: 2,
            backoff_ms: 500,
            max_backoff_ms: 4000,
            record_policy: RecordPolicy::Keep,
        }
    }
}

impl FeedConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub feed: FeedConfig,
    pub chart: ChartTheme,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            chart: ChartTheme::default(),
            log_level: LogLevel::Debug,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidJson(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.source == SourceKind::Http && self.feed.url.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::InvalidParameter {
                name: "feed.url",
                reason: "required when feed.source is \"http\"".to_string(),
            });
        }
        if self.feed.timeout_ms == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "feed.timeout_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.feed.backoff_ms > self.feed.max_backoff_ms {
            return Err(ConfigError::InvalidParameter {
                name: "feed.backoff_ms",
                reason: format!("exceeds feed.max_backoff_ms ({})", self.feed.max_backoff_ms),
            });
        }
        self.chart.validate()
    }
}
