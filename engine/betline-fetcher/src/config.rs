use serde::Serialize;
use std::time::Duration;

use crate::error::{FetchError, Result};
use crate::{DEFAULT_EVENTS_PER_LEAGUE, DEFAULT_POOL_SIZE};

const EVENT_LIST_FLAGS: &str = "reg,urlv2,mm2,rrc,nodup";
const MARKET_LIST_FLAGS: &str = "reg,urlv2,mm2,rrc,nodup,smgv2,outv2";

/// Configuration for the betline fetcher
///
/// The production run is parameterless and always uses [`FetcherConfig::default`];
/// other values exist so tests can point the pipeline at a mock transport.
#[derive(Debug, Clone, Serialize)]
pub struct FetcherConfig {
    /// Betline API configuration
    pub api: ApiConfig,

    /// Selection rules applied to the sport catalog
    pub selection: SelectionConfig,

    /// Scheduler configuration
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    /// Scheme and host of the API, without trailing slash
    pub base_url: String,

    /// Locale tag sent as `ctag`
    pub locale: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionConfig {
    /// Sport families whose top leagues are fetched
    pub allowed_families: Vec<String>,

    /// Number of events per league that get their markets fetched
    pub events_per_league: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchedulerConfig {
    /// Maximum number of fetches in flight at once
    pub pool_size: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://leonbets.com".to_string(),
                locale: "en-US".to_string(),
                request_timeout_secs: 30,
                user_agent: concat!(
                    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
                    "(KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                )
                .to_string(),
            },
            selection: SelectionConfig {
                allowed_families: vec![
                    "Soccer".to_string(),
                    "IceHockey".to_string(),
                    "Tennis".to_string(),
                    "Basketball".to_string(),
                ],
                events_per_league: DEFAULT_EVENTS_PER_LEAGUE,
            },
            scheduler: SchedulerConfig { pool_size: DEFAULT_POOL_SIZE },
        }
    }
}

impl FetcherConfig {
    /// Build a default configuration against another API host
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.api.base_url = base_url.into();
        config
    }

    /// Check the configuration can drive a run
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(FetchError::config("base_url must not be empty"));
        }
        if self.scheduler.pool_size == 0 {
            return Err(FetchError::config("pool_size must be at least 1"));
        }
        if self.selection.allowed_families.is_empty() {
            return Err(FetchError::config("allowed_families must not be empty"));
        }
        Ok(())
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_secs)
    }

    /// Sport catalog endpoint
    pub fn sports_url(&self) -> String {
        format!("{}/api-2/betline/sports?ctag={}&flags=urlv2", self.base(), self.api.locale)
    }

    /// Event list endpoint for one league
    pub fn events_url(&self, league_id: u64) -> String {
        format!(
            "{}/api-2/betline/events/all?ctag={}&league_id={}&hideClosed=true&flags={}",
            self.base(),
            self.api.locale,
            league_id,
            EVENT_LIST_FLAGS
        )
    }

    /// Market list endpoint for one event
    pub fn markets_url(&self, event_id: u64) -> String {
        format!(
            "{}/api-2/betline/event/all?ctag={}&eventId={}&flags={}",
            self.base(),
            self.api.locale,
            event_id,
            MARKET_LIST_FLAGS
        )
    }

    fn base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}
