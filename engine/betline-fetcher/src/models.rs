use serde::{Deserialize, Serialize};
use std::fmt;

// Records decode leniently: a missing field takes its default (0, "", false,
// empty list) instead of failing the whole body.

/// One sport from the betline catalog
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Sport {
    pub id: u64,
    pub name: String,
    pub family: String,
    pub regions: Vec<Region>,
}

/// A region (country or tournament group) under a sport
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Region {
    pub id: u64,
    pub name: String,
    pub leagues: Vec<League>,
}

/// A league as listed in the catalog
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct League {
    pub id: u64,
    pub name: String,

    /// Featured competition flag
    pub top: bool,

    pub top_order: Option<i64>,
    pub weight: Option<i64>,
    pub url: Option<String>,
    pub logo_url: Option<String>,
}

/// A league picked for fetching, with its composed display name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectedLeague {
    pub id: u64,
    pub name: String,
}

impl SelectedLeague {
    /// Compose `"<sport>, <region> <league>"` from catalog records
    pub fn from_catalog(sport: &Sport, region: &Region, league: &League) -> Self {
        let name = format!("{}, {} {}", sport.name, region.name, league.name);
        Self { id: league.id, name }
    }
}

impl fmt::Display for SelectedLeague {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Wrapper of the event list endpoint
#[derive(Debug, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

/// A single match
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct MatchEvent {
    pub id: u64,
    pub name: String,

    /// Kickoff as epoch milliseconds
    pub kickoff: i64,
}

/// Wrapper of the market list endpoint
#[derive(Debug, Deserialize)]
pub struct MarketResponse {
    #[serde(default)]
    pub markets: Vec<Market>,
}

/// A betting market of one event
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Market {
    pub id: u64,
    pub name: String,
    pub runners: Vec<Runner>,
}

/// One selectable outcome of a market
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Runner {
    pub id: u64,
    pub name: String,
    pub price: f64,
}

/// Failure of one branch of the fan-out tree
#[derive(Debug, Clone, Serialize)]
pub enum BranchFailure {
    /// Event list of a league could not be fetched or decoded
    League { league_id: u64, league_name: String, error: String },

    /// Market list of an event could not be fetched, decoded or stored
    Event { league_id: u64, event_id: u64, error: String },
}

/// Outcome counters of a full run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub leagues_selected: usize,
    pub leagues_completed: usize,
    pub leagues_failed: usize,
    pub events_fetched: usize,
    pub events_failed: usize,
    pub failures: Vec<BranchFailure>,
}

impl RunSummary {
    /// True when no branch failed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
