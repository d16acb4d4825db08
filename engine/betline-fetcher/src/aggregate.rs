//! Concurrent league → event → markets store filled by the pipeline

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{FetchError, Result};
use crate::models::{Market, MatchEvent, SelectedLeague};

/// Events of one league with their markets
pub type LeagueEvents = DashMap<MatchEvent, Vec<Market>>;

/// Ordered copy of one league, as consumed by the reporter
#[derive(Debug, Clone)]
pub struct LeagueSnapshot {
    pub league: SelectedLeague,
    pub events: Vec<(MatchEvent, Vec<Market>)>,
}

/// Results accumulated by the pipeline, independent of completion order
///
/// The outer entry of a league is created atomically on first use. Inner
/// writes are refused for an event that is already stored; the pipeline keeps
/// exactly one writer per (league, event) so this never fires in a clean run.
#[derive(Debug, Default)]
pub struct Aggregate {
    leagues: DashMap<SelectedLeague, LeagueEvents>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an empty event map for `league` unless one exists
    ///
    /// Returns true when this call created the entry.
    pub fn ensure_league(&self, league: &SelectedLeague) -> bool {
        match self.leagues.entry(league.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(DashMap::new());
                true
            }
        }
    }

    /// Store the markets of one event under an already registered league
    pub fn put(
        &self,
        league: &SelectedLeague,
        event: MatchEvent,
        markets: Vec<Market>,
    ) -> Result<()> {
        let events = self
            .leagues
            .get(league)
            .ok_or(FetchError::LeagueNotRegistered { league_id: league.id })?;

        let stored = match events.entry(event) {
            Entry::Occupied(occupied) => Err(FetchError::DuplicateEvent {
                league_id: league.id,
                event_id: occupied.key().id,
            }),
            Entry::Vacant(vacant) => {
                vacant.insert(markets);
                Ok(())
            }
        };
        stored
    }

    pub fn contains_league(&self, league: &SelectedLeague) -> bool {
        self.leagues.contains_key(league)
    }

    /// Markets stored for one event, if any
    pub fn markets_for(&self, league: &SelectedLeague, event: &MatchEvent) -> Option<Vec<Market>> {
        self.leagues.get(league)?.get(event).map(|markets| markets.value().clone())
    }

    pub fn league_count(&self) -> usize {
        self.leagues.len()
    }

    /// Number of events stored across all leagues
    pub fn event_count(&self) -> usize {
        self.leagues.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }

    /// Ordered copy of the whole aggregate
    ///
    /// Leagues are sorted by display name then id, events by kickoff then id.
    /// Markets keep their decoded order.
    pub fn snapshot(&self) -> Vec<LeagueSnapshot> {
        let mut leagues: Vec<LeagueSnapshot> = self
            .leagues
            .iter()
            .map(|entry| {
                let mut events: Vec<(MatchEvent, Vec<Market>)> = entry
                    .value()
                    .iter()
                    .map(|event| (event.key().clone(), event.value().clone()))
                    .collect();
                events.sort_by(|(a, _), (b, _)| a.kickoff.cmp(&b.kickoff).then(a.id.cmp(&b.id)));

                LeagueSnapshot { league: entry.key().clone(), events }
            })
            .collect();

        leagues.sort_by(|a, b| {
            a.league.name.cmp(&b.league.name).then(a.league.id.cmp(&b.league.id))
        });
        leagues
    }
}
