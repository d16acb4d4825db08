use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::aggregate::Aggregate;
use crate::config::FetcherConfig;
use crate::decode::{decode_event_list, decode_market_list, decode_sport_catalog};
use crate::error::Result;
use crate::models::*;
use crate::scheduler::FetchScheduler;
use crate::selection::{cap_events, select_leagues};
use crate::transport::{HttpTransport, Transport};

/// Result of one league branch whose event list was fetched
#[derive(Debug, Default)]
pub struct LeagueOutcome {
    pub events_fetched: usize,
    pub failures: Vec<BranchFailure>,
}

/// Fetch pipeline: sports → leagues → events → markets
///
/// Cloning is cheap; every clone shares the transport, the scheduler and the
/// aggregate, which is how spawned branches reach them.
#[derive(Clone)]
pub struct BetlineFetcher {
    config: Arc<FetcherConfig>,
    transport: Arc<dyn Transport>,
    scheduler: FetchScheduler,
    aggregate: Arc<Aggregate>,
}

impl BetlineFetcher {
    /// Create a new fetcher over any transport
    pub fn new(config: FetcherConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        let scheduler = FetchScheduler::new(config.scheduler.pool_size);

        Ok(Self {
            config: Arc::new(config),
            transport,
            scheduler,
            aggregate: Arc::new(Aggregate::new()),
        })
    }

    /// Create a new fetcher talking HTTP to the configured API
    pub fn with_http(config: FetcherConfig) -> anyhow::Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::new(config, Arc::new(transport))?)
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Results gathered so far
    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    /// Fetch and decode the sport catalog
    pub async fn fetch_sports(&self) -> Result<Vec<Sport>> {
        let url = self.config.sports_url();
        self.scheduler
            .run(async {
                let body = self.transport.fetch(&url).await?;
                decode_sport_catalog(&body)
            })
            .await
    }

    /// Fetch and decode the event list of one league
    pub async fn fetch_events(&self, league_id: u64) -> Result<Vec<MatchEvent>> {
        let url = self.config.events_url(league_id);
        self.scheduler
            .run(async {
                let body = self.transport.fetch(&url).await?;
                decode_event_list(&body)
            })
            .await
    }

    /// Fetch and decode the market list of one event
    pub async fn fetch_markets(&self, event_id: u64) -> Result<Vec<Market>> {
        let url = self.config.markets_url(event_id);
        self.scheduler
            .run(async {
                let body = self.transport.fetch(&url).await?;
                decode_market_list(&body)
            })
            .await
    }

    /// Sports stage without fan-out: catalog fetch plus league selection
    pub async fn selected_leagues(&self) -> Result<Vec<SelectedLeague>> {
        let sports = self.fetch_sports().await?;
        let leagues = select_leagues(&sports, &self.config.selection.allowed_families);

        info!("Selected {} top leagues from {} sports", leagues.len(), sports.len());
        Ok(leagues)
    }

    /// Run the whole pipeline and wait for every branch to settle
    ///
    /// Only a catalog failure is returned as `Err`; league and event failures
    /// are collected in the summary while the other branches complete.
    pub async fn run(&self) -> Result<RunSummary> {
        info!("Starting betline fetch run");

        let leagues = self.selected_leagues().await?;
        let mut summary = RunSummary { leagues_selected: leagues.len(), ..Default::default() };

        let results = self
            .scheduler
            .fan_out(leagues.clone(), |league| {
                let fetcher = self.clone();
                async move { fetcher.process_league(league).await }
            })
            .await;

        for (league, result) in leagues.iter().zip(results) {
            match result {
                Ok(outcome) => {
                    summary.leagues_completed += 1;
                    summary.events_fetched += outcome.events_fetched;
                    summary.events_failed += outcome.failures.len();
                    summary.failures.extend(outcome.failures);
                }
                Err(e) => {
                    warn!("League {} failed: {}", league, e);
                    summary.leagues_failed += 1;
                    summary.failures.push(BranchFailure::League {
                        league_id: league.id,
                        league_name: league.name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Run finished: {}/{} leagues completed, {} events fetched, {} events failed",
            summary.leagues_completed,
            summary.leagues_selected,
            summary.events_fetched,
            summary.events_failed
        );
        Ok(summary)
    }

    /// League stage: fetch events, register the league, fan out to its first events
    pub async fn process_league(&self, league: SelectedLeague) -> Result<LeagueOutcome> {
        let events = self.fetch_events(league.id).await?;
        self.aggregate.ensure_league(&league);

        let total = events.len();
        let events = cap_events(events, self.config.selection.events_per_league);
        debug!("League {} has {} events, fetching markets for {}", league, total, events.len());

        let results = self
            .scheduler
            .fan_out(events.clone(), |event| {
                let fetcher = self.clone();
                let league = league.clone();
                async move { fetcher.process_event(league, event).await }
            })
            .await;

        let mut outcome = LeagueOutcome::default();
        for (event, result) in events.iter().zip(results) {
            match result {
                Ok(()) => outcome.events_fetched += 1,
                Err(e) => {
                    warn!("Event {} of league {} failed: {}", event.id, league, e);
                    outcome.failures.push(BranchFailure::Event {
                        league_id: league.id,
                        event_id: event.id,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(outcome)
    }

    /// Event stage: fetch markets and store them under the league
    pub async fn process_event(&self, league: SelectedLeague, event: MatchEvent) -> Result<()> {
        let markets = self.fetch_markets(event.id).await?;
        debug!("Event {} of league {}: {} markets", event.id, league.id, markets.len());

        self.aggregate.put(&league, event, markets)
    }
}
