//! Betline Fetcher
//!
//! Pulls the sport catalog from the betline API, keeps the top leagues of a few
//! sport families, and fans out concurrently to their events and markets. All
//! fetches share one bounded pool; results land in a concurrent aggregate that
//! is rendered as a text report once every branch has settled.

pub mod aggregate;
pub mod config;
pub mod decode;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod selection;
pub mod transport;


pub use aggregate::Aggregate;
pub use config::FetcherConfig;
pub use error::{FetchError, Result};
pub use fetcher::BetlineFetcher;
pub use models::*;
pub use report::render_report;
pub use scheduler::FetchScheduler;
pub use transport::{HttpTransport, Transport};

/// Default number of fetches in flight at once
pub const DEFAULT_POOL_SIZE: usize = 3;

/// Default number of events per league whose markets are fetched
pub const DEFAULT_EVENTS_PER_LEAGUE: usize = 2;
