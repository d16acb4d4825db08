//! Error types for the betline fetcher

use thiserror::Error;

/// Result type alias for fetcher operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching and aggregating betline data
#[derive(Error, Debug)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("HTTP request to {url} failed with status {status}")]
    Http { url: String, status: u16 },

    /// Request never produced a response (connect, timeout, body read)
    #[error("Network error while fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body could not be decoded into the expected shape
    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Write attempted for a league that was never registered
    #[error("League {league_id} is not registered in the aggregate")]
    LeagueNotRegistered { league_id: u64 },

    /// Second write for an already stored (league, event) pair
    #[error("Event {event_id} already stored for league {league_id}")]
    DuplicateEvent { league_id: u64, event_id: u64 },

    /// A spawned branch panicked or was aborted
    #[error("Branch task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

    /// The fetch pool was closed while work was waiting for a slot
    #[error("Fetch pool is closed")]
    PoolClosed,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FetchError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for failures raised by the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Network { .. })
    }

    /// True for failures raised while decoding a body
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
