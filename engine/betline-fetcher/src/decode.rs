//! Decoders for the three betline response bodies
//!
//! Unknown fields are ignored; missing fields take their defaults (empty lists,
//! zero ids and prices, empty names).

use crate::error::{FetchError, Result};
use crate::models::{Market, MarketResponse, MatchEvent, MatchResponse, Sport};

/// Decode the sport catalog (a bare JSON array of sports)
pub fn decode_sport_catalog(body: &str) -> Result<Vec<Sport>> {
    serde_json::from_str(body)
        .map_err(|source| FetchError::Decode { what: "sport catalog", source })
}

/// Decode the event list of a league
pub fn decode_event_list(body: &str) -> Result<Vec<MatchEvent>> {
    serde_json::from_str::<MatchResponse>(body)
        .map(|response| response.events)
        .map_err(|source| FetchError::Decode { what: "event list", source })
}

/// Decode the market list of an event
pub fn decode_market_list(body: &str) -> Result<Vec<Market>> {
    serde_json::from_str::<MarketResponse>(body)
        .map(|response| response.markets)
        .map_err(|source| FetchError::Decode { what: "market list", source })
}
