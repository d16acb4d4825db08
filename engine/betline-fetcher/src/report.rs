use chrono::{TimeZone, Utc};
use std::fmt::Write;

use crate::aggregate::Aggregate;

/// Render an epoch-millisecond kickoff as `yyyy-MM-dd HH:mm:ss UTC`
pub fn format_kickoff(kickoff_ms: i64) -> String {
    match Utc.timestamp_millis_opt(kickoff_ms).single() {
        Some(instant) => instant.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => kickoff_ms.to_string(),
    }
}

/// Shortest round-trip form, always with a fractional part (`2.0`, `1.95`)
pub fn format_price(price: f64) -> String {
    format!("{price:?}")
}

/// Multi-line text report of the aggregate
///
/// ```text
/// Soccer, England Premier League
///   Arsenal - Chelsea, 2023-11-14 22:13:20 UTC, 1
///     Match Result
///       Home, 1.95, 1
/// ```
pub fn render_report(aggregate: &Aggregate) -> String {
    let mut out = String::new();

    for league in aggregate.snapshot() {
        let _ = writeln!(out, "{}", league.league.name);
        for (event, markets) in &league.events {
            let kickoff = format_kickoff(event.kickoff);
            let _ = writeln!(out, "  {}, {}, {}", event.name, kickoff, event.id);
            for market in markets {
                let _ = writeln!(out, "    {}", market.name);
                for runner in &market.runners {
                    let price = format_price(runner.price);
                    let _ = writeln!(out, "      {}, {}, {}", runner.name, price, runner.id);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Market, MatchEvent, Runner, SelectedLeague};

    #[test]
    fn test_format_kickoff() {
        assert_eq!(format_kickoff(1_700_000_000_000), "2023-11-14 22:13:20 UTC");
        assert_eq!(format_kickoff(0), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1.95), "1.95");
        assert_eq!(format_price(2.0), "2.0");
        assert_eq!(format_price(11.5), "11.5");
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render_report(&Aggregate::new()), "");
    }

    #[test]
    fn test_render_report() {
        let aggregate = Aggregate::new();
        let league = SelectedLeague { id: 10, name: "Soccer, England Premier League".to_string() };
        let event =
            MatchEvent { id: 1, name: "Arsenal - Chelsea".to_string(), kickoff: 1_700_000_000_000 };
        let markets = vec![Market {
            id: 5,
            name: "Match Result".to_string(),
            runners: vec![
                Runner { id: 1, name: "Home".to_string(), price: 1.95 },
                Runner { id: 2, name: "Away".to_string(), price: 4.0 },
            ],
        }];
        aggregate.ensure_league(&league);
        aggregate.put(&league, event, markets).unwrap();

        let expected = [
            "Soccer, England Premier League",
            "  Arsenal - Chelsea, 2023-11-14 22:13:20 UTC, 1",
            "    Match Result",
            "      Home, 1.95, 1",
            "      Away, 4.0, 2",
        ];
        let report = render_report(&aggregate);
        assert_eq!(report.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_league_without_events_prints_name_only() {
        let aggregate = Aggregate::new();
        aggregate.ensure_league(&SelectedLeague { id: 3, name: "Tennis, ATP Doha".to_string() });

        assert_eq!(render_report(&aggregate), "Tennis, ATP Doha\n");
    }
}
