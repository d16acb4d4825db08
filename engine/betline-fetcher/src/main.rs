use betline_fetcher::{render_report, BetlineFetcher, FetcherConfig};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting Betline Fetcher");

    let config = FetcherConfig::default();
    info!("Loaded configuration: {}", serde_json::to_string(&config)?);

    let fetcher = BetlineFetcher::with_http(config)?;

    // A catalog failure is logged and the report comes out empty
    let summary = match fetcher.run().await {
        Ok(summary) => Some(summary),
        Err(e) => {
            error!("Betline run aborted: {}", e);
            None
        }
    };

    print!("{}", render_report(fetcher.aggregate()));

    if let Some(summary) = summary {
        for failure in &summary.failures {
            warn!("Branch failed: {:?}", failure);
        }
        info!("Run summary: {}", serde_json::to_string(&summary)?);
        info!(
            "Reported {} leagues and {} events ({} leagues failed, {} events failed)",
            fetcher.aggregate().league_count(),
            fetcher.aggregate().event_count(),
            summary.leagues_failed,
            summary.events_failed
        );
    }

    Ok(())
}
