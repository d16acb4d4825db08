use betline_fetcher::{BetlineFetcher, FetcherConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Inspecting betline catalog selection");

    let config = FetcherConfig::default();
    info!("Allowed families: {:?}", config.selection.allowed_families);

    let fetcher = BetlineFetcher::with_http(config)?;

    match fetcher.selected_leagues().await {
        Ok(leagues) => {
            info!("✅ {} leagues selected", leagues.len());
            for (i, league) in leagues.iter().enumerate() {
                info!("  {}. {} [{}]", i + 1, league.name, league.id);
            }
        }
        Err(e) => {
            error!("❌ Failed to fetch sport catalog: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
