//! Price Fetcher - Pages through the retail prices API and writes a
//! region -> SKU -> price map to disk.

use anyhow::Context;
use shared::{fetch_all, write_price_map, FetcherConfig, PricingClient};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn run(config: &FetcherConfig) -> anyhow::Result<()> {
    let client = PricingClient::new(reqwest::Client::new());

    let prices = fetch_all(&client, &config.start_url)
        .await
        .with_context(|| format!("Failed to fetch prices from {}", config.start_url))?;

    write_price_map(&config.output_path, &prices)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    let regions: Vec<&str> = prices.regions().collect();
    info!(
        region_count = regions.len(),
        regions = %regions.join(","),
        entries = prices.len(),
        "Price map refreshed"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = FetcherConfig::from_env()?;
    info!(start_url = %config.start_url, output = %config.output_path.display(), "Starting price fetch");

    if let Err(e) = run(&config).await {
        error!("Price fetch failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
