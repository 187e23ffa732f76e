use anyhow::Context;
use dotenvy::dotenv;
use listing_search::{run, services::listings_client::ListingsClient};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let listings = ListingsClient::from_env().context("Failed to create HTTP client")?;
    if listings.has_api_key() {
        info!("listings API key loaded");
    } else {
        warn!("REELLY_API_KEY is not set; /search will answer 500 until it is");
    }

    run(listings).await.context("server error")?;
    Ok(())
}
