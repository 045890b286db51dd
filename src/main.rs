// Scrapes the Emory non-clinical iCIMS portal once:
// listings → descriptions → DynamoDB + scrapedJobData.json

use anyhow::Result;
use icims_jobs_scraper::{ScraperConfig, StoreConfig, scrape};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn run() -> Result<()> {
    let config = ScraperConfig::default_portal()?;
    let store_config = StoreConfig::from_env();

    let report = scrape(config, &store_config).await?;
    info!(
        records = report.records,
        stored = report.stored,
        failed_writes = report.failed_writes,
        "Scrape finished"
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    // .env is optional; real environment variables win
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = dotenv
        && !e.not_found()
    {
        error!("Failed to load .env file: {}", e);
    }

    // Failures are logged, the exit status stays 0
    if let Err(e) = run().await {
        error!("Error: {:#}", e);
    }
}
