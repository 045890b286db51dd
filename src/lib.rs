pub mod browser_setup;
pub mod config;
pub mod content_saver;
pub mod errors;
pub mod frame_source;
pub mod page_extractor;
pub mod pipeline;
pub mod schema;
pub mod store;
pub mod utils;

pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::{ListingSelectors, ScraperConfig, StoreConfig};
pub use content_saver::save_json_records;
pub use errors::{ScrapeError, ScrapeResult, StoreError};
pub use frame_source::{BrowserSession, ChromeFrameSource, FrameSource};
pub use page_extractor::{
    DescriptionExtractor, FrameContent, ListingExtractor, PageContentExtractor,
};
pub use pipeline::{JobPipeline, PipelineReport, fetch_description, fetch_listings};
pub use schema::{JobListing, JobRecord};
pub use store::{DynamoJobStore, JobStore, MemoryJobStore};

/// Scrape the configured portal once and persist to DynamoDB and the output file
pub async fn scrape(config: ScraperConfig, store_config: &StoreConfig) -> anyhow::Result<PipelineReport> {
    let store = DynamoJobStore::connect(store_config, config.table_name()).await;
    let source = ChromeFrameSource::new(&config);
    JobPipeline::new(config, source, store).run().await
}
