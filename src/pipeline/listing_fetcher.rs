//! Stage 1: listing page → job listings

use tracing::{error, info};

use crate::config::ScraperConfig;
use crate::errors::ScrapeResult;
use crate::frame_source::FrameSource;
use crate::page_extractor::{ListingExtractor, PageContentExtractor};
use crate::schema::JobListing;

/// Scrape the listing page configured in `config`
///
/// Never fails: any navigation or extraction error is logged and yields an
/// empty vector.
pub async fn fetch_listings<S>(source: &S, config: &ScraperConfig) -> Vec<JobListing>
where
    S: FrameSource + ?Sized,
{
    info!(url = config.listing_url(), "Scraping job listings");

    match try_fetch_listings(source, config).await {
        Ok(listings) => {
            info!(count = listings.len(), "Scraped job listings");
            listings
        }
        Err(e) => {
            error!("Error during scraping job listings: {}", e);
            Vec::new()
        }
    }
}

async fn try_fetch_listings<S>(source: &S, config: &ScraperConfig) -> ScrapeResult<Vec<JobListing>>
where
    S: FrameSource + ?Sized,
{
    let selectors = config.listing_selectors();
    let extractor = ListingExtractor::new(selectors)?;

    // A listing row inside the frame is the readiness condition
    let content = source.load_frame(config.listing_url(), &selectors.row).await?;
    extractor.extract(&content)
}
