//! Stage 2: detail page → description paragraphs

use tracing::{error, info};

use crate::config::ScraperConfig;
use crate::errors::ScrapeResult;
use crate::frame_source::FrameSource;
use crate::page_extractor::{DescriptionExtractor, PageContentExtractor};

/// Scrape the paragraphs of one job detail page
///
/// Returns `None` on any failure, including a page whose frame never shows a
/// paragraph. A successful result is never empty.
pub async fn fetch_description<S>(source: &S, config: &ScraperConfig, url: &str) -> Option<Vec<String>>
where
    S: FrameSource + ?Sized,
{
    info!(%url, "Scraping job description");

    match try_fetch_description(source, config, url).await {
        Ok(paragraphs) => {
            info!(%url, paragraphs = paragraphs.len(), "Job description scraped successfully");
            Some(paragraphs)
        }
        Err(e) => {
            error!(%url, "Error scraping job description: {}", e);
            None
        }
    }
}

async fn try_fetch_description<S>(source: &S, config: &ScraperConfig, url: &str) -> ScrapeResult<Vec<String>>
where
    S: FrameSource + ?Sized,
{
    let selector = config.description_selector();
    let extractor = DescriptionExtractor::new(selector)?;

    let content = source.load_frame(url, selector).await?;
    extractor.extract(&content)
}
