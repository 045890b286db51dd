//! Listing-page extraction
//!
//! Every row matched by the row selector produces exactly one `JobListing`.
//! A row missing its title heading or its anchor still produces a listing,
//! with `None` in place of the missing field.

use scraper::{ElementRef, Html, Selector};

use super::{FrameContent, PageContentExtractor, compile_selector};
use crate::config::ListingSelectors;
use crate::errors::ScrapeResult;
use crate::schema::JobListing;
use crate::utils::resolve_href;

#[derive(Debug, Clone)]
pub struct ListingExtractor {
    row: Selector,
    title: Selector,
    link: Selector,
}

impl ListingExtractor {
    /// Compile the row, title and link selectors
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::Selector` if any selector fails to parse.
    pub fn new(selectors: &ListingSelectors) -> ScrapeResult<Self> {
        Ok(Self {
            row: compile_selector(&selectors.row)?,
            title: compile_selector(&selectors.title)?,
            link: compile_selector(&selectors.link)?,
        })
    }

    fn extract_row(&self, row: ElementRef<'_>, base_url: &str) -> JobListing {
        let title = row
            .select(&self.title)
            .next()
            .map(|heading| heading.text().collect::<String>().trim().to_string());

        let description_url = row
            .select(&self.link)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
            .and_then(|href| resolve_href(base_url, href));

        JobListing::new(title, description_url)
    }
}

impl PageContentExtractor for ListingExtractor {
    type Output = Vec<JobListing>;

    fn extract(&self, content: &FrameContent) -> ScrapeResult<Vec<JobListing>> {
        let document = Html::parse_document(&content.html);

        let listings: Vec<JobListing> = document
            .select(&self.row)
            .map(|row| self.extract_row(row, &content.url))
            .collect();

        tracing::debug!(
            rows = listings.len(),
            missing_titles = listings.iter().filter(|l| l.title.is_none()).count(),
            missing_links = listings.iter().filter(|l| l.description_url.is_none()).count(),
            "Extracted listing rows"
        );

        Ok(listings)
    }
}
