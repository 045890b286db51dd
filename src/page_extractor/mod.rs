//! Structured data extraction from loaded frame content.
//!
//! Extractors work on a snapshot of the frame document (`FrameContent`), so
//! they run the same against a live browser and against saved HTML fixtures.

// Sub-modules
pub mod description;
pub mod listing;

// Re-exports for public API
pub use description::DescriptionExtractor;
pub use listing::ListingExtractor;

use scraper::Selector;

use crate::errors::{ScrapeError, ScrapeResult};

/// Snapshot of a loaded frame document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameContent {
    /// URL of the frame document, used to resolve relative links
    pub url: String,
    /// Serialized `documentElement` of the frame
    pub html: String,
}

impl FrameContent {
    #[must_use]
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }
}

/// Turns loaded frame content into structured data
pub trait PageContentExtractor {
    type Output;

    /// Extract structured data from a loaded frame document
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::Extraction` when the content does not have the
    /// structure this extractor expects.
    fn extract(&self, content: &FrameContent) -> ScrapeResult<Self::Output>;
}

pub(crate) fn compile_selector(selector: &str) -> ScrapeResult<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
