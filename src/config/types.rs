//! Core configuration types for the scraper

use std::path::PathBuf;
use std::time::Duration;

/// CSS selectors locating listing rows and their fields inside the frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSelectors {
    /// One match per job row
    pub row: String,
    /// Title heading, relative to a row
    pub title: String,
    /// Detail-page anchor, relative to a row
    pub link: String,
}

/// Main configuration struct for a scrape run
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// **INVARIANT:** parses as an absolute http(s) URL (checked in builder).
    pub(crate) listing_url: String,
    pub(crate) table_name: String,
    pub(crate) output_path: PathBuf,
    pub(crate) headless: bool,

    /// **INVARIANT:** every selector compiles (checked in builder).
    pub(crate) listing_selectors: ListingSelectors,
    pub(crate) description_selector: String,

    /// Upper bound on the frame readiness poll
    ///
    /// The poll returns as soon as the readiness selector matches inside the
    /// frame. Pages that never render it fail with a timeout after this long.
    ///
    /// Default: 30 seconds
    pub(crate) readiness_timeout: Duration,

    /// Delay between readiness probes
    ///
    /// Default: 250 milliseconds
    pub(crate) poll_interval: Duration,

    /// Timeout for `page.goto()` operations
    ///
    /// Default: 30 seconds
    pub(crate) page_load_timeout: Duration,
}
