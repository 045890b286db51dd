//! Shared configuration constants for the scraper
//!
//! Defaults mirror the Emory iCIMS portal the scraper was written for. Every
//! value here can be overridden through `ScraperConfig::builder()`.

use std::time::Duration;

/// Search results page of the careers portal
pub const DEFAULT_LISTING_URL: &str = "https://non-clinical-emory.icims.com/jobs/search";

/// Document table that receives one item per job
pub const DEFAULT_TABLE_NAME: &str = "jobs";

/// Local JSON file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "scrapedJobData.json";

/// One element per job row inside the listings frame
pub const LISTING_ROW_SELECTOR: &str = "body > div.iCIMS_MainWrapper.iCIMS_ListingsPage > div.container-fluid.iCIMS_JobsTable > div";

/// Heading holding the job title, relative to a row
pub const LISTING_TITLE_SELECTOR: &str = "div.col-xs-12.title > a > h3";

/// Anchor pointing at the job detail page, relative to a row
pub const LISTING_LINK_SELECTOR: &str = "div.col-xs-12.title > a";

/// Paragraphs making up a job description
pub const DESCRIPTION_SELECTOR: &str = "p";

/// Upper bound on waiting for frame content to appear
///
/// Replaces the fixed 10 second sleep: the poll returns as soon as the
/// selector matches, and gives up after this long.
pub const DEFAULT_READINESS_TIMEOUT: Duration = Duration::from_secs(30);

/// Delay between readiness probes
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Timeout for `page.goto()` navigation
pub const DEFAULT_PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Chrome user agent string presented to the portal
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
