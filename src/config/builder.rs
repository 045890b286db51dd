//! Type-safe builder for `ScraperConfig` using the typestate pattern
//!
//! The listing URL is the only required field; `build()` is not callable
//! until it has been provided. Everything else defaults to the values the
//! scraper was written against (see `utils::constants`).

use crate::utils::{
    DEFAULT_LISTING_URL, DEFAULT_OUTPUT_FILE, DEFAULT_PAGE_LOAD_TIMEOUT, DEFAULT_POLL_INTERVAL,
    DEFAULT_READINESS_TIMEOUT, DEFAULT_TABLE_NAME, DESCRIPTION_SELECTOR, LISTING_LINK_SELECTOR,
    LISTING_ROW_SELECTOR, LISTING_TITLE_SELECTOR, is_valid_url,
};
use anyhow::{Result, anyhow, bail};
use scraper::Selector;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;

use super::types::{ListingSelectors, ScraperConfig};

/// Check that a CSS selector compiles before any browser is launched
fn validate_selector(name: &str, selector: &str) -> Result<()> {
    Selector::parse(selector)
        .map(|_| ())
        .map_err(|e| anyhow!("Invalid {name} selector '{selector}': {e}"))
}

// Type states for the builder
pub struct WithListingUrl;

pub struct ScraperConfigBuilder<State = ()> {
    pub(crate) listing_url: Option<String>,
    pub(crate) table_name: String,
    pub(crate) output_path: PathBuf,
    pub(crate) headless: bool,
    pub(crate) listing_selectors: ListingSelectors,
    pub(crate) description_selector: String,
    pub(crate) readiness_timeout: Duration,
    pub(crate) poll_interval: Duration,
    pub(crate) page_load_timeout: Duration,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScraperConfigBuilder<()> {
    fn default() -> Self {
        Self {
            listing_url: None,
            table_name: DEFAULT_TABLE_NAME.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            headless: true,
            listing_selectors: ListingSelectors {
                row: LISTING_ROW_SELECTOR.to_string(),
                title: LISTING_TITLE_SELECTOR.to_string(),
                link: LISTING_LINK_SELECTOR.to_string(),
            },
            description_selector: DESCRIPTION_SELECTOR.to_string(),
            readiness_timeout: DEFAULT_READINESS_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            page_load_timeout: DEFAULT_PAGE_LOAD_TIMEOUT,
            _phantom: PhantomData,
        }
    }
}

impl ScraperConfig {
    /// Create a builder for configuring a `ScraperConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScraperConfigBuilder<()> {
        ScraperConfigBuilder::default()
    }

    /// Settings of the Emory non-clinical careers portal
    ///
    /// # Errors
    ///
    /// Only fails if the built-in defaults are inconsistent.
    pub fn default_portal() -> Result<Self> {
        Self::builder().listing_url(DEFAULT_LISTING_URL).build()
    }
}

impl ScraperConfigBuilder<()> {
    pub fn listing_url(self, url: impl Into<String>) -> ScraperConfigBuilder<WithListingUrl> {
        ScraperConfigBuilder {
            listing_url: Some(url.into()),
            table_name: self.table_name,
            output_path: self.output_path,
            headless: self.headless,
            listing_selectors: self.listing_selectors,
            description_selector: self.description_selector,
            readiness_timeout: self.readiness_timeout,
            poll_interval: self.poll_interval,
            page_load_timeout: self.page_load_timeout,
            _phantom: PhantomData,
        }
    }
}

impl<State> ScraperConfigBuilder<State> {
    #[must_use]
    pub fn table_name(mut self, table: impl Into<String>) -> Self {
        self.table_name = table.into();
        self
    }

    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn listing_selectors(mut self, selectors: ListingSelectors) -> Self {
        self.listing_selectors = selectors;
        self
    }

    #[must_use]
    pub fn description_selector(mut self, selector: impl Into<String>) -> Self {
        self.description_selector = selector.into();
        self
    }

    #[must_use]
    pub fn readiness_timeout(mut self, timeout: Duration) -> Self {
        self.readiness_timeout = timeout;
        self
    }

    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[must_use]
    pub fn page_load_timeout(mut self, timeout: Duration) -> Self {
        self.page_load_timeout = timeout;
        self
    }
}

impl ScraperConfigBuilder<WithListingUrl> {
    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the listing URL is not an absolute http(s) URL,
    /// if any selector fails to compile, or if a duration is zero.
    pub fn build(self) -> Result<ScraperConfig> {
        let listing_url = self
            .listing_url
            .ok_or_else(|| anyhow!("listing_url is required"))?;
        if !is_valid_url(&listing_url) {
            bail!("listing_url must be an absolute http(s) URL, got '{listing_url}'");
        }

        validate_selector("listing row", &self.listing_selectors.row)?;
        validate_selector("listing title", &self.listing_selectors.title)?;
        validate_selector("listing link", &self.listing_selectors.link)?;
        validate_selector("description", &self.description_selector)?;

        if self.table_name.trim().is_empty() {
            bail!("table_name cannot be empty");
        }
        if self.readiness_timeout.is_zero() || self.poll_interval.is_zero() {
            bail!("readiness_timeout and poll_interval must be non-zero");
        }
        if self.page_load_timeout.is_zero() {
            bail!("page_load_timeout must be non-zero");
        }

        // Enforce headless mode in release builds
        #[cfg(not(debug_assertions))]
        let headless = if !self.headless {
            tracing::warn!(
                "Forcing headless mode in release build. \
                Headed mode is only available in debug builds for development."
            );
            true
        } else {
            self.headless
        };

        #[cfg(debug_assertions)]
        let headless = self.headless;

        Ok(ScraperConfig {
            listing_url,
            table_name: self.table_name,
            output_path: self.output_path,
            headless,
            listing_selectors: self.listing_selectors,
            description_selector: self.description_selector,
            readiness_timeout: self.readiness_timeout,
            poll_interval: self.poll_interval,
            page_load_timeout: self.page_load_timeout,
        })
    }
}
