//! Getter methods for `ScraperConfig`

use std::path::Path;
use std::time::Duration;

use super::types::{ListingSelectors, ScraperConfig};

impl ScraperConfig {
    #[must_use]
    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn listing_selectors(&self) -> &ListingSelectors {
        &self.listing_selectors
    }

    #[must_use]
    pub fn description_selector(&self) -> &str {
        &self.description_selector
    }

    #[must_use]
    pub fn readiness_timeout(&self) -> Duration {
        self.readiness_timeout
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    #[must_use]
    pub fn page_load_timeout(&self) -> Duration {
        self.page_load_timeout
    }
}
