//! Tests for the type-safe configuration builder

use icims_jobs_scraper::ScraperConfig;
use icims_jobs_scraper::config::ListingSelectors;
use icims_jobs_scraper::utils::{DEFAULT_LISTING_URL, LISTING_ROW_SELECTOR};
use std::path::Path;
use std::time::Duration;

#[test]
fn default_portal_matches_original_settings() {
    let config = ScraperConfig::default_portal().unwrap();

    assert_eq!(config.listing_url(), DEFAULT_LISTING_URL);
    assert_eq!(config.table_name(), "jobs");
    assert_eq!(config.output_path(), Path::new("scrapedJobData.json"));
    assert_eq!(config.listing_selectors().row, LISTING_ROW_SELECTOR);
    assert_eq!(config.description_selector(), "p");
    assert!(config.headless());
}

#[test]
fn builder_optional_fields_have_defaults() {
    let config = ScraperConfig::builder()
        .listing_url("https://careers-example.icims.com/jobs/search")
        .build()
        .unwrap();

    assert_eq!(config.readiness_timeout(), Duration::from_secs(30));
    assert_eq!(config.poll_interval(), Duration::from_millis(250));
    assert_eq!(config.page_load_timeout(), Duration::from_secs(30));
}

#[test]
fn builder_with_all_optional_fields() {
    let selectors = ListingSelectors {
        row: "ul.jobs > li".to_string(),
        title: "h2".to_string(),
        link: "a.apply".to_string(),
    };

    // Optional setters work before and after the required field
    let config = ScraperConfig::builder()
        .table_name("jobs_staging")
        .listing_url("https://careers-example.icims.com/jobs/search")
        .output_path("/tmp/jobs.json")
        .listing_selectors(selectors.clone())
        .description_selector("div.description p")
        .readiness_timeout(Duration::from_secs(5))
        .poll_interval(Duration::from_millis(50))
        .page_load_timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    assert_eq!(config.table_name(), "jobs_staging");
    assert_eq!(config.output_path(), Path::new("/tmp/jobs.json"));
    assert_eq!(config.listing_selectors(), &selectors);
    assert_eq!(config.description_selector(), "div.description p");
    assert_eq!(config.readiness_timeout(), Duration::from_secs(5));
    assert_eq!(config.poll_interval(), Duration::from_millis(50));
    assert_eq!(config.page_load_timeout(), Duration::from_secs(10));
}

#[test]
fn invalid_listing_row_selector_fails_build() {
    let result = ScraperConfig::builder()
        .listing_url("https://careers-example.icims.com/jobs/search")
        .listing_selectors(ListingSelectors {
            row: "div[".to_string(),
            title: "h3".to_string(),
            link: "a".to_string(),
        })
        .build();

    assert!(result.is_err());
}

#[test]
fn empty_table_name_fails_build() {
    let result = ScraperConfig::builder()
        .listing_url("https://careers-example.icims.com/jobs/search")
        .table_name("  ")
        .build();

    assert!(result.is_err());
}
