//! Error types for scraping and persistence
//!
//! Fetch stages never surface these to the caller of the pipeline: they are
//! logged and degraded to empty or absent values. They exist so that each
//! failure is logged with a precise cause.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for scraping operations
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Failures while loading a page or extracting data from it
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Browser could not be found, launched or configured
    #[error("Browser error: {0}")]
    Browser(String),

    /// Navigation to a URL failed
    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    /// Readiness condition was not met in time
    #[error("Timed out after {elapsed:?} waiting for '{selector}' in frame of {url}")]
    Timeout {
        url: String,
        selector: String,
        elapsed: Duration,
    },

    /// JavaScript evaluation failed or returned an unexpected shape
    #[error("Script evaluation failed: {0}")]
    Script(String),

    /// A CSS selector could not be parsed
    #[error("Invalid CSS selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Content was loaded but the expected structure is missing
    #[error("Extraction failed: {0}")]
    Extraction(String),
}

impl From<anyhow::Error> for ScrapeError {
    fn from(error: anyhow::Error) -> Self {
        // {:#} keeps the context chain
        ScrapeError::Browser(format!("{error:#}"))
    }
}

/// Failures while writing to the document store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Client could not be constructed
    #[error("Store client error: {0}")]
    Client(String),

    /// A single put was rejected
    #[error("Failed to write job {job_id} to table '{table}': {message}")]
    Write {
        table: String,
        job_id: String,
        message: String,
    },
}
