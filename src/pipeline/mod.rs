//! Fetch → enrich → persist
//!
//! Stage 1 scrapes the listing page, stage 3 walks its output one listing at
//! a time, calling stage 2 for each description before writing the record.
//! Nothing runs concurrently.

mod description_fetcher;
mod listing_fetcher;

pub use description_fetcher::fetch_description;
pub use listing_fetcher::fetch_listings;

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::config::ScraperConfig;
use crate::content_saver::save_json_records;
use crate::frame_source::FrameSource;
use crate::schema::{JobListing, JobRecord};
use crate::store::JobStore;

/// Summary of one persistence run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    /// Records written to the output file (one per listing)
    pub records: usize,
    /// Records accepted by the store
    pub stored: usize,
    /// Records the store rejected
    pub failed_writes: usize,
    /// Records without a description
    pub missing_descriptions: usize,
    pub output_path: PathBuf,
}

pub struct JobPipeline<S, D> {
    config: ScraperConfig,
    source: S,
    store: D,
}

impl<S, D> JobPipeline<S, D>
where
    S: FrameSource,
    D: JobStore,
{
    #[must_use]
    pub fn new(config: ScraperConfig, source: S, store: D) -> Self {
        Self {
            config,
            source,
            store,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &D {
        &self.store
    }

    /// Scrape the listing page, then enrich and persist every listing
    ///
    /// # Errors
    ///
    /// Only when the output file cannot be written.
    pub async fn run(&self) -> Result<PipelineReport> {
        let listings = fetch_listings(&self.source, &self.config).await;
        self.persist(listings).await
    }

    /// Enrich each listing in order, write it to the store, then save all
    /// records to the output file
    ///
    /// A rejected write is logged and counted; the remaining listings are
    /// still processed and every record still lands in the output file.
    ///
    /// # Errors
    ///
    /// Only when the output file cannot be written.
    pub async fn persist(&self, listings: Vec<JobListing>) -> Result<PipelineReport> {
        info!(
            count = listings.len(),
            table = self.config.table_name(),
            "Inserting data into document store"
        );

        let mut records = Vec::with_capacity(listings.len());
        let mut stored = 0;
        let mut failed_writes = 0;

        for listing in listings {
            let description = match listing.description_url.as_deref() {
                Some(url) => fetch_description(&self.source, &self.config, url).await,
                None => {
                    warn!(title = ?listing.title, "Listing has no detail URL, skipping description");
                    None
                }
            };

            let record = JobRecord::enrich(listing, description);

            match self.store.put_job(&record).await {
                Ok(()) => stored += 1,
                Err(e) => {
                    failed_writes += 1;
                    error!(job_id = %record.job_id, "Error inserting job into document store: {}", e);
                }
            }

            records.push(record);
        }

        let report = PipelineReport {
            records: records.len(),
            stored,
            failed_writes,
            missing_descriptions: records.iter().filter(|r| r.description.is_none()).count(),
            output_path: self.config.output_path().to_path_buf(),
        };

        save_json_records(records, self.config.output_path()).await?;
        info!(
            path = %report.output_path.display(),
            records = report.records,
            stored = report.stored,
            failed_writes = report.failed_writes,
            missing_descriptions = report.missing_descriptions,
            "Data written to JSON file successfully"
        );

        Ok(report)
    }
}
