//! Test doubles and fixtures shared by the integration tests

use icims_jobs_scraper::{
    FrameContent, FrameSource, JobRecord, JobStore, ScrapeError, ScrapeResult, ScraperConfig,
    StoreError,
};
use scraper::{Html, Selector};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

pub const LISTING_URL: &str = "https://non-clinical-emory.icims.com/jobs/search";
pub const FRAME_LISTING_URL: &str = "https://non-clinical-emory.icims.com/jobs/search?in_iframe=1";

/// Load an HTML fixture from `tests/fixtures`
#[allow(dead_code)]
pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing fixture {}: {e}", path.display()))
}

/// Config pointing at the default portal with a test output path
#[allow(dead_code)]
pub fn test_config(output: &Path) -> ScraperConfig {
    ScraperConfig::builder()
        .listing_url(LISTING_URL)
        .output_path(output)
        .readiness_timeout(Duration::from_millis(200))
        .poll_interval(Duration::from_millis(10))
        .build()
        .unwrap()
}

/// Serves saved frame documents by URL
///
/// Mirrors the browser source's readiness rule: a document in which the
/// readiness selector never matches ends in `ScrapeError::Timeout`.
#[derive(Default)]
pub struct FixtureSource {
    pages: HashMap<String, FrameContent>,
    requests: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, frame_url: &str, html: impl Into<String>) -> Self {
        self.pages
            .insert(url.to_string(), FrameContent::new(frame_url, html));
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl FrameSource for FixtureSource {
    async fn load_frame(&self, url: &str, ready_selector: &str) -> ScrapeResult<FrameContent> {
        self.requests.lock().unwrap().push(url.to_string());

        let content = self.pages.get(url).ok_or_else(|| ScrapeError::Navigation {
            url: url.to_string(),
            message: "net::ERR_NAME_NOT_RESOLVED".to_string(),
        })?;

        let selector = Selector::parse(ready_selector).map_err(|e| ScrapeError::Selector {
            selector: ready_selector.to_string(),
            message: e.to_string(),
        })?;

        if Html::parse_document(&content.html)
            .select(&selector)
            .next()
            .is_none()
        {
            return Err(ScrapeError::Timeout {
                url: url.to_string(),
                selector: ready_selector.to_string(),
                elapsed: Duration::from_millis(200),
            });
        }

        Ok(content.clone())
    }
}

/// Store that rejects writes at chosen positions and records every attempt
#[derive(Default)]
pub struct FlakyStore {
    fail_at: HashSet<usize>,
    attempts: Mutex<Vec<JobRecord>>,
    accepted: Mutex<Vec<JobRecord>>,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn failing_at(positions: &[usize]) -> Self {
        Self {
            fail_at: positions.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> Vec<JobRecord> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn accepted(&self) -> Vec<JobRecord> {
        self.accepted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl JobStore for FlakyStore {
    async fn put_job(&self, job: &JobRecord) -> Result<(), StoreError> {
        let position = {
            let mut attempts = self.attempts.lock().unwrap();
            attempts.push(job.clone());
            attempts.len() - 1
        };

        if self.fail_at.contains(&position) {
            return Err(StoreError::Write {
                table: "jobs".to_string(),
                job_id: job.job_id.to_string(),
                message: "ProvisionedThroughputExceededException".to_string(),
            });
        }

        self.accepted.lock().unwrap().push(job.clone());
        Ok(())
    }
}
