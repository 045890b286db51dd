//! Chrome-backed frame source
//!
//! Every `load_frame` call launches its own browser and closes it before
//! returning, whichever way the load ends.

use chromiumoxide::page::Page;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::probe::{FrameProbe, ProbeScope, probe_script};
use super::timeout::with_page_timeout;
use super::FrameSource;
use crate::browser_setup::launch_browser;
use crate::config::ScraperConfig;
use crate::errors::{ScrapeError, ScrapeResult};
use crate::page_extractor::FrameContent;
use crate::utils::is_valid_url;

#[derive(Debug, Clone)]
pub struct ChromeFrameSource {
    headless: bool,
    page_load_timeout: Duration,
    readiness_timeout: Duration,
    poll_interval: Duration,
}

impl ChromeFrameSource {
    #[must_use]
    pub fn new(config: &ScraperConfig) -> Self {
        Self {
            headless: config.headless(),
            page_load_timeout: config.page_load_timeout(),
            readiness_timeout: config.readiness_timeout(),
            poll_interval: config.poll_interval(),
        }
    }

    async fn load_in_page(&self, page: &Page, url: &str, selector: &str) -> ScrapeResult<FrameContent> {
        navigate(page, url, self.page_load_timeout).await?;

        let deadline = Instant::now() + self.readiness_timeout;
        let frame_script = probe_script(ProbeScope::Frame, selector)?;

        loop {
            match run_probe(page, &frame_script).await {
                Ok(FrameProbe::Ready { url: frame_url, html }) => {
                    debug!(%frame_url, bytes = html.len(), "Frame content ready");
                    return Ok(FrameContent::new(frame_url, html));
                }
                Ok(FrameProbe::Detached { src }) if is_valid_url(&src) => {
                    // Cross-origin frame we cannot read: load its document directly
                    info!(%src, "Frame document not reachable, navigating into frame source");
                    navigate(page, &src, self.page_load_timeout).await?;
                    return self.wait_for_document(page, url, selector, deadline).await;
                }
                Ok(state) => debug!(?state, "Frame not ready yet"),
                Err(e) => debug!("Frame probe failed, retrying: {}", e),
            }

            if Instant::now() >= deadline {
                return Err(self.timeout_error(url, selector));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn wait_for_document(
        &self,
        page: &Page,
        url: &str,
        selector: &str,
        deadline: Instant,
    ) -> ScrapeResult<FrameContent> {
        let document_script = probe_script(ProbeScope::Document, selector)?;

        loop {
            match run_probe(page, &document_script).await {
                Ok(FrameProbe::Ready { url: frame_url, html }) => {
                    return Ok(FrameContent::new(frame_url, html));
                }
                Ok(_) => {}
                Err(e) => debug!("Document probe failed, retrying: {}", e),
            }

            if Instant::now() >= deadline {
                return Err(self.timeout_error(url, selector));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    fn timeout_error(&self, url: &str, selector: &str) -> ScrapeError {
        ScrapeError::Timeout {
            url: url.to_string(),
            selector: selector.to_string(),
            elapsed: self.readiness_timeout,
        }
    }
}

#[async_trait::async_trait]
impl FrameSource for ChromeFrameSource {
    async fn load_frame(&self, url: &str, ready_selector: &str) -> ScrapeResult<FrameContent> {
        let session = launch_browser(self.headless).await?;

        let result = match session.new_page().await {
            Ok(page) => self.load_in_page(&page, url, ready_selector).await,
            Err(e) => Err(e),
        };

        session.close().await;
        result
    }
}

async fn navigate(page: &Page, url: &str, timeout: Duration) -> ScrapeResult<()> {
    info!(%url, "Navigating");
    with_page_timeout(
        async {
            page.goto(url).await?;
            Ok(())
        },
        timeout,
        "Navigation",
    )
    .await
    .map_err(|e| ScrapeError::Navigation {
        url: url.to_string(),
        message: format!("{e:#}"),
    })
}

async fn run_probe(page: &Page, script: &str) -> ScrapeResult<FrameProbe> {
    let result = page
        .evaluate(script)
        .await
        .map_err(|e| ScrapeError::Script(e.to_string()))?;

    result.into_value::<FrameProbe>().map_err(|e| {
        warn!("Unexpected probe result shape: {}", e);
        ScrapeError::Script(format!("Failed to parse probe result: {e}"))
    })
}
