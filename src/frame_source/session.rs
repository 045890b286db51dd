//! Browser lifetime for a single fetch
//!
//! A `BrowserSession` owns the Chrome process, its CDP handler task and the
//! temporary profile directory. `close()` shuts all three down; `Drop` does
//! the same for paths that never reach `close()`.

use chromiumoxide::browser::Browser;
use chromiumoxide::page::Page;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::errors::{ScrapeError, ScrapeResult};

pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserSession {
    pub(crate) fn new(browser: Browser, handler: JoinHandle<()>, user_data_dir: PathBuf) -> Self {
        Self {
            browser,
            handler,
            user_data_dir: Some(user_data_dir),
        }
    }

    /// Open a blank page
    pub async fn new_page(&self) -> ScrapeResult<Page> {
        self.browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScrapeError::Browser(format!("Failed to create blank page: {e}")))
    }

    /// Close Chrome, stop the handler and remove the profile directory
    ///
    /// Errors are logged, not returned: the caller is already on its way out
    /// and has its own result to report.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        // Chrome must release the profile before it can be removed
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser process exit: {}", e);
        }
        self.handler.abort();
        self.cleanup_temp_dir();
        debug!("Browser session closed");
    }

    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            debug!("Cleaning up temp directory: {}", path.display());
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "Failed to clean up temp directory {}: {}. Manual cleanup may be required.",
                    path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
        // Browser::drop() kills the Chrome process
        if self.user_data_dir.is_some() {
            info!("BrowserSession dropped without close() - removing temp dir in Drop");
            self.cleanup_temp_dir();
        }
    }
}
