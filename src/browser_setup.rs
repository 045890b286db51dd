//! Locating, downloading and launching Chrome

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfigBuilder, HeadlessMode};
use chromiumoxide::fetcher::{BrowserFetcher, BrowserFetcherOptions};
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task;
use tracing::{debug, error, info, trace, warn};

use crate::frame_source::BrowserSession;
use crate::utils::constants::CHROME_USER_AGENT;

/// Explicit browser binary, checked before anything else
pub const BROWSER_PATH_VAR: &str = "CHROMIUM_PATH";

const BROWSER_NAMES: &[&str] = &[
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
];

const MACOS_APP_BUNDLES: &[&str] = &[
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
];

/// Locate a local Chrome or Chromium
///
/// `CHROMIUM_PATH` wins when it names a file. After that the usual binary
/// names are looked up on `PATH`, then the macOS app bundles.
#[must_use]
pub fn find_browser_executable() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(BROWSER_PATH_VAR).map(PathBuf::from) {
        if path.is_file() {
            debug!(path = %path.display(), "Using browser from {BROWSER_PATH_VAR}");
            return Some(path);
        }
        warn!(path = %path.display(), "{BROWSER_PATH_VAR} is not a file, ignoring it");
    }

    let search_dirs: Vec<PathBuf> = std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).collect())
        .unwrap_or_default();

    let found = search_dirs
        .iter()
        .flat_map(|dir| BROWSER_NAMES.iter().map(move |name| dir.join(name)))
        .chain(MACOS_APP_BUNDLES.iter().copied().map(PathBuf::from))
        .find(|candidate| candidate.is_file());

    match &found {
        Some(path) => debug!(path = %path.display(), "Found local browser"),
        None => warn!("No local Chrome/Chromium found"),
    }
    found
}

/// Download Chromium into the user cache directory and return its executable
pub async fn download_managed_browser() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("icims_jobs_scraper")
        .join("chromium");

    std::fs::create_dir_all(&cache_dir)
        .with_context(|| format!("Failed to create {}", cache_dir.display()))?;

    info!(dir = %cache_dir.display(), "Downloading managed Chromium");
    let options = BrowserFetcherOptions::builder()
        .with_path(&cache_dir)
        .build()
        .context("Failed to build fetcher options")?;
    let revision = BrowserFetcher::new(options)
        .fetch()
        .await
        .context("Failed to download Chromium")?;

    Ok(revision.executable_path)
}

/// Launch a browser for a single fetch.
///
/// Each call gets its own profile directory under the system temp dir; the
/// returned session removes it again when closed or dropped.
///
/// Site isolation and web security are disabled so that the portal's
/// cross-origin iframe document is readable from the top page.
pub async fn launch_browser(headless: bool) -> Result<BrowserSession> {
    let chrome_path = match find_browser_executable() {
        Some(path) => path,
        None => download_managed_browser().await?,
    };

    let user_data_dir = std::env::temp_dir().join(format!(
        "icims_chrome_{}_{}",
        std::process::id(),
        uuid::Uuid::new_v4().simple()
    ));
    std::fs::create_dir_all(&user_data_dir).context("Failed to create user data directory")?;

    let mut builder = BrowserConfigBuilder::default()
        .request_timeout(Duration::from_secs(30))
        .window_size(1920, 1080)
        .user_data_dir(user_data_dir.clone())
        .chrome_executable(chrome_path);

    builder = if headless {
        builder.headless_mode(HeadlessMode::default())
    } else {
        builder.with_head()
    };

    let browser_config = builder
        .arg(format!("--user-agent={CHROME_USER_AGENT}"))
        .arg("--disable-blink-features=AutomationControlled")
        .arg("--disable-web-security")
        .arg("--disable-features=IsolateOrigins,site-per-process")
        .arg("--disable-extensions")
        .arg("--no-first-run")
        .arg("--no-default-browser-check")
        .arg("--no-sandbox")
        .arg("--mute-audio")
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build browser config: {e}"))?;

    info!(headless, "Launching browser");
    let (browser, mut handler) = Browser::launch(browser_config)
        .await
        .context("Failed to launch browser")?;

    let handler_task = task::spawn(async move {
        while let Some(event) = handler.next().await {
            match event {
                Ok(()) => {}
                Err(e) if is_undecodable_cdp_message(&e.to_string()) => {
                    trace!("Ignoring undecodable CDP message: {}", e);
                }
                Err(e) => error!("Browser handler error: {}", e),
            }
        }
        trace!("Browser handler stopped");
    });

    Ok(BrowserSession::new(browser, handler_task, user_data_dir))
}

/// Chrome sends CDP events chromiumoxide has no types for; they surface as
/// deserialization errors and carry nothing we need
fn is_undecodable_cdp_message(message: &str) -> bool {
    message.contains("data did not match any variant of untagged enum Message")
        || message.contains("Failed to deserialize WS response")
}
