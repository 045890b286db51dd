//! Loading frame content from the careers portal
//!
//! The portal renders its listings and job descriptions inside an `iframe`.
//! A `FrameSource` hides how that frame document is obtained, so the fetch
//! stages can run against Chrome in production and against fixtures in tests.

mod chrome;
pub mod probe;
mod session;
mod timeout;

pub use chrome::ChromeFrameSource;
pub use probe::{FrameProbe, ProbeScope};
pub use session::BrowserSession;
pub use timeout::with_page_timeout;

use crate::errors::ScrapeResult;
use crate::page_extractor::FrameContent;

/// Loads a page and returns its embedded frame document once ready
#[async_trait::async_trait]
pub trait FrameSource: Send + Sync {
    /// Navigate to `url` and wait until `ready_selector` matches inside the
    /// page's first inline frame
    ///
    /// # Errors
    ///
    /// `ScrapeError::Timeout` if the selector never matches,
    /// `ScrapeError::Navigation` / `ScrapeError::Browser` for load failures.
    async fn load_frame(&self, url: &str, ready_selector: &str) -> ScrapeResult<FrameContent>;
}
