//! Timeout wrapper for page operations

use anyhow::Result;
use std::future::Future;
use std::time::Duration;

/// Wrap an async page operation with an explicit timeout
///
/// # Returns
/// * `Ok(T)` - Operation completed successfully
/// * `Err` - Either the operation failed or the timeout was reached
pub async fn with_page_timeout<F, T>(operation: F, timeout: Duration, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "{operation_name} timeout after {} seconds",
            timeout.as_secs_f64()
        )),
    }
}
