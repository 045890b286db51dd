use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tokio::time::timeout;

/// Timeout for blocking JSON serialization
/// Prevents hangs on pathological data structures
const BLOCKING_SERIALIZATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Write `records` as a pretty-printed JSON array, replacing any existing file
pub async fn save_json_records<T>(records: Vec<T>, path: &Path) -> Result<()>
where
    T: Serialize + Send + 'static,
{
    let count = records.len();

    // JSON serialization (spawn_blocking - CPU intensive for large runs)
    let blocking_task = tokio::task::spawn_blocking(move || serde_json::to_string_pretty(&records));

    let json_str = match timeout(BLOCKING_SERIALIZATION_TIMEOUT, blocking_task).await {
        Ok(Ok(result)) => result.context("Failed to serialize records")?,
        Ok(Err(e)) => return Err(anyhow::anyhow!("JSON serialization task panicked: {}", e)),
        Err(_) => {
            tracing::warn!(
                "JSON serialization timeout (timeout: {:?})",
                BLOCKING_SERIALIZATION_TIMEOUT
            );
            return Err(anyhow::anyhow!(
                "JSON serialization timed out after {:?}",
                BLOCKING_SERIALIZATION_TIMEOUT
            ));
        }
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    tokio::fs::write(path, json_str)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(records = count, path = %path.display(), "Saved JSON records");
    Ok(())
}
