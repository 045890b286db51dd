//! Document-store sinks for enriched job records
//!
//! The store is write-only: one independent put per record, no reads, no
//! batching, no conditional writes.

mod dynamo;
mod memory;

pub use dynamo::DynamoJobStore;
pub use memory::MemoryJobStore;

use crate::errors::StoreError;
use crate::schema::JobRecord;

#[async_trait::async_trait]
pub trait JobStore: Send + Sync {
    /// Write a single record
    ///
    /// # Errors
    ///
    /// `StoreError::Write` when the store rejects the record.
    async fn put_job(&self, job: &JobRecord) -> Result<(), StoreError>;
}
