use std::sync::{Arc, Mutex, PoisonError};

use super::JobStore;
use crate::errors::StoreError;
use crate::schema::JobRecord;

/// In-memory store for tests and dry runs
///
/// Clones share the same backing vector.
#[derive(Debug, Clone, Default)]
pub struct MemoryJobStore {
    jobs: Arc<Mutex<Vec<JobRecord>>>,
}

impl MemoryJobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records written so far, in write order
    #[must_use]
    pub fn jobs(&self) -> Vec<JobRecord> {
        self.jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl JobStore for MemoryJobStore {
    async fn put_job(&self, job: &JobRecord) -> Result<(), StoreError> {
        self.jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(job.clone());
        Ok(())
    }
}
