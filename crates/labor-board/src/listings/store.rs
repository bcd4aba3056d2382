use std::sync::{Arc, RwLock};

use super::domain::{JobId, JobRecord};

/// Storage abstraction so the workflows can be exercised against any backing collection.
///
/// Enumeration order is newest first. `insert_front` is the only mutator.
pub trait ListingStore: Send + Sync {
    fn insert_front(&self, record: JobRecord) -> Result<Arc<JobRecord>, StoreError>;
    fn find_by_id(&self, id: &JobId) -> Option<Arc<JobRecord>>;
    fn all(&self) -> Vec<Arc<JobRecord>>;

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Error enumeration for store failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("job id {0} already exists")]
    DuplicateId(JobId),
}

/// Process-local listing collection.
///
/// Writers serialize on the lock; a record is fully built before it is
/// published, so readers never see a partial posting. `all` hands out a
/// snapshot of shared handles rather than the live vector.
#[derive(Debug, Default)]
pub struct InMemoryListingStore {
    records: RwLock<Vec<Arc<JobRecord>>>,
}

impl InMemoryListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store whose canonical order matches `records` as given.
    pub fn with_records<I>(records: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = JobRecord>,
    {
        let mut ordered: Vec<Arc<JobRecord>> = Vec::new();
        for record in records {
            if ordered.iter().any(|existing| existing.id == record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
            ordered.push(Arc::new(record));
        }

        Ok(Self {
            records: RwLock::new(ordered),
        })
    }
}

impl ListingStore for InMemoryListingStore {
    fn insert_front(&self, record: JobRecord) -> Result<Arc<JobRecord>, StoreError> {
        let record = Arc::new(record);
        let mut guard = self.records.write().expect("listing lock poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(StoreError::DuplicateId(record.id.clone()));
        }
        guard.insert(0, record.clone());
        Ok(record)
    }

    fn find_by_id(&self, id: &JobId) -> Option<Arc<JobRecord>> {
        let guard = self.records.read().expect("listing lock poisoned");
        guard.iter().find(|record| &record.id == id).cloned()
    }

    fn all(&self) -> Vec<Arc<JobRecord>> {
        self.records.read().expect("listing lock poisoned").clone()
    }

    fn len(&self) -> usize {
        self.records.read().expect("listing lock poisoned").len()
    }
}
