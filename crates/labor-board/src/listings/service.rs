use std::sync::Arc;

use tracing::{info, warn};

use super::applications::{self, ApplicationError, ApplicationReceipt};
use super::domain::{ApplicationForm, JobId, JobRecord, NewJobForm};
use super::posting::{Clock, IdGenerator, PostingError, PostingWorkflow};
use super::query::{self, JobQuery};
use super::store::ListingStore;

/// Number of postings featured on the landing page.
pub const LATEST_LIMIT: usize = 3;

/// Service composing the listing store with the posting and application workflows.
pub struct JobBoardService<S> {
    store: Arc<S>,
    posting: PostingWorkflow,
}

impl<S> JobBoardService<S>
where
    S: ListingStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            posting: PostingWorkflow::default(),
        }
    }

    pub fn with_generators(
        store: Arc<S>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            posting: PostingWorkflow::new(ids, clock),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Postings matching `query`, newest first.
    pub fn search(&self, query: &JobQuery) -> Vec<Arc<JobRecord>> {
        let records = self.store.all();
        query::search(&records, query)
    }

    pub fn latest(&self, limit: usize) -> Vec<Arc<JobRecord>> {
        self.store.all().into_iter().take(limit).collect()
    }

    pub fn get(&self, id: &JobId) -> Option<Arc<JobRecord>> {
        self.store.find_by_id(id)
    }

    pub fn listing_count(&self) -> usize {
        self.store.len()
    }

    /// Validate and publish a new posting at the front of the listings.
    pub fn create_job(&self, form: NewJobForm) -> Result<Arc<JobRecord>, PostingError> {
        match self.posting.create_job(self.store.as_ref(), form) {
            Ok(record) => {
                info!(job_id = %record.id, title = %record.title, "job posted");
                Ok(record)
            }
            Err(PostingError::Store(err)) => {
                warn!(error = %err, "job id collision; posting rejected");
                Err(PostingError::Store(err))
            }
            Err(err) => Err(err),
        }
    }

    pub fn apply(&self, form: ApplicationForm) -> Result<ApplicationReceipt, ApplicationError> {
        let receipt = applications::apply(self.store.as_ref(), form)?;
        info!(job_id = %receipt.job.id, "application received");
        Ok(receipt)
    }
}
