use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{non_blank, JobId, JobRecord, NewJobForm, UNSPECIFIED_DURATION};
use super::relative;
use super::store::{ListingStore, StoreError};

/// Source of "now" for posted labels and identifiers.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Produces identifiers for new postings. Implementations must never hand
/// out the same id twice within one process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, created_at: DateTime<Utc>) -> JobId;
}

static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// `Job-<unix millis>-<sequence>`.
///
/// The timestamp keeps ids readable and roughly sortable. The sequence is
/// shared by every generator in the process, so postings created within the
/// same millisecond stay apart even across separate workflows over one store.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialIdGenerator;

impl SequentialIdGenerator {
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, created_at: DateTime<Utc>) -> JobId {
        let sequence = JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        JobId(format!("Job-{}-{sequence:04}", created_at.timestamp_millis()))
    }
}

/// Posting fields that must be present and non-blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredJobField {
    Title,
    Location,
    Pay,
}

impl RequiredJobField {
    pub const fn label(self) -> &'static str {
        match self {
            RequiredJobField::Title => "title",
            RequiredJobField::Location => "location",
            RequiredJobField::Pay => "pay",
        }
    }
}

/// Structured reason a posting was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("missing required fields: {}", field_list(.missing))]
pub struct ValidationError {
    pub missing: Vec<RequiredJobField>,
}

fn field_list(fields: &[RequiredJobField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error raised while creating a posting.
#[derive(Debug, thiserror::Error)]
pub enum PostingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validated posting, parsed once from the raw form before anything is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub location: String,
    pub pay: String,
    pub tags: Vec<String>,
    pub duration: String,
    pub description: String,
}

impl JobDraft {
    pub fn from_form(form: NewJobForm) -> Result<Self, ValidationError> {
        let title = non_blank(form.title.as_deref());
        let location = non_blank(form.location.as_deref());
        let pay = non_blank(form.pay.as_deref());

        let missing: Vec<RequiredJobField> = [
            (RequiredJobField::Title, title),
            (RequiredJobField::Location, location),
            (RequiredJobField::Pay, pay),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| field)
        .collect();

        let (Some(title), Some(location), Some(pay)) = (title, location, pay) else {
            return Err(ValidationError { missing });
        };

        Ok(Self {
            title: title.to_string(),
            location: location.to_string(),
            pay: pay.to_string(),
            tags: split_tags(form.tags.as_deref()),
            duration: non_blank(form.duration.as_deref())
                .unwrap_or(UNSPECIFIED_DURATION)
                .to_string(),
            description: form.description.unwrap_or_default(),
        })
    }

    fn into_record(self, id: JobId, posted: String) -> JobRecord {
        JobRecord {
            id,
            title: self.title,
            location: self.location,
            pay: self.pay,
            tags: self.tags,
            posted,
            duration: self.duration,
            description: self.description,
        }
    }
}

/// Split a comma-separated tag list, trimming each entry.
///
/// Casing and duplicates are kept as entered.
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) if !raw.is_empty() => raw
            .split(',')
            .map(|tag| tag.trim().to_string())
            .collect(),
        _ => Vec::new(),
    }
}

/// Validates inbound postings, stamps identity and label, and stores them.
pub struct PostingWorkflow {
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl PostingWorkflow {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    pub fn create_job<S>(
        &self,
        store: &S,
        form: NewJobForm,
    ) -> Result<Arc<JobRecord>, PostingError>
    where
        S: ListingStore + ?Sized,
    {
        let draft = JobDraft::from_form(form)?;
        let created_at = self.clock.now();
        let id = self.ids.next_id(created_at);
        let posted = relative::from_now(created_at, self.clock.now());

        let stored = store.insert_front(draft.into_record(id, posted))?;
        Ok(stored)
    }
}

impl Default for PostingWorkflow {
    fn default() -> Self {
        Self::new(Arc::new(SequentialIdGenerator::new()), Arc::new(SystemClock))
    }
}
