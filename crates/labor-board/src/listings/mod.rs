//! Job listing store, search, and the posting/application workflows that feed it.

pub mod applications;
pub mod domain;
pub mod posting;
pub mod query;
pub mod relative;
pub mod router;
pub mod seed;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use applications::{ApplicantField, ApplicationError, ApplicationReceipt};
pub use domain::{
    ApplicationForm, JobId, JobRecord, NewJobForm, PopularSkill, POPULAR_SKILLS,
    UNSPECIFIED_DURATION,
};
pub use posting::{
    Clock, IdGenerator, JobDraft, PostingError, PostingWorkflow, RequiredJobField,
    SequentialIdGenerator, SystemClock, ValidationError,
};
pub use query::{search, JobQuery};
pub use router::listing_router;
pub use seed::{default_listings, seeded_store, SeedImportError};
pub use service::{JobBoardService, LATEST_LIMIT};
pub use store::{InMemoryListingStore, ListingStore, StoreError};
