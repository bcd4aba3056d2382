use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::listings::domain::{JobId, JobRecord, NewJobForm};
use crate::listings::posting::{Clock, IdGenerator, SequentialIdGenerator};
use crate::listings::seed::seeded_store;
use crate::listings::service::JobBoardService;
use crate::listings::store::InMemoryListingStore;

pub(super) fn posted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 2, 8, 15, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) struct FixedClock(pub(super) DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Always hands out the same id, to provoke store collisions.
pub(super) struct RepeatingIdGenerator(pub(super) &'static str);

impl IdGenerator for RepeatingIdGenerator {
    fn next_id(&self, _created_at: DateTime<Utc>) -> JobId {
        JobId::from(self.0)
    }
}

pub(super) fn seeded_service() -> JobBoardService<InMemoryListingStore> {
    JobBoardService::with_generators(
        Arc::new(seeded_store()),
        Arc::new(SequentialIdGenerator::new()),
        Arc::new(FixedClock(posted_at())),
    )
}

pub(super) fn job_form(title: &str, location: &str, pay: &str) -> NewJobForm {
    NewJobForm {
        title: Some(title.to_string()),
        location: Some(location.to_string()),
        pay: Some(pay.to_string()),
        ..NewJobForm::default()
    }
}

pub(super) fn ids<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Arc<JobRecord>>,
{
    records
        .into_iter()
        .map(|record| record.id.0.clone())
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
