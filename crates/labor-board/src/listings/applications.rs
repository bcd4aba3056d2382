use std::sync::Arc;

use serde::Serialize;

use super::domain::{non_blank, ApplicationForm, JobId, JobRecord};
use super::store::ListingStore;

/// Applicant fields that must be present and non-blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantField {
    Name,
    Phone,
}

/// Confirmation payload for an accepted application. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationReceipt {
    pub job: Arc<JobRecord>,
    pub name: String,
    pub phone: String,
}

/// Error raised when an application is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationError {
    #[error("job {0} not found")]
    NotFound(JobId),
    /// The job exists; it is carried so the detail view can be re-rendered.
    #[error("please provide both name and phone number")]
    Validation {
        job: Arc<JobRecord>,
        missing: Vec<ApplicantField>,
    },
}

/// Check an application against the current listings.
///
/// The job lookup happens first, so an unknown id is reported as not found
/// whatever the applicant fields contain.
pub fn apply<S>(store: &S, form: ApplicationForm) -> Result<ApplicationReceipt, ApplicationError>
where
    S: ListingStore + ?Sized,
{
    let job_id = JobId(form.job_id.unwrap_or_default());
    let job = store
        .find_by_id(&job_id)
        .ok_or(ApplicationError::NotFound(job_id))?;

    let name = non_blank(form.name.as_deref());
    let phone = non_blank(form.phone.as_deref());

    match (name, phone) {
        (Some(name), Some(phone)) => Ok(ApplicationReceipt {
            job,
            name: name.to_string(),
            phone: phone.to_string(),
        }),
        (name, phone) => {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push(ApplicantField::Name);
            }
            if phone.is_none() {
                missing.push(ApplicantField::Phone);
            }
            Err(ApplicationError::Validation { job, missing })
        }
    }
}
