use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;

use super::applications::ApplicationError;
use super::domain::{ApplicationForm, JobId, NewJobForm, POPULAR_SKILLS};
use super::posting::PostingError;
use super::query::JobQuery;
use super::service::{JobBoardService, LATEST_LIMIT};
use super::store::ListingStore;

/// Router builder exposing listing search, detail, posting, and application endpoints.
///
/// The JSON API lives under `/api/v1`; `/hire` and `/apply` accept the
/// urlencoded bodies submitted by the site's HTML forms.
pub fn listing_router<S>(service: Arc<JobBoardService<S>>) -> Router
where
    S: ListingStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs",
            get(search_handler::<S>).post(create_json_handler::<S>),
        )
        .route("/api/v1/jobs/latest", get(latest_handler::<S>))
        .route("/api/v1/jobs/:job_id", get(detail_handler::<S>))
        .route("/api/v1/apply", post(apply_json_handler::<S>))
        .route("/api/v1/skills", get(skills_handler))
        .route("/hire", post(create_form_handler::<S>))
        .route("/apply", post(apply_form_handler::<S>))
        .with_state(service)
}

pub(crate) async fn search_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Query(query): Query<JobQuery>,
) -> Response
where
    S: ListingStore + 'static,
{
    let jobs = service.search(&query);
    let payload = json!({
        "q": query.term(),
        "skill": query.skill(),
        "count": jobs.len(),
        "jobs": jobs,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn latest_handler<S>(State(service): State<Arc<JobBoardService<S>>>) -> Response
where
    S: ListingStore + 'static,
{
    let jobs = service.latest(LATEST_LIMIT);
    (StatusCode::OK, Json(json!({ "jobs": jobs }))).into_response()
}

pub(crate) async fn detail_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Path(job_id): Path<String>,
) -> Response
where
    S: ListingStore + 'static,
{
    let id = JobId(job_id);
    match service.get(&id) {
        Some(job) => (StatusCode::OK, Json(job)).into_response(),
        None => not_found(&id),
    }
}

pub(crate) async fn skills_handler() -> Response {
    (StatusCode::OK, Json(json!({ "skills": POPULAR_SKILLS }))).into_response()
}

pub(crate) async fn create_json_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Json(form): Json<NewJobForm>,
) -> Response
where
    S: ListingStore + 'static,
{
    create_response(&service, form)
}

pub(crate) async fn create_form_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Form(form): Form<NewJobForm>,
) -> Response
where
    S: ListingStore + 'static,
{
    create_response(&service, form)
}

pub(crate) async fn apply_json_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Json(form): Json<ApplicationForm>,
) -> Response
where
    S: ListingStore + 'static,
{
    apply_response(&service, form)
}

pub(crate) async fn apply_form_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Form(form): Form<ApplicationForm>,
) -> Response
where
    S: ListingStore + 'static,
{
    apply_response(&service, form)
}

fn create_response<S>(service: &JobBoardService<S>, form: NewJobForm) -> Response
where
    S: ListingStore + 'static,
{
    match service.create_job(form) {
        Ok(job) => (StatusCode::CREATED, Json(job)).into_response(),
        Err(PostingError::Validation(error)) => {
            let payload = json!({
                "error": "Please fill properly.",
                "missing": error.missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(PostingError::Store(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn apply_response<S>(service: &JobBoardService<S>, form: ApplicationForm) -> Response
where
    S: ListingStore + 'static,
{
    match service.apply(form) {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(ApplicationError::NotFound(id)) => not_found(&id),
        Err(ApplicationError::Validation { job, missing }) => {
            let payload = json!({
                "error": "Please provide both name and phone number",
                "missing": missing,
                "job": job,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

fn not_found(id: &JobId) -> Response {
    let payload = json!({
        "error": "job not found",
        "job_id": id,
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}
