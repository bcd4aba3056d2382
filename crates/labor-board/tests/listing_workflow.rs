//! End-to-end scenarios for the job board driven through the public service facade.

use std::sync::Arc;

use labor_board::listings::{
    seeded_store, ApplicationError, ApplicationForm, InMemoryListingStore, JobBoardService,
    JobQuery, ListingStore, NewJobForm, PostingError, LATEST_LIMIT,
};

fn service() -> JobBoardService<InMemoryListingStore> {
    JobBoardService::new(Arc::new(seeded_store()))
}

fn ids(service: &JobBoardService<InMemoryListingStore>, query: &JobQuery) -> Vec<String> {
    service
        .search(query)
        .iter()
        .map(|job| job.id.to_string())
        .collect()
}

#[test]
fn seeded_board_search_and_posting_scenario() {
    let service = service();

    assert_eq!(ids(&service, &JobQuery::new("plumbing", "")), vec!["Job-02"]);
    assert_eq!(ids(&service, &JobQuery::new("", "Painting")), vec!["Job-03"]);

    let created = service
        .create_job(NewJobForm {
            title: Some("X".to_string()),
            location: Some("Y".to_string()),
            pay: Some("100".to_string()),
            ..NewJobForm::default()
        })
        .expect("posting succeeds");

    let all = service.store().all();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].id, created.id);
    assert!(created.id.as_str().starts_with("Job-"));
    assert_eq!(created.duration, "Not specified");
    assert_eq!(created.posted, "a few seconds ago");
}

#[test]
fn posted_label_is_not_recomputed_on_later_reads() {
    let service = service();
    let created = service
        .create_job(NewJobForm {
            title: Some("Wall plastering".to_string()),
            location: Some("Sonipat".to_string()),
            pay: Some("650rs/day".to_string()),
            ..NewJobForm::default()
        })
        .expect("posting succeeds");

    let reread = service.get(&created.id).expect("posting stored");
    assert_eq!(reread.posted, created.posted);
    assert!(Arc::ptr_eq(&reread, &created));
}

#[test]
fn landing_page_shows_newest_postings_first() {
    let service = service();
    service
        .create_job(NewJobForm {
            title: Some("Electrician for rewiring".to_string()),
            location: Some("Gurgaon".to_string()),
            pay: Some("900rs/day".to_string()),
            tags: Some("Electrical".to_string()),
            ..NewJobForm::default()
        })
        .expect("posting succeeds");

    let latest = service.latest(LATEST_LIMIT);
    let titles: Vec<&str> = latest.iter().map(|job| job.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Electrician for rewiring",
            "Construction Helper Needed",
            "Plumbing Repair work"
        ]
    );
}

#[test]
fn invalid_posting_and_application_paths() {
    let service = service();

    let result = service.create_job(NewJobForm {
        location: Some("Y".to_string()),
        pay: Some("100".to_string()),
        ..NewJobForm::default()
    });
    assert!(matches!(result, Err(PostingError::Validation(_))));
    assert_eq!(service.listing_count(), 3);

    let result = service.apply(ApplicationForm {
        job_id: Some("Job-77".to_string()),
        name: Some("Sunil".to_string()),
        phone: Some("9000000000".to_string()),
    });
    assert!(matches!(result, Err(ApplicationError::NotFound(_))));

    match service.apply(ApplicationForm {
        job_id: Some("Job-01".to_string()),
        name: Some("Sunil".to_string()),
        phone: None,
    }) {
        Err(ApplicationError::Validation { job, .. }) => assert_eq!(job.id.as_str(), "Job-01"),
        other => panic!("expected validation error, got {other:?}"),
    }
}
