use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::{Extension, Json, Router};
use labor_board::listings::{listing_router, JobBoardService, ListingStore};
use labor_board::outreach::outreach_router;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_board_routes<S>(service: Arc<JobBoardService<S>>) -> Router
where
    S: ListingStore + 'static,
{
    listing_router(service)
        .merge(outreach_router())
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/work", get(work_redirect))
        .fallback(not_found)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Legacy "find work" link.
pub(crate) async fn work_redirect() -> Redirect {
    Redirect::to("/api/v1/jobs")
}

pub(crate) async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "page not found" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use labor_board::listings::seeded_store;
    use tower::ServiceExt;

    fn router() -> Router {
        with_board_routes(Arc::new(JobBoardService::new(Arc::new(seeded_store()))))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn work_redirects_to_job_listing() {
        let response = router()
            .oneshot(Request::get("/work").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/v1/jobs"
        );
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_not_found() {
        let response = router()
            .oneshot(Request::get("/nowhere").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "page not found");
    }

    #[tokio::test]
    async fn contact_form_is_validated() {
        let response = router()
            .oneshot(
                Request::post("/contact")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=Meera&email=&message=Hello"))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let payload = body_json(response).await;
        assert_eq!(payload["error"], "Please fill all fields.");
        assert_eq!(payload["missing"], json!(["email"]));
    }

    #[tokio::test]
    async fn readiness_tracks_startup_flag() {
        let state = AppState {
            readiness: Arc::new(std::sync::atomic::AtomicBool::new(false)),
            metrics: Arc::new(
                metrics_exporter_prometheus::PrometheusBuilder::new()
                    .build_recorder()
                    .handle(),
            ),
        };

        let response = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state
            .readiness
            .store(true, std::sync::atomic::Ordering::Release);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
