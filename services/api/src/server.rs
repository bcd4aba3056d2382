use crate::cli::ServeArgs;
use crate::infra::{load_store, AppState};
use crate::routes::with_board_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use labor_board::config::AppConfig;
use labor_board::error::AppError;
use labor_board::listings::{JobBoardService, ListingStore};
use labor_board::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(seed_csv) = args.seed_csv.take() {
        config.listings.seed_csv = Some(seed_csv);
    }

    telemetry::init(&config.telemetry)?;

    let store = Arc::new(load_store(config.listings.seed_csv.as_deref())?);
    info!(
        listings = store.len(),
        source = ?config.listings.seed_csv,
        "listing store seeded"
    );
    let service = Arc::new(JobBoardService::new(store));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_board_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "labor board ready");

    axum::serve(listener, app).await?;
    Ok(())
}
