use labor_board::listings::{seed, InMemoryListingStore, SeedImportError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the startup store from a catalogue file, or the built-in postings when none is given.
pub(crate) fn load_store(
    seed_csv: Option<&Path>,
) -> Result<InMemoryListingStore, SeedImportError> {
    match seed_csv {
        Some(path) => seed::store_from_path(path),
        None => Ok(seed::seeded_store()),
    }
}
