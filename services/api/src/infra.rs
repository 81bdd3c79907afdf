use metrics_exporter_prometheus::PrometheusHandle;
use scholarship_ai::config::ArtifactConfig;
use scholarship_ai::error::AppError;
use scholarship_ai::scholarship::{FileArtifactStore, ModelRegistry, ScholarshipService};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type FileBackedService = ScholarshipService<FileArtifactStore>;

/// Load exported classifiers and wire them to the file-backed artifact store.
///
/// A model directory without artifacts is not fatal: recommendations still work
/// and `/predict` reports that models are missing.
pub(crate) fn load_service(config: &ArtifactConfig) -> Result<Arc<FileBackedService>, AppError> {
    let registry = ModelRegistry::load_from_dir(&config.model_dir)?;
    if registry.is_empty() {
        warn!(
            model_dir = %config.model_dir.display(),
            "no classifier artifacts found; predictions are disabled"
        );
    }

    let store = FileArtifactStore::from_config(config);
    Ok(Arc::new(ScholarshipService::new(
        Arc::new(registry),
        Arc::new(store),
    )))
}
