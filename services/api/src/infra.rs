use intern_match::config::CatalogConfig;
use intern_match::matching::{JsonFileCatalog, RecommendationEngine};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Pick the catalog file: an explicit CLI path wins over configuration.
pub(crate) fn catalog_path(override_path: Option<PathBuf>, config: &CatalogConfig) -> PathBuf {
    override_path.unwrap_or_else(|| config.path.clone())
}

/// Build the engine once; a missing or malformed file yields an empty catalog.
pub(crate) fn load_engine(path: &Path) -> RecommendationEngine {
    RecommendationEngine::from_source(&JsonFileCatalog::new(path))
}
