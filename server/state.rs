use std::sync::Arc;

use neuroscan::{ClassificationPipeline, JsonModelLoader, ServiceConfig, UploadStore};

/// Everything a request handler needs. Internally synchronized, so it is
/// shared as a plain `Arc` without an outer lock.
pub struct AppState {
    pub pipeline: ClassificationPipeline<JsonModelLoader>,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> Self {
        AppState {
            pipeline: ClassificationPipeline::new(JsonModelLoader::new(&config.model_path)),
            uploads: UploadStore::new(&config.upload_dir),
        }
    }
}

/// Shared state type passed to every handler.
pub type SharedState = Arc<AppState>;
