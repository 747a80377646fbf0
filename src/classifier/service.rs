use std::sync::{Mutex, OnceLock};

use crate::classifier::loader::{Model, ModelLoader};
use crate::error::{InferenceError, InitError};
use crate::label::ClassificationResult;
use crate::tensor::Tensor;

/// Owns the classifier model and loads it lazily, at most once.
///
/// The loaded model lives in a `OnceLock`, so `classify` reads it without
/// locking. `init_lock` serializes load attempts; a failed load leaves the
/// cell empty and the next `ensure_initialized` call tries again.
pub struct ClassifierService<L: ModelLoader> {
    loader: L,
    model: OnceLock<L::Model>,
    init_lock: Mutex<()>,
}

impl<L: ModelLoader> ClassifierService<L> {
    pub fn new(loader: L) -> Self {
        ClassifierService {
            loader,
            model: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.model.get().is_some()
    }

    pub fn ensure_initialized(&self) -> Result<(), InitError> {
        if self.model.get().is_some() {
            return Ok(());
        }

        // The guard protects no data, so a poisoned lock is still usable.
        let _guard = self.init_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.model.get().is_some() {
            return Ok(());
        }

        match self.loader.load() {
            Ok(model) => {
                if self.model.set(model).is_err() {
                    log::warn!("Model cell was already set; discarding the duplicate load");
                }
                Ok(())
            }
            Err(e) => {
                log::warn!("Model initialization failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn classify(&self, tensor: &Tensor) -> Result<ClassificationResult, InferenceError> {
        let model = self.model.get().ok_or(InferenceError::NotInitialized)?;
        let probs = model.predict(tensor)?;
        ClassificationResult::from_distribution(&probs)
    }
}
