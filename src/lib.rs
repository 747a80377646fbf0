pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod tensor;
pub mod label;
pub mod error;
pub mod preprocess;
pub mod classifier;
pub mod report;
pub mod history;
pub mod pipeline;
pub mod storage;
pub mod config;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::{ModelMetadata, Network};
pub use tensor::{Tensor, TENSOR_SHAPE};
pub use label::{ClassificationResult, Label};
pub use error::{ErrorCategory, InferenceError, InitError, PipelineError, PreprocessError, StorageError};
pub use preprocess::{Image, ImagePreprocessor};
pub use classifier::{ClassifierService, JsonModelLoader, Model, ModelLoader};
pub use report::ReportSynthesizer;
pub use history::{ScanHistory, ScanRecord, HISTORY_CAPACITY};
pub use pipeline::{ClassificationPipeline, PipelineOutput, DEFAULT_PATIENT_NAME};
pub use storage::{sanitize_filename, UploadStore};
pub use config::ServiceConfig;
