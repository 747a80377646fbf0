use std::path::PathBuf;

use thiserror::Error;

/// Failure turning uploaded bytes into a classifier tensor.
#[derive(Debug, Error)]
pub enum PreprocessError {
    /// Undecodable bytes, and decoded images with no pixels.
    #[error("image could not be decoded: {0}")]
    Decode(#[from] image::ImageError),

    #[error("tensor shape {actual:?} does not match {expected:?}")]
    Shape { expected: [usize; 4], actual: Vec<usize> },
}

/// Failure loading the model artifact. Never cached: the next call retries.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("model artifact not found at {}", .path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("model artifact at {} could not be read: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("model artifact at {} is corrupt: {source}", .path.display())]
    Corrupt { path: PathBuf, source: std::io::Error },

    #[error("model artifact is incompatible: {0}")]
    Incompatible(String),
}

/// Failure during a single forward pass.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("classifier is not initialized")]
    NotInitialized,

    #[error("model expects {expected} input values, tensor has {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("model produced an invalid distribution: {0}")]
    InvalidOutput(String),
}

/// Failure writing an upload to disk.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not create upload directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: std::io::Error },

    #[error("could not write upload {}: {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },
}

/// Unified error of `ClassificationPipeline::run`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Preprocess(#[from] PreprocessError),

    #[error(transparent)]
    Init(#[from] InitError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Client-facing classes of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    BadInput,
    Unavailable,
    Internal,
}

impl PipelineError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PipelineError::Preprocess(PreprocessError::Shape { .. }) => ErrorCategory::Internal,
            PipelineError::Preprocess(_) => ErrorCategory::BadInput,
            PipelineError::Init(_) => ErrorCategory::Unavailable,
            PipelineError::Inference(InferenceError::NotInitialized) => ErrorCategory::Unavailable,
            PipelineError::Inference(_) => ErrorCategory::Internal,
        }
    }

    /// Fixed message safe to return to clients; details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self.category() {
            ErrorCategory::BadInput => "uploaded file is not a supported image",
            ErrorCategory::Unavailable => "model unavailable",
            ErrorCategory::Internal => "internal error",
        }
    }
}
