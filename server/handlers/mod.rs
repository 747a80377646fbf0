pub mod analyze;
pub mod chat;
pub mod health;
pub mod scans;
pub mod upload;

use serde_json::{json, Value};

use neuroscan::{ErrorCategory, Image, PipelineOutput};

use crate::state::AppState;

/// Status code plus JSON body; `routes::json_response` turns it into a response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    pub fn ok(body: Value) -> Self {
        ApiReply { status: 200, body }
    }

    pub fn error(status: u16, message: &str) -> Self {
        ApiReply { status, body: json!({ "error": message }) }
    }
}

/// Saves the upload under its sanitized name and runs the pipeline on it.
/// Failures are logged in full and mapped to a fixed client message.
pub fn classify_upload(
    state: &AppState,
    raw_filename: &str,
    bytes: &[u8],
    patient_name: &str,
) -> Result<PipelineOutput, ApiReply> {
    let filename = neuroscan::sanitize_filename(raw_filename);

    let stored = match state.uploads.save(&filename, bytes) {
        Ok(path) => path,
        Err(e) => {
            log::error!("Failed to store upload {}: {}", filename, e);
            return Err(ApiReply::error(500, "internal error"));
        }
    };

    let image = Image::new(filename, bytes.to_vec()).with_stored_path(stored);
    state.pipeline.run(&image, patient_name).map_err(|e| {
        let status = match e.category() {
            ErrorCategory::BadInput => {
                log::warn!("Rejected {}: {}", image.filename, e);
                400
            }
            ErrorCategory::Unavailable => {
                log::error!("Model unavailable while classifying {}: {}", image.filename, e);
                503
            }
            ErrorCategory::Internal => {
                log::error!("Classification of {} failed: {}", image.filename, e);
                500
            }
        };
        ApiReply::error(status, e.public_message())
    })
}
