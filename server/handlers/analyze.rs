use serde_json::json;

use neuroscan::DEFAULT_PATIENT_NAME;

use crate::handlers::{classify_upload, ApiReply};
use crate::state::AppState;
use crate::util::multipart::MultipartForm;

/// `POST /analyze`
///
/// Fields: `image` (file), `patient_name` (optional).
pub fn handle(form: &MultipartForm, state: &AppState) -> ApiReply {
    let file = match form.file("image") {
        Some(part) if !part.data.is_empty() => part,
        _ => return ApiReply::error(400, "no image provided"),
    };
    let patient_name = form.text("patient_name").unwrap_or(DEFAULT_PATIENT_NAME);
    let filename = file.filename.as_deref().unwrap_or_default();

    match classify_upload(state, filename, &file.data, patient_name) {
        Ok(out) => ApiReply::ok(json!({
            "success": true,
            "predicted_class": out.label,
            "confidence": out.confidence,
            "report": out.report,
            "filename": out.filename,
        })),
        Err(reply) => reply,
    }
}
