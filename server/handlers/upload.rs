use serde_json::json;

use neuroscan::preprocess::has_allowed_extension;

use crate::handlers::{classify_upload, ApiReply};
use crate::state::AppState;
use crate::util::multipart::MultipartForm;

pub const DEFAULT_UPLOAD_PATIENT: &str = "Unknown Patient";

/// `POST /upload`
///
/// Fields: `file` (`.png`, `.jpg` or `.jpeg`), `patientName` (optional).
/// Runs the same pipeline as `/analyze`; the response omits the report.
pub fn handle(form: &MultipartForm, state: &AppState) -> ApiReply {
    let Some(file) = form.file("file") else {
        return ApiReply::error(400, "no file provided");
    };
    let filename = file.filename.as_deref().unwrap_or_default();
    if filename.is_empty() {
        return ApiReply::error(400, "no file selected");
    }
    if !has_allowed_extension(filename) {
        return ApiReply::error(400, "file type not allowed");
    }
    let patient_name = form
        .text("patientName")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_UPLOAD_PATIENT);

    match classify_upload(state, filename, &file.data, patient_name) {
        Ok(out) => ApiReply::ok(json!({
            "success": true,
            "prediction": out.label,
            "confidence": out.confidence,
            "filename": out.filename,
        })),
        Err(reply) => reply,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{form, png_bytes, state_with_model};

    #[test]
    fn accepted_upload_returns_prediction_without_report() {
        let state = state_with_model(Some([0.1, 0.6, 0.2, 0.1]));
        let png = png_bytes(64, 48);
        let reply = handle(&form(&[("file", Some("mri.jpg.png"), png.as_slice())]), &state);
        assert_eq!(reply.status, 200, "{}", reply.body);
        assert_eq!(reply.body["prediction"], "meningioma");
        assert!(reply.body.get("report").is_none());
        assert_eq!(state.pipeline.history().list()[0].patient_name, DEFAULT_UPLOAD_PATIENT);
    }

    #[test]
    fn disallowed_extension_is_rejected_before_processing() {
        let state = state_with_model(Some([0.25; 4]));
        let png = png_bytes(8, 8);
        for name in ["scan.PNG", "scan.gif", "scan"] {
            let reply = handle(&form(&[("file", Some(name), png.as_slice())]), &state);
            assert_eq!(reply.status, 400, "{}", name);
            assert_eq!(reply.body["error"], "file type not allowed");
        }
        assert!(state.pipeline.history().is_empty());
    }

    #[test]
    fn missing_or_unnamed_file_is_rejected() {
        let state = state_with_model(Some([0.25; 4]));
        assert_eq!(handle(&form(&[("patientName", None, b"P".as_slice())]), &state).body["error"], "no file provided");
        assert_eq!(handle(&form(&[("file", Some(""), b"".as_slice())]), &state).body["error"], "no file selected");
    }

    #[test]
    fn patient_name_field_is_camel_case() {
        let state = state_with_model(Some([0.7, 0.1, 0.1, 0.1]));
        let png = png_bytes(8, 8);
        let reply = handle(&form(&[("file", Some("a.jpeg"), png.as_slice()), ("patientName", None, b"Sam".as_slice())]), &state);
        assert_eq!(reply.status, 200);
        assert_eq!(state.pipeline.history().list()[0].patient_name, "Sam");
    }

    #[test]
    fn blank_patient_name_uses_route_default() {
        let state = state_with_model(Some([0.7, 0.1, 0.1, 0.1]));
        let png = png_bytes(8, 8);
        for blank in ["", "   "] {
            let reply = handle(
                &form(&[("file", Some("a.png"), png.as_slice()), ("patientName", None, blank.as_bytes())]),
                &state,
            );
            assert_eq!(reply.status, 200);
            assert_eq!(state.pipeline.history().list()[0].patient_name, DEFAULT_UPLOAD_PATIENT);
        }
    }
}
