use serde_json::json;

use crate::handlers::ApiReply;
use crate::state::AppState;

/// `GET /health`
pub fn handle(state: &AppState) -> ApiReply {
    ApiReply::ok(json!({
        "status": "ok",
        "model_loaded": state.pipeline.classifier().is_initialized(),
        "scans": state.pipeline.history().len(),
    }))
}
