use serde_json::json;

use crate::handlers::ApiReply;
use crate::state::AppState;

/// `GET /recent-scans`
///
/// The last ten scans, newest first.
pub fn handle(state: &AppState) -> ApiReply {
    ApiReply::ok(json!(state.pipeline.history().list()))
}
