use serde::Deserialize;
use serde_json::json;

use crate::handlers::ApiReply;

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
    #[serde(default, rename = "scanType")]
    scan_type: String,
}

/// `POST /chat`
///
/// Canned assistant replies keyed on words in the message.
pub fn handle(body: &[u8]) -> ApiReply {
    let request: ChatRequest = match serde_json::from_slice(body) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("Malformed chat request: {}", e);
            return ApiReply::error(400, "invalid JSON body");
        }
    };

    ApiReply::ok(json!({
        "response": respond_to(&request.message, &request.scan_type),
        "timestamp": chrono::Local::now().format("%H:%M").to_string(),
    }))
}

fn respond_to(message: &str, scan_type: &str) -> String {
    let message = message.to_lowercase();
    if message.contains("scan") {
        format!("I'll help you analyze the {} scan. Please upload an image.", scan_type)
    } else if message.contains("symptom") {
        "Could you provide more details about the symptoms you're experiencing?".to_owned()
    } else {
        "I'm your medical AI assistant. How can I help you today?".to_owned()
    }
}
