use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::handlers::{self, ApiReply};
use crate::state::AppState;
use crate::util::multipart::{extract_boundary, MultipartForm};

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub fn json_response(reply: ApiReply) -> Response<Cursor<Vec<u8>>> {
    let bytes = reply.body.to_string().into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(reply.status),
        vec![
            Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
            Header::from_bytes(&b"Access-Control-Allow-Origin"[..], &b"*"[..]).unwrap(),
        ],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Reads one request, routes it and responds. Runs on its own thread.
pub fn dispatch(mut request: Request, state: &AppState) {
    let method = request.method().clone();
    let url = request.url().to_owned();
    let path = url.split('?').next().unwrap_or("").to_owned();
    let content_type = request.headers().iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str().to_owned())
        .unwrap_or_default();

    let mut body = Vec::new();
    let reply = match request.as_reader().read_to_end(&mut body) {
        Ok(_) => route(state, &method, &path, &content_type, &body),
        Err(e) => {
            log::warn!("Failed to read request body: {}", e);
            ApiReply::error(400, "could not read request body")
        }
    };

    log::debug!("{} {} -> {}", method, path, reply.status);
    if let Err(e) = request.respond(json_response(reply)) {
        log::warn!("Failed to send response for {}: {}", path, e);
    }
}

/// Maps (method, path) to a handler.
pub fn route(state: &AppState, method: &Method, path: &str, content_type: &str, body: &[u8]) -> ApiReply {
    match (method, path) {
        (Method::Post, "/analyze") => match multipart_form(content_type, body) {
            Ok(form) => handlers::analyze::handle(&form, state),
            Err(reply) => reply,
        },
        (Method::Post, "/upload") => match multipart_form(content_type, body) {
            Ok(form) => handlers::upload::handle(&form, state),
            Err(reply) => reply,
        },
        (Method::Get, "/recent-scans") => handlers::scans::handle(state),
        (Method::Post, "/chat") => handlers::chat::handle(body),
        (Method::Get, "/health") => handlers::health::handle(state),
        _ => ApiReply::error(404, "not found"),
    }
}

fn multipart_form(content_type: &str, body: &[u8]) -> Result<MultipartForm, ApiReply> {
    if !content_type.starts_with("multipart/form-data") {
        return Err(ApiReply::error(400, "expected multipart/form-data"));
    }
    let boundary = extract_boundary(content_type)
        .ok_or_else(|| ApiReply::error(400, "missing multipart boundary"))?;
    Ok(MultipartForm::parse(body, &boundary))
}
