/// neuroscan server
///
/// Brain MRI triage over HTTP: upload a scan, receive the predicted class,
/// its confidence, and a generated report. Served by a synchronous
/// tiny_http server with one thread per request.
///
/// Run with:
///   NEUROSCAN_MODEL_PATH=models/net.json cargo run --bin neuroscan-server --release
///
/// Routes:
///   POST /analyze       multipart `image`, `patient_name`
///   POST /upload        multipart `file`, `patientName`
///   GET  /recent-scans  last 10 scans, newest first
///   POST /chat          JSON `{message, scanType}`
///   GET  /health

mod handlers;
mod routes;
mod state;
mod util;

use std::sync::Arc;
use tiny_http::Server;

use neuroscan::ServiceConfig;
use state::{AppState, SharedState};

fn main() {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServiceConfig::from_env();
    log::info!("Model artifact: {}", config.model_path.display());
    log::info!("Upload directory: {}", config.upload_dir.display());

    let shared_state: SharedState = Arc::new(AppState::new(&config));

    // Startup without a model is allowed; requests retry the load.
    if let Err(e) = shared_state.pipeline.classifier().ensure_initialized() {
        log::warn!("Starting without a model ({}); loading will be retried per request", e);
    }

    let server = match Server::http(&config.bind_addr) {
        Ok(server) => server,
        Err(e) => {
            log::error!("Failed to bind {}: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };
    log::info!("Listening on http://{}", config.bind_addr);

    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, &state_clone);
        });
    }
}
