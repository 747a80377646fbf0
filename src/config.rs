use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "models/brain_tumor_classifier.json";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Runtime settings, read from `NEUROSCAN_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub model_path: PathBuf,
    pub upload_dir: PathBuf,
    pub bind_addr: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = ServiceConfig::default();
        ServiceConfig {
            model_path: get("NEUROSCAN_MODEL_PATH").map(PathBuf::from).unwrap_or(defaults.model_path),
            upload_dir: get("NEUROSCAN_UPLOAD_DIR").map(PathBuf::from).unwrap_or(defaults.upload_dir),
            bind_addr: get("NEUROSCAN_BIND").unwrap_or(defaults.bind_addr),
        }
    }
}
