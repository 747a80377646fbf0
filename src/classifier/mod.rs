pub mod loader;
pub mod service;

pub use loader::{JsonModelLoader, Model, ModelLoader};
pub use service::ClassifierService;
