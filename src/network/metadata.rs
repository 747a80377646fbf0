use serde::{Deserialize, Serialize};

/// Optional annotations attached to a saved Network.
/// All fields are Option<> so artifacts without metadata deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ModelMetadata {
    pub description: Option<String>,
    /// Class labels for the output layer, in output-index order.
    pub output_labels: Option<Vec<String>>,
}
