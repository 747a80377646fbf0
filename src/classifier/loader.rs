use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{InferenceError, InitError};
use crate::label::Label;
use crate::network::Network;
use crate::tensor::Tensor;

/// A loaded classifier: maps an input tensor to one probability per label.
pub trait Model: Send + Sync {
    fn predict(&self, input: &Tensor) -> Result<Vec<f64>, InferenceError>;
}

/// Produces a `Model` from some backing artifact.
pub trait ModelLoader: Send + Sync {
    type Model: Model;

    fn load(&self) -> Result<Self::Model, InitError>;
}

impl Model for Network {
    fn predict(&self, input: &Tensor) -> Result<Vec<f64>, InferenceError> {
        if input.len() != self.input_size() {
            return Err(InferenceError::ShapeMismatch {
                expected: self.input_size(),
                actual: input.len(),
            });
        }
        Ok(self.forward(input.to_flat_vec()))
    }
}

/// Loads a JSON-serialized `Network` and checks it fits the classifier contract.
#[derive(Debug, Clone)]
pub struct JsonModelLoader {
    path: PathBuf,
}

impl JsonModelLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonModelLoader { path: path.into() }
    }
}

impl ModelLoader for JsonModelLoader {
    type Model = Network;

    fn load(&self) -> Result<Network, InitError> {
        log::info!("Loading model from {}", self.path.display());
        let network = Network::load_json(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => InitError::ArtifactMissing { path: self.path.clone() },
            ErrorKind::InvalidData => InitError::Corrupt { path: self.path.clone(), source: e },
            _ => InitError::Io { path: self.path.clone(), source: e },
        })?;
        check_compatible(&network)?;
        log::info!(
            "Model loaded: {} layers, {} inputs, {} outputs",
            network.layers.len(),
            network.input_size(),
            network.output_size()
        );
        Ok(network)
    }
}

/// Verifies the network is structurally sound, consumes a full input tensor,
/// and emits one value per label in `Label::ALL` order.
pub fn check_compatible(network: &Network) -> Result<(), InitError> {
    network.validate().map_err(InitError::Incompatible)?;

    let expected_inputs = crate::tensor::TENSOR_SHAPE.iter().product::<usize>();
    if network.input_size() != expected_inputs {
        return Err(InitError::Incompatible(format!(
            "network takes {} inputs, expected {}",
            network.input_size(),
            expected_inputs
        )));
    }
    if network.output_size() != Label::ALL.len() {
        return Err(InitError::Incompatible(format!(
            "network produces {} outputs, expected {}",
            network.output_size(),
            Label::ALL.len()
        )));
    }

    let declared = network.metadata.as_ref().and_then(|m| m.output_labels.as_ref());
    if let Some(labels) = declared {
        let matches = labels.len() == Label::ALL.len()
            && labels.iter().zip(Label::ALL.iter()).all(|(a, b)| a == b.as_str());
        if !matches {
            return Err(InitError::Incompatible(format!(
                "declared output labels {:?} do not match {:?}",
                labels,
                Label::ALL.map(|l| l.as_str())
            )));
        }
    }
    Ok(())
}
