use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::{activation::activation::ActivationFunction, layers::dense::Layer};
use crate::network::metadata::ModelMetadata;

/// Feed-forward network of dense layers, serialized as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
}

impl Network {
    /// Builds a zero-initialised network from (size, input_size, activation) tuples.
    pub fn new(layer_specs: Vec<(usize, usize, ActivationFunction)>) -> Network {
        let layers = layer_specs.into_iter()
            .map(|(size, input_size, activation)| Layer::zeros(size, input_size, activation))
            .collect();
        Network { layers, metadata: None }
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, Layer::input_size)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, |l| l.size)
    }

    /// Checks that the network is non-empty, every layer is internally
    /// consistent, and each layer's input size matches the previous output.
    pub fn validate(&self) -> Result<(), String> {
        if self.layers.is_empty() {
            return Err("network has no layers".into());
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if !layer.is_consistent() {
                return Err(format!("layer {} has inconsistent weight or bias dimensions", i));
            }
            if i > 0 && layer.input_size() != self.layers[i - 1].size {
                return Err(format!(
                    "layer {} expects {} inputs but layer {} produces {}",
                    i, layer.input_size(), i - 1, self.layers[i - 1].size
                ));
            }
        }
        Ok(())
    }

    /// Forward pass without side effects. Callers guarantee
    /// `input.len() == self.input_size()` on a validated network.
    pub fn forward(&self, input: Vec<f64>) -> Vec<f64> {
        let mut current = input;
        for layer in &self.layers {
            current = layer.feed_from(current);
        }
        current
    }

    /// Serializes the network to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    /// Schema errors surface as `ErrorKind::InvalidData`.
    pub fn load_json(path: impl AsRef<Path>) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    #[test]
    fn layers_must_chain() {
        let net = Network::new(vec![
            (3, 2, ActivationFunction::ReLU),
            (4, 5, ActivationFunction::Softmax),
        ]);
        let err = net.validate().unwrap_err();
        assert!(err.contains("layer 1 expects 5 inputs"), "{}", err);
    }

    #[test]
    fn empty_network_is_invalid() {
        let net = Network { layers: vec![], metadata: None };
        assert!(net.validate().is_err());
        assert_eq!(net.input_size(), 0);
    }

    #[test]
    fn forward_runs_every_layer() {
        let mut net = Network::new(vec![
            (2, 2, ActivationFunction::Identity),
            (2, 2, ActivationFunction::ReLU),
        ]);
        net.layers[0].weights = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        net.layers[1].weights = Matrix::from_data(vec![vec![-1.0, 0.0], vec![0.0, 2.0]]);
        assert!(net.validate().is_ok());
        assert_eq!(net.forward(vec![3.0, 4.0]), vec![0.0, 8.0]);
    }

    #[test]
    fn json_round_trip_keeps_metadata() {
        let mut net = Network::new(vec![(4, 3, ActivationFunction::Softmax)]);
        net.metadata = Some(ModelMetadata {
            description: Some("tiny".into()),
            output_labels: None,
        });
        let path = std::env::temp_dir().join(format!("neuroscan-net-{}.json", std::process::id()));
        net.save_json(&path).unwrap();
        let loaded = Network::load_json(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.metadata, net.metadata);
        assert_eq!(loaded.output_size(), 4);
    }

    #[test]
    fn garbage_json_is_invalid_data() {
        let path = std::env::temp_dir().join(format!("neuroscan-bad-{}.json", std::process::id()));
        std::fs::write(&path, b"{ not json").unwrap();
        let err = Network::load_json(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
