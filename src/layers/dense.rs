use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

/// Fully connected layer: `a = activation(x · W + b)`.
///
/// `weights` has shape `(input_size, size)`, `biases` has shape `(1, size)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub size: usize,
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction,
}

impl Layer {
    /// Builds a layer with zeroed weights and biases.
    pub fn zeros(size: usize, input_size: usize, activation: ActivationFunction) -> Layer {
        Layer {
            size,
            weights: Matrix::zeros(input_size, size),
            biases: Matrix::zeros(1, size),
            activator: activation,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    /// Checks that weights and biases agree with `size`.
    pub fn is_consistent(&self) -> bool {
        self.weights.is_rectangular()
            && self.biases.is_rectangular()
            && self.weights.cols == self.size
            && self.biases.rows == 1
            && self.biases.cols == self.size
    }

    /// Forward pass for one sample. Callers guarantee
    /// `input.len() == self.input_size()`.
    pub fn feed_from(&self, input: Vec<f64>) -> Vec<f64> {
        let z = Matrix::row(input) * &self.weights + self.biases.clone();
        self.activator.apply(&z.into_row())
    }
}
