use ndarray::Array4;

use crate::error::PreprocessError;

pub const INPUT_HEIGHT: usize = 128;
pub const INPUT_WIDTH: usize = 128;
pub const INPUT_CHANNELS: usize = 1;

/// NHWC shape the classifier consumes.
pub const TENSOR_SHAPE: [usize; 4] = [1, INPUT_HEIGHT, INPUT_WIDTH, INPUT_CHANNELS];

/// Classifier input: shape (1, 128, 128, 1), values in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor(Array4<f64>);

impl Tensor {
    /// Wraps an array after checking it has exactly `TENSOR_SHAPE`.
    pub fn new(array: Array4<f64>) -> Result<Tensor, PreprocessError> {
        if array.shape() != TENSOR_SHAPE {
            return Err(PreprocessError::Shape {
                expected: TENSOR_SHAPE,
                actual: array.shape().to_vec(),
            });
        }
        Ok(Tensor(array))
    }

    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn array(&self) -> &Array4<f64> {
        &self.0
    }

    /// Values in row-major (N, H, W, C) order.
    pub fn to_flat_vec(&self) -> Vec<f64> {
        self.0.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_expected_shape() {
        let t = Tensor::new(Array4::zeros((1, 128, 128, 1))).unwrap();
        assert_eq!(t.shape(), &TENSOR_SHAPE);
        assert_eq!(t.len(), 128 * 128);
        assert_eq!(t.to_flat_vec().len(), 16384);
    }

    #[test]
    fn rejects_other_shapes() {
        let err = Tensor::new(Array4::zeros((1, 128, 128, 3))).unwrap_err();
        match err {
            PreprocessError::Shape { actual, .. } => assert_eq!(actual, vec![1, 128, 128, 3]),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
