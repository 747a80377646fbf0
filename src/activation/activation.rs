use serde::{Serialize, Deserialize};
use std::f64::consts::{E, PI};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Sigmoid,
    ReLU,
    Identity,
    /// Softmax is vector-valued; `Layer::feed_from()` applies it to the whole
    /// pre-activation row through `softmax()` instead of `function()`.
    Softmax,
    Tanh,
    LeakyReLU { alpha: f64 },
    Elu { alpha: f64 },
    Gelu,
    Swish,
}

impl ActivationFunction {
    /// Applies the activation to a full pre-activation row.
    pub fn apply(&self, z: &[f64]) -> Vec<f64> {
        match self {
            ActivationFunction::Softmax => softmax(z),
            other => z.iter().map(|&x| other.function(x)).collect(),
        }
    }

    /// Element-wise activation. `Softmax` has no element-wise form and is
    /// returned unchanged here; use `apply()` for whole rows.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Identity | ActivationFunction::Softmax => x,
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::LeakyReLU { alpha } => if x > 0.0 { x } else { alpha * x },
            ActivationFunction::Elu { alpha } => {
                if x > 0.0 { x } else { alpha * (E.powf(x) - 1.0) }
            }
            ActivationFunction::Gelu => {
                let c = (2.0_f64 / PI).sqrt();
                0.5 * x * (1.0 + (c * (x + 0.044715 * x.powi(3))).tanh())
            }
            ActivationFunction::Swish => x / (1.0 + E.powf(-x)),
        }
    }
}

/// Numerically stable softmax: the row maximum is subtracted before `exp`.
pub fn softmax(z: &[f64]) -> Vec<f64> {
    let max = z.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = z.iter().map(|&x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_sums_to_one() {
        let out = softmax(&[1.0, 2.0, 3.0, 4.0]);
        let sum: f64 = out.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(out.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn softmax_of_log_probs_recovers_probs() {
        let probs = [0.94, 0.03, 0.02, 0.01];
        let logits: Vec<f64> = probs.iter().map(|p: &f64| p.ln()).collect();
        let out = softmax(&logits);
        for (a, b) in out.iter().zip(probs.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn softmax_survives_large_logits() {
        let out = softmax(&[1000.0, 1000.0]);
        assert_eq!(out, vec![0.5, 0.5]);
    }

    #[test]
    fn elementwise_activations() {
        assert_eq!(ActivationFunction::ReLU.apply(&[-1.0, 2.0]), vec![0.0, 2.0]);
        assert_eq!(ActivationFunction::LeakyReLU { alpha: 0.1 }.function(-10.0), -1.0);
        assert!((ActivationFunction::Sigmoid.function(0.0) - 0.5).abs() < 1e-12);
    }
}
