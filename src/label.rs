use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Closed set of diagnostic classes, in model output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Glioma,
    Meningioma,
    NoTumor,
    Pituitary,
}

impl Label {
    pub const ALL: [Label; 4] = [Label::Glioma, Label::Meningioma, Label::NoTumor, Label::Pituitary];

    pub fn from_index(index: usize) -> Option<Label> {
        Label::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Glioma => "glioma",
            Label::Meningioma => "meningioma",
            Label::NoTumor => "no_tumor",
            Label::Pituitary => "pituitary",
        }
    }

    /// Underscores become spaces and each word is capitalised: `no_tumor` -> `No Tumor`.
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_tumor(&self) -> bool {
        *self != Label::NoTumor
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected label and the probability the model assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: Label,
    pub confidence: f64,
}

impl ClassificationResult {
    /// Picks the most probable label. On exact ties the lowest index wins.
    ///
    /// The distribution must have one finite entry per label, each in [0, 1].
    pub fn from_distribution(probs: &[f64]) -> Result<ClassificationResult, InferenceError> {
        if probs.len() != Label::ALL.len() {
            return Err(InferenceError::InvalidOutput(format!(
                "expected {} probabilities, got {}",
                Label::ALL.len(),
                probs.len()
            )));
        }
        if let Some((i, p)) = probs.iter().enumerate().find(|(_, p)| !(0.0..=1.0).contains(*p)) {
            return Err(InferenceError::InvalidOutput(format!(
                "probability {} at index {} is outside [0, 1]",
                p, i
            )));
        }

        let mut best = 0;
        for (i, &p) in probs.iter().enumerate().skip(1) {
            if p > probs[best] {
                best = i;
            }
        }

        Ok(ClassificationResult {
            label: Label::ALL[best],
            confidence: probs[best],
        })
    }
}
