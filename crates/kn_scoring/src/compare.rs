//! One-call comparison of a prediction against a truth.

use serde::Deserialize;
use serde::Serialize;

use crate::ConfusionMatrix;
use crate::DEFAULT_SLACK;
use crate::ScoringError;
use crate::confusion_matrix;
use crate::correct_core_stems;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonParams {
    /// Positional tolerance for pairs and core stems.
    pub slack: usize,
}

impl Default for ComparisonParams {
    fn default() -> Self {
        Self { slack: DEFAULT_SLACK }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub confusion: ConfusionMatrix,
    pub correct_core_stems: usize,
}

/// Score `prediction` against `truth`: the base-pair confusion matrix and
/// the number of agreeing core stems.
pub fn compare(
    truth: &str,
    prediction: &str,
    params: &ComparisonParams,
) -> Result<Comparison, ScoringError> {
    let confusion = confusion_matrix(truth, prediction, params.slack)?;
    let correct_core_stems = correct_core_stems(truth, prediction, params.slack);
    Ok(Comparison { confusion, correct_core_stems })
}
