//! Per-position confusion matrix of a predicted against a true structure.

use serde::Deserialize;
use serde::Serialize;

use kn_structure::NAIDX;
use kn_structure::StructureError;

use crate::ScoringError;
use crate::find_matches;

/// Counts of true/false positives/negatives over all positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub tp: usize,
    pub tn: usize,
    pub fp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl ConfusionMatrix {
    /// Number of scored positions.
    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }

    pub fn precision(&self) -> Option<f64> {
        ratio(self.tp, self.tp + self.fp)
    }

    /// Also known as sensitivity.
    pub fn recall(&self) -> Option<f64> {
        ratio(self.tp, self.tp + self.fn_)
    }

    pub fn f1(&self) -> Option<f64> {
        ratio(2 * self.tp, 2 * self.tp + self.fp + self.fn_)
    }

    /// Matthews correlation coefficient.
    pub fn mcc(&self) -> Option<f64> {
        let (tp, tn, fp, fn_) = (self.tp as f64, self.tn as f64, self.fp as f64, self.fn_ as f64);
        let denom = ((tp + fp) * (tp + fn_) * (tn + fp) * (tn + fn_)).sqrt();
        if denom == 0.0 {
            None
        } else {
            Some((tp * tn - fp * fn_) / denom)
        }
    }
}

fn ratio(num: usize, denom: usize) -> Option<f64> {
    (denom > 0).then(|| num as f64 / denom as f64)
}

/// Compare the pairings of `prediction` against `truth`, position by position.
///
/// A position paired in both structures counts as true positive if the
/// partners differ by at most `slack`, otherwise as false positive.
/// Unparsable notation is scored as if it had no pairs at all, but notation
/// longer than `NAIDX::MAX` positions is rejected.
pub fn confusion_matrix(
    truth: &str,
    prediction: &str,
    slack: usize,
) -> Result<ConfusionMatrix, ScoringError> {
    let length = truth.chars().count();
    let plength = prediction.chars().count();
    if length != plength {
        return Err(ScoringError::LengthMismatch { truth: length, prediction: plength });
    }
    let Ok(positions) = NAIDX::try_from(length) else {
        return Err(StructureError::SequenceTooLong { length }.into());
    };

    let truth_matches = find_matches(truth);
    let prediction_matches = find_matches(prediction);

    let mut cm = ConfusionMatrix::default();
    for idx in 0..positions {
        match (truth_matches.partner(idx), prediction_matches.partner(idx)) {
            (None, None) => cm.tn += 1,
            (None, Some(_)) => cm.fp += 1,
            (Some(_), None) => cm.fn_ += 1,
            (Some(t), Some(p)) => {
                if (t.abs_diff(p) as usize) <= slack {
                    cm.tp += 1;
                } else {
                    cm.fp += 1;
                }
            }
        }
    }
    Ok(cm)
}
