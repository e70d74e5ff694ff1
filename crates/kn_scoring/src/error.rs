use thiserror::Error;

use kn_structure::StructureError;

/// Error type for scoring a prediction against a truth.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Truth and prediction must describe the same positions.
    #[error("length mismatch: truth has {truth} positions, prediction has {prediction}")]
    LengthMismatch { truth: usize, prediction: usize },

    /// Notation whose structure cannot be scored, such as over-long input.
    #[error("cannot score notation: {0}")]
    Structure(#[from] StructureError),
}
