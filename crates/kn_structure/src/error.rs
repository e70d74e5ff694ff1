use std::fmt;
use thiserror::Error;

use crate::NAIDX;
use crate::StemRole;

/// How the brackets of a notation string fail to balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Imbalance {
    /// A closing bracket was found while its role had no open bracket.
    UnmatchedClose { role: StemRole, position: NAIDX },

    /// Open brackets of a role were still waiting at the end of the string.
    UnclosedOpen { role: StemRole, positions: Vec<NAIDX> },
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Imbalance::UnmatchedClose { role, position } => {
                write!(f, "unmatched {role} closing bracket at position {position}")
            }
            Imbalance::UnclosedOpen { role, positions } => {
                write!(f, "unclosed {role} brackets at positions {positions:?}")
            }
        }
    }
}

/// Error type for parsing dot-bracket notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// The notation contains no bracket characters at all.
    #[error("'{0}' has no stem symbols")]
    NoStemSymbols(String),

    #[error("unbalanced stems: {0}")]
    UnbalancedStems(Imbalance),

    /// Balanced notation, but without a complete pseudoknot core.
    #[error("no core stem found for role {role}")]
    NoCore { role: StemRole },

    #[error("notation of length {length} exceeds the maximum of {max} positions", max = NAIDX::MAX)]
    SequenceTooLong { length: usize },
}
