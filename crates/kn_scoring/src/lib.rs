//! The kn_scoring crate.
//!
//! Compares a predicted dot-bracket structure against the true structure:
//!  - position -> partner lookup tables (`find_matches`)
//!  - base-pair confusion matrix with positional slack
//!  - agreement of the four pseudoknot core stems
//!
//! The convenience functions are meant for scoring batches of arbitrary
//! predictions: malformed notation degrades to an empty table or a zero
//! score instead of an error.
//!

mod error;
mod match_table;
mod confusion;
mod core_stems;
mod compare;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use match_table::*;
pub use confusion::*;
pub use core_stems::*;
pub use compare::*;

/// Positional tolerance used when the caller has no preference.
pub const DEFAULT_SLACK: usize = 0;
