//! The kn_structure crate.
//!
//! Parses dot-bracket notation with up to four bracket families and
//! extracts the base pairs each family encodes:
//!  - role assignment (which family plays LEFT, MIDDLE_1, MIDDLE_2, RIGHT)
//!  - single-pass, stack-based pair extraction
//!  - detection of the four core stems of a pseudoknot
//!

mod error;
mod notation;
mod pair;
mod core_state;
mod parser;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use error::*;
pub use notation::*;
pub use pair::*;
pub use core_state::*;
pub use parser::*;


/// Nucleic Acid INdeX: we use `u16` (0 to 65k), which is plenty for nucleic acids.
/// Notation strings with more positions than `NAIDX` can address are rejected
/// by the parser.
pub type NAIDX = u16;
