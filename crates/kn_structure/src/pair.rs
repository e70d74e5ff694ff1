//! Base pairs extracted from dot-bracket notation.
//!
//! Indices are **0-based** character positions of the notation string.

use std::fmt;
use serde::Deserialize;
use serde::Serialize;

use crate::NAIDX;

/// A base pair (i, j) with i < j.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair {
    i: NAIDX,
    j: NAIDX,
}

impl Pair {
    /// Create a new pair (i, j). Panics in debug if i >= j.
    pub fn new(i: NAIDX, j: NAIDX) -> Self {
        debug_assert!(i < j);
        Pair { i, j }
    }

    /// Return the position of the opening bracket.
    pub fn i(&self) -> NAIDX {
        self.i
    }

    /// Return the position of the closing bracket.
    pub fn j(&self) -> NAIDX {
        self.j
    }

    /// Sum of the positional distances to another pair: |i - i'| + |j - j'|.
    pub fn distance(&self, other: &Pair) -> usize {
        self.i.abs_diff(other.i) as usize + self.j.abs_diff(other.j) as usize
    }
}

impl From<Pair> for (NAIDX, NAIDX) {
    fn from(pair: Pair) -> Self {
        (pair.i, pair.j)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.i, self.j)
    }
}
