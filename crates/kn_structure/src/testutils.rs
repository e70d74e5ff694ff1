//! Random notation for property tests, shared with downstream crates
//! through the `testutils` feature.

use rand::Rng;

use crate::BracketFamily;
use crate::FILLER;

/// Random notation, balanced per bracket family, with crossings.
/// Open brackets left at the end are closed in family order.
pub fn random_notation<R: Rng>(rng: &mut R, len: usize) -> String {
    let mut open = [0usize; 4];
    let mut out = String::new();
    for _ in 0..len {
        let family = BracketFamily::ALL[rng.random_range(0..4)];
        match rng.random_range(0..3) {
            0 => out.push(FILLER),
            1 => {
                out.push(family.open());
                open[family.index()] += 1;
            }
            _ if open[family.index()] > 0 => {
                out.push(family.close());
                open[family.index()] -= 1;
            }
            _ => out.push(FILLER),
        }
    }
    for family in BracketFamily::ALL {
        for _ in 0..open[family.index()] {
            out.push(family.close());
        }
    }
    out
}
