use rand::Rng;
use rand::rngs::StdRng;
use kn_structure::FILLER;

pub use kn_structure::testutils::random_notation;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Replace each bracket of `notation` by filler with probability `p`.
/// The result is usually unbalanced.
pub fn perturb(rng: &mut StdRng, notation: &str, p: f64) -> String {
    notation
        .chars()
        .map(|c| if c != FILLER && rng.random_bool(p) { FILLER } else { c })
        .collect()
}

/// Two random notations of equal length.
pub fn random_pair(rng: &mut StdRng, len: usize) -> (String, String) {
    let mut a = random_notation(rng, len);
    let mut b = random_notation(rng, len);
    let n = a.len().max(b.len());
    while a.len() < n {
        a.push(FILLER);
    }
    while b.len() < n {
        b.push(FILLER);
    }
    (a, b)
}
