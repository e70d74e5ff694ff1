//! Agreement of the pseudoknot core stems of two structures.

use kn_structure::CoreStems;
use kn_structure::NAIDX;
use kn_structure::StemRole;
use kn_structure::StructureError;
use kn_structure::parse;

/// The core stems of `notation`.
pub fn core_stems(notation: &str) -> Result<CoreStems, StructureError> {
    parse(notation)?.core_stems()
}

/// Opening positions of the LEFT, MIDDLE_1, MIDDLE_2 and RIGHT core stems,
/// followed by their closing positions in the same order.
pub fn core_stem_indices(notation: &str) -> Result<[NAIDX; 8], StructureError> {
    Ok(core_stems(notation)?.indices())
}

/// Number of core stems (0 to 4) of `prediction` that agree with `truth`.
///
/// A role agrees if the distances of its opening and closing positions
/// add up to at most `slack`. If either structure has no complete core,
/// or cannot be parsed at all, nothing agrees and 0 is returned.
pub fn correct_core_stems(truth: &str, prediction: &str, slack: usize) -> usize {
    let (tstems, pstems) = match (core_stems(truth), core_stems(prediction)) {
        (Ok(t), Ok(p)) => (t, p),
        (Err(err), _) | (_, Err(err)) => {
            log::debug!("no core stem agreement for '{prediction}' vs '{truth}': {err}");
            return 0;
        }
    };

    StemRole::ALL
        .into_iter()
        .filter(|&role| tstems.pair(role).distance(&pstems.pair(role)) <= slack)
        .count()
}
