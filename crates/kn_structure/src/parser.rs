//! Single-pass parser for dot-bracket notation with four bracket families.
//!
//! A `NotationParser` is created per input string, scans it once from left
//! to right and is consumed by `parse()`. Every role has its own stack of
//! open positions; a closing bracket pops the matching open position of its
//! role, so brackets of different roles may cross (pseudoknots) while
//! brackets of the same role must nest.

use std::fmt;

use crate::NAIDX;
use crate::Pair;
use crate::StemRole;
use crate::BracketSide;
use crate::CoreState;
use crate::RoleAssignment;
use crate::Imbalance;
use crate::StructureError;

/// The pairs of one stem role, in the order they were closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleStems {
    core: Vec<Pair>,
    non_core: Vec<Pair>,
}

impl RoleStems {
    fn push(&mut self, pair: Pair, is_core: bool) {
        if is_core {
            self.core.push(pair);
        } else {
            self.non_core.push(pair);
        }
    }
}

/// Parse `notation` into its per-role stem pairs.
pub fn parse(notation: &str) -> Result<ParseResult, StructureError> {
    NotationParser::new(notation)?.parse()
}

pub struct NotationParser<'a> {
    notation: &'a str,
    length: usize,
    roles: RoleAssignment,
    state: CoreState,
    stacks: [Vec<NAIDX>; 4],
    stems: [RoleStems; 4],
}

impl<'a> NotationParser<'a> {
    /// A new parser for `notation`, with roles assigned from its first bracket.
    pub fn new(notation: &'a str) -> Result<Self, StructureError> {
        let length = notation.chars().count();
        if length > NAIDX::MAX as usize {
            return Err(StructureError::SequenceTooLong { length });
        }
        let roles = RoleAssignment::from_notation(notation)?;
        Ok(Self {
            notation,
            length,
            roles,
            state: CoreState::default(),
            stacks: Default::default(),
            stems: Default::default(),
        })
    }

    pub fn roles(&self) -> &RoleAssignment {
        &self.roles
    }

    pub fn parse(mut self) -> Result<ParseResult, StructureError> {
        let notation = self.notation;
        for (position, c) in notation.chars().enumerate() {
            self.digest(position as NAIDX, c)?;
        }

        for role in StemRole::ALL {
            let stack = &self.stacks[role.index()];
            if !stack.is_empty() {
                return Err(StructureError::UnbalancedStems(Imbalance::UnclosedOpen {
                    role,
                    positions: stack.clone(),
                }));
            }
        }

        Ok(ParseResult {
            length: self.length,
            roles: self.roles,
            stems: self.stems,
        })
    }

    fn digest(&mut self, position: NAIDX, c: char) -> Result<(), StructureError> {
        let Some((role, side)) = self.roles.classify(c) else {
            return Ok(());
        };

        match side {
            BracketSide::Open => {
                self.stacks[role.index()].push(position);
                self.state.on_open(role);
            }
            BracketSide::Close => {
                let Some(i) = self.stacks[role.index()].pop() else {
                    let imbalance = Imbalance::UnmatchedClose { role, position };
                    return Err(StructureError::UnbalancedStems(imbalance));
                };
                let pair = Pair::new(i, position);
                let is_core = self.state.on_close(role);
                log::trace!("{role} stem {pair}{}", if is_core { " (core)" } else { "" });
                self.stems[role.index()].push(pair, is_core);
            }
        }
        Ok(())
    }
}

/// The stem pairs of a parsed notation string, split by role and into
/// core and non-core pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    length: usize,
    roles: RoleAssignment,
    stems: [RoleStems; 4],
}

impl TryFrom<&str> for ParseResult {
    type Error = StructureError;

    fn try_from(notation: &str) -> Result<Self, Self::Error> {
        parse(notation)
    }
}

impl ParseResult {
    /// Number of positions (characters) of the parsed notation.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn roles(&self) -> &RoleAssignment {
        &self.roles
    }

    /// Core pairs of `role`, in the order they were closed.
    pub fn core(&self, role: StemRole) -> &[Pair] {
        &self.stems[role.index()].core
    }

    /// Non-core pairs of `role`, in the order they were closed.
    pub fn non_core(&self, role: StemRole) -> &[Pair] {
        &self.stems[role.index()].non_core
    }

    /// All pairs of `role`, core pairs first.
    pub fn stems(&self, role: StemRole) -> impl Iterator<Item = Pair> + '_ {
        self.core(role).iter().chain(self.non_core(role)).copied()
    }

    /// All pairs of all roles.
    pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
        StemRole::ALL.into_iter().flat_map(move |role| self.stems(role))
    }

    pub fn num_pairs(&self) -> usize {
        self.stems.iter().map(|s| s.core.len() + s.non_core.len()).sum()
    }

    /// The first core pair of every role.
    pub fn core_stems(&self) -> Result<CoreStems, StructureError> {
        let first = |role: StemRole| {
            self.core(role).first().copied().ok_or(StructureError::NoCore { role })
        };
        Ok(CoreStems {
            pairs: [
                first(StemRole::Left)?,
                first(StemRole::Middle1)?,
                first(StemRole::Middle2)?,
                first(StemRole::Right)?,
            ],
        })
    }
}

/// One core stem per role: the pseudoknot core of a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreStems {
    pairs: [Pair; 4],
}

impl CoreStems {
    pub fn pair(&self, role: StemRole) -> Pair {
        self.pairs[role.index()]
    }

    /// Opening positions in role order, followed by the closing positions
    /// in role order.
    pub fn indices(&self) -> [NAIDX; 8] {
        let mut idx = [0; 8];
        for (k, pair) in self.pairs.iter().enumerate() {
            idx[k] = pair.i();
            idx[k + 4] = pair.j();
        }
        idx
    }
}

impl fmt::Display for CoreStems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for role in StemRole::ALL {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", role, self.pair(role))?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BracketFamily;
    use crate::testutils::random_notation;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Four-stem pseudoknot core followed by one nested right stem.
    const KNOT: &str = "([<){}<]>>";

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_nested_hairpin() {
        init();
        let pr = parse("((..))").unwrap();
        assert_eq!(pr.length(), 6);
        assert_eq!(pr.non_core(StemRole::Left), &[Pair::new(1, 4), Pair::new(0, 5)]);
        assert!(pr.core(StemRole::Left).is_empty());
        assert_eq!(pr.num_pairs(), 2);
        for role in [StemRole::Middle1, StemRole::Middle2, StemRole::Right] {
            assert_eq!(pr.stems(role).count(), 0);
        }
    }

    #[test]
    fn test_minimal_crossing() {
        init();
        let pr = ParseResult::try_from("([)]").unwrap();
        assert_eq!(pr.non_core(StemRole::Left), &[Pair::new(0, 2)]);
        assert_eq!(pr.non_core(StemRole::Middle2), &[Pair::new(1, 3)]);
        assert_eq!(pr.core_stems(), Err(StructureError::NoCore { role: StemRole::Left }));
    }

    #[test]
    fn test_four_stem_core() {
        init();
        let pr = parse(KNOT).unwrap();
        assert_eq!(pr.core(StemRole::Left), &[Pair::new(0, 3)]);
        assert_eq!(pr.core(StemRole::Middle1), &[Pair::new(4, 5)]);
        assert_eq!(pr.core(StemRole::Middle2), &[Pair::new(1, 7)]);
        assert_eq!(pr.core(StemRole::Right), &[Pair::new(6, 8)]);
        assert_eq!(pr.non_core(StemRole::Right), &[Pair::new(2, 9)]);
        assert_eq!(pr.num_pairs(), 5);

        let cs = pr.core_stems().unwrap();
        assert_eq!(cs.indices(), [0, 4, 1, 6, 3, 5, 7, 8]);
        assert_eq!(format!("{cs}"), "left:(0,3) middle_1:(4,5) middle_2:(1,7) right:(6,8)");
    }

    #[test]
    fn test_core_independent_of_symbols() {
        // Same structure as KNOT, with curly brackets playing the LEFT role.
        let pr = parse("{<(}[](>))").unwrap();
        assert_eq!(pr.roles().family(StemRole::Left), BracketFamily::Curly);
        let cs = pr.core_stems().unwrap();
        assert_eq!(cs.indices(), parse(KNOT).unwrap().core_stems().unwrap().indices());
    }

    #[test]
    fn test_second_core_cycle() {
        let twice = format!("{KNOT}{KNOT}");
        let pr = parse(&twice).unwrap();
        assert_eq!(pr.core(StemRole::Left), &[Pair::new(0, 3), Pair::new(10, 13)]);
        assert_eq!(pr.core(StemRole::Right), &[Pair::new(6, 8), Pair::new(16, 18)]);
        assert_eq!(pr.core_stems().unwrap().pair(StemRole::Middle2), Pair::new(1, 7));
    }

    #[test]
    fn test_incomplete_core() {
        // The cycle stops after the middle_1 core stem.
        let pr = parse("([<){}>]").unwrap();
        assert_eq!(pr.core(StemRole::Left), &[Pair::new(0, 3)]);
        assert_eq!(pr.core(StemRole::Middle1), &[Pair::new(4, 5)]);
        assert!(pr.core(StemRole::Middle2).is_empty());
        assert_eq!(pr.core_stems(), Err(StructureError::NoCore { role: StemRole::Middle2 }));
    }

    #[test]
    fn test_filler_characters() {
        let pr = parse("xx(AU)..-").unwrap();
        assert_eq!(pr.length(), 9);
        assert_eq!(pr.pairs().collect::<Vec<_>>(), vec![Pair::new(2, 5)]);
    }

    #[test]
    fn test_errors() {
        init();
        assert_eq!(
            parse("..."),
            Err(StructureError::NoStemSymbols("...".to_string()))
        );
        assert_eq!(
            parse(")("),
            Err(StructureError::UnbalancedStems(Imbalance::UnmatchedClose {
                role: StemRole::Left,
                position: 0
            }))
        );
        assert_eq!(
            parse("((.)"),
            Err(StructureError::UnbalancedStems(Imbalance::UnclosedOpen {
                role: StemRole::Left,
                positions: vec![0]
            }))
        );
        // Closing a different family does not close an open bracket.
        assert!(matches!(
            parse("(.]"),
            Err(StructureError::UnbalancedStems(Imbalance::UnmatchedClose { position: 2, .. }))
        ));
        let long = ".".repeat(NAIDX::MAX as usize + 1);
        assert_eq!(
            parse(&long),
            Err(StructureError::SequenceTooLong { length: NAIDX::MAX as usize + 1 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = parse(")(").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unbalanced stems: unmatched left closing bracket at position 0"
        );
        assert_eq!(parse("..").unwrap_err().to_string(), "'..' has no stem symbols");
    }

    #[test]
    fn test_pairs_partition_bracket_positions() {
        init();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let len = rng.random_range(1..60);
            let notation = random_notation(&mut rng, len);
            let chars: Vec<char> = notation.chars().collect();
            let brackets: Vec<usize> = (0..chars.len())
                .filter(|&k| BracketFamily::from_symbol(chars[k]).is_some())
                .collect();
            if brackets.is_empty() {
                continue;
            }

            let pr = parse(&notation).unwrap();
            let mut seen = vec![false; chars.len()];
            for role in StemRole::ALL {
                let family = pr.roles().family(role);
                for pair in pr.stems(role) {
                    let (i, j) = (pair.i() as usize, pair.j() as usize);
                    assert!(i < j);
                    assert_eq!(chars[i], family.open());
                    assert_eq!(chars[j], family.close());
                    assert!(!seen[i] && !seen[j]);
                    seen[i] = true;
                    seen[j] = true;
                }
            }
            let paired: Vec<usize> = (0..chars.len()).filter(|&k| seen[k]).collect();
            assert_eq!(paired, brackets, "{notation}");
        }
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NotationParser<'_>>();
        assert_send_sync::<ParseResult>();
        assert_send_sync::<StructureError>();

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| parse(KNOT).map(|pr| pr.num_pairs())))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), Ok(5));
        }
    }

    #[test]
    fn test_parser_roles() {
        let parser = NotationParser::new("..[..]").unwrap();
        assert_eq!(parser.roles().family(StemRole::Left), BracketFamily::Square);
        let pr = parser.parse().unwrap();
        assert_eq!(pr.core_stems(), Err(StructureError::NoCore { role: StemRole::Left }));
    }
}
