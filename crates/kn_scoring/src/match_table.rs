//! Position -> partner lookup for a parsed structure.
//!
//! A `MatchTable` holds every pair of a structure in both directions,
//! regardless of stem role and core status. Unpaired positions are absent.

use nohash_hasher::IntMap;

use kn_structure::NAIDX;
use kn_structure::ParseResult;
use kn_structure::parse;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTable {
    partners: IntMap<NAIDX, NAIDX>,
}

impl MatchTable {
    /// The position paired with `i`, if any.
    pub fn partner(&self, i: NAIDX) -> Option<NAIDX> {
        self.partners.get(&i).copied()
    }

    pub fn is_paired(&self, i: NAIDX) -> bool {
        self.partners.contains_key(&i)
    }

    /// Number of paired positions (twice the number of pairs).
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// Iterator over (position, partner) in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (NAIDX, NAIDX)> + '_ {
        self.partners.iter().map(|(&i, &j)| (i, j))
    }

    /// Return all (position, partner) entries sorted by position.
    pub fn to_vec(&self) -> Vec<(NAIDX, NAIDX)> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_unstable();
        v
    }
}

impl From<&ParseResult> for MatchTable {
    fn from(pr: &ParseResult) -> Self {
        let mut partners = IntMap::default();
        for pair in pr.pairs() {
            partners.insert(pair.i(), pair.j());
            partners.insert(pair.j(), pair.i());
        }
        Self { partners }
    }
}

/// Match table of `notation`. Notation that cannot be parsed has no
/// recoverable structure and yields an empty table.
pub fn find_matches(notation: &str) -> MatchTable {
    match parse(notation) {
        Ok(pr) => MatchTable::from(&pr),
        Err(err) => {
            log::debug!("no matches for '{notation}': {err}");
            MatchTable::default()
        }
    }
}
