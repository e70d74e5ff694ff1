//! Dot-bracket alphabet: bracket families, stem roles and the per-input
//! assignment of roles to families.
//!
//! The four bracket families are not tied to fixed roles. Whichever family
//! shows up first in a notation string plays the LEFT role, and the remaining
//! roles follow the fixed cycle of families:
//!
//! ```text
//! Round -> Curly -> Square -> Angle -> Round
//! ```
//!
//! So `"(...)"` and `"{...}"` are parsed by the same machinery, just with
//! different symbols behind the LEFT role.

use std::fmt;
use serde::Deserialize;
use serde::Serialize;

use crate::StructureError;

/// The character for unpaired positions. Any character that is not a
/// bracket is treated the same way.
pub const FILLER: char = '.';

/// One of the four open/close bracket symbol pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketFamily {
    Round,
    Curly,
    Square,
    Angle,
}

/// Successor of each family in the fixed cycle, indexed by `BracketFamily::index()`.
const SUCCESSOR: [BracketFamily; 4] = [
    BracketFamily::Curly,  // Round
    BracketFamily::Square, // Curly
    BracketFamily::Angle,  // Square
    BracketFamily::Round,  // Angle
];

impl BracketFamily {
    pub const ALL: [BracketFamily; 4] = [
        BracketFamily::Round,
        BracketFamily::Curly,
        BracketFamily::Square,
        BracketFamily::Angle,
    ];

    pub fn index(self) -> usize {
        match self {
            BracketFamily::Round => 0,
            BracketFamily::Curly => 1,
            BracketFamily::Square => 2,
            BracketFamily::Angle => 3,
        }
    }

    pub fn open(self) -> char {
        match self {
            BracketFamily::Round => '(',
            BracketFamily::Curly => '{',
            BracketFamily::Square => '[',
            BracketFamily::Angle => '<',
        }
    }

    pub fn close(self) -> char {
        match self {
            BracketFamily::Round => ')',
            BracketFamily::Curly => '}',
            BracketFamily::Square => ']',
            BracketFamily::Angle => '>',
        }
    }

    /// The next family in the fixed role cycle.
    pub fn successor(self) -> Self {
        SUCCESSOR[self.index()]
    }

    /// Family and side of a bracket character, `None` for filler.
    pub fn from_symbol(c: char) -> Option<(Self, BracketSide)> {
        use BracketFamily::*;
        use BracketSide::*;
        match c {
            '(' => Some((Round, Open)),
            ')' => Some((Round, Close)),
            '{' => Some((Curly, Open)),
            '}' => Some((Curly, Close)),
            '[' => Some((Square, Open)),
            ']' => Some((Square, Close)),
            '<' => Some((Angle, Open)),
            '>' => Some((Angle, Close)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketSide {
    Open,
    Close,
}

/// The four stem roles of a (four-stem) pseudoknot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemRole {
    Left,
    #[serde(rename = "middle_1")]
    Middle1,
    #[serde(rename = "middle_2")]
    Middle2,
    Right,
}

impl StemRole {
    /// All roles, in role order.
    pub const ALL: [StemRole; 4] = [
        StemRole::Left,
        StemRole::Middle1,
        StemRole::Middle2,
        StemRole::Right,
    ];

    /// Position of the role in `StemRole::ALL`, used to index per-role tables.
    pub fn index(self) -> usize {
        match self {
            StemRole::Left => 0,
            StemRole::Middle1 => 1,
            StemRole::Middle2 => 2,
            StemRole::Right => 3,
        }
    }
}

impl fmt::Display for StemRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StemRole::Left => "left",
            StemRole::Middle1 => "middle_1",
            StemRole::Middle2 => "middle_2",
            StemRole::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// Which bracket family plays which stem role for one notation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleAssignment {
    families: [BracketFamily; 4], // role index -> family
    roles: [StemRole; 4],         // family index -> role
}

impl RoleAssignment {
    /// Assign `left` to the LEFT role and walk the family cycle for the rest.
    pub fn from_left(left: BracketFamily) -> Self {
        let mut families = [left; 4];
        let mut roles = [StemRole::Left; 4];
        let mut family = left;
        for role in StemRole::ALL {
            families[role.index()] = family;
            roles[family.index()] = role;
            family = family.successor();
        }
        Self { families, roles }
    }

    /// Derive the assignment from the first bracket (open or close) in `notation`.
    pub fn from_notation(notation: &str) -> Result<Self, StructureError> {
        let left = notation
            .chars()
            .find_map(BracketFamily::from_symbol)
            .map(|(family, _)| family)
            .ok_or_else(|| StructureError::NoStemSymbols(notation.to_string()))?;
        let assignment = Self::from_left(left);
        log::debug!("role assignment for '{notation}': {assignment}");
        Ok(assignment)
    }

    pub fn family(&self, role: StemRole) -> BracketFamily {
        self.families[role.index()]
    }

    pub fn role(&self, family: BracketFamily) -> StemRole {
        self.roles[family.index()]
    }

    pub fn open_symbol(&self, role: StemRole) -> char {
        self.family(role).open()
    }

    pub fn close_symbol(&self, role: StemRole) -> char {
        self.family(role).close()
    }

    /// Role and side of a character, `None` for filler.
    pub fn classify(&self, c: char) -> Option<(StemRole, BracketSide)> {
        BracketFamily::from_symbol(c).map(|(family, side)| (self.role(family), side))
    }
}

impl fmt::Display for RoleAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for role in StemRole::ALL {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}{}", role, self.open_symbol(role), self.close_symbol(role))?;
            first = false;
        }
        Ok(())
    }
}
