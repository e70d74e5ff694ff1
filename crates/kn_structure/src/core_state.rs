//! Detection of the four core stems of a pseudoknot.
//!
//! While the parser scans a notation string, every bracket event is fed into
//! a `CoreState`. Opening brackets advance the machine towards a core cycle,
//! closing brackets are marked core only if they arrive in the exact state
//! that expects them:
//!
//! ```text
//!  None            --open  Middle1/2--> FirstLeftCore
//!  FirstLeftCore   --open  Right------> SecondLeftCore
//!  SecondLeftCore  --close Left-------> FirstMidCore     (core)
//!  FirstMidCore    --close Middle1----> SecondMidCore    (core)
//!  SecondMidCore   --open  Right------> FirstRightCore
//!  FirstRightCore  --close Middle2----> SecondRightCore  (core)
//!  SecondRightCore --close Right------> None             (core)
//! ```
//!
//! Every other event leaves the state unchanged, and such closes are not core.

use crate::StemRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoreState {
    #[default]
    None,
    FirstLeftCore,
    SecondLeftCore,
    FirstMidCore,
    SecondMidCore,
    FirstRightCore,
    SecondRightCore,
}

impl CoreState {
    /// Advance on an opening bracket of `role`.
    pub fn on_open(&mut self, role: StemRole) {
        use CoreState::*;
        let next = match (*self, role) {
            (None, StemRole::Middle1 | StemRole::Middle2) => FirstLeftCore,
            (FirstLeftCore, StemRole::Right) => SecondLeftCore,
            (SecondMidCore, StemRole::Right) => FirstRightCore,
            (state, _) => state,
        };
        *self = next;
    }

    /// Advance on a closing bracket of `role`, returns true if the
    /// closed stem is a core stem.
    pub fn on_close(&mut self, role: StemRole) -> bool {
        use CoreState::*;
        let next = match (*self, role) {
            (SecondLeftCore, StemRole::Left) => FirstMidCore,
            (FirstMidCore, StemRole::Middle1) => SecondMidCore,
            (FirstRightCore, StemRole::Middle2) => SecondRightCore,
            (SecondRightCore, StemRole::Right) => None,
            _ => return false,
        };
        *self = next;
        true
    }
}
