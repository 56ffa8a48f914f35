//! Game traits.

use super::moveset::{MoveIndex, MoveSet};

/// Source of the computer's secret move
///
/// Implementations must be able to return every index in the set. The
/// default is [`super::UniformSelector`]; tests plug in fixed or seeded
/// selectors.
pub trait MoveSelector {
    /// Pick a move from `moves`
    fn select(&mut self, moves: &MoveSet) -> MoveIndex;
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select(&mut self, moves: &MoveSet) -> MoveIndex {
        (**self).select(moves)
    }
}
