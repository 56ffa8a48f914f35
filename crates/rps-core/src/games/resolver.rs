//! Cyclic winner resolution.

use super::moveset::{MoveIndex, MoveSet};
use crate::protocol::Outcome;

/// Decide a game between `first` and `second`
///
/// Moves sit on a circle in declared order. Each move beats the `k = (N - 1) / 2`
/// moves before it and loses to the `k` moves after it, so
/// `d = (first - second) mod N` settles the game: `1..=k` means `first` wins,
/// anything above `k` means `second` wins.
///
/// Both indices must come from `moves`. An index from a larger set is out of
/// range here and panics; check foreign indices with [`MoveSet::index`] first.
pub fn resolve(moves: &MoveSet, first: MoveIndex, second: MoveIndex) -> Outcome {
    if first == second {
        return Outcome::Draw;
    }

    let n = moves.len();
    debug_assert!(first.get() < n && second.get() < n);
    let d = (first.get() + n - second.get()) % n;

    if d <= moves.half() {
        Outcome::FirstWins
    } else {
        Outcome::SecondWins
    }
}

/// Full N x N outcome matrix for a move set
///
/// Rows are the computer's move, columns the human's move, and each cell is
/// the outcome from the human's side.
#[derive(Clone, Debug)]
pub struct OutcomeTable {
    moves: MoveSet,
    cells: Vec<Vec<Outcome>>,
}

impl OutcomeTable {
    /// Build the table by resolving every ordered pair
    pub fn new(moves: &MoveSet) -> Self {
        let cells = moves
            .iter()
            .map(|(computer, _)| {
                moves
                    .iter()
                    .map(|(human, _)| resolve(moves, human, computer))
                    .collect()
            })
            .collect();

        Self {
            moves: moves.clone(),
            cells,
        }
    }

    /// The move set the table was built from
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Outcome for the human when the computer plays `computer`
    pub fn get(&self, computer: MoveIndex, human: MoveIndex) -> Outcome {
        self.cells[computer.get()][human.get()]
    }

    /// Rows in declared order: computer move name plus one outcome per human move
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> + '_ {
        self.moves
            .iter()
            .zip(&self.cells)
            .map(|((_, name), row)| (name, row.as_slice()))
    }
}
