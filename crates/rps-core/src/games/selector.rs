//! Uniform random move selection.

use super::moveset::{MoveIndex, MoveSet};
use super::traits::MoveSelector;
use crate::error::CryptoUnavailable;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

/// Picks each move with equal probability
///
/// The generator is created once and reused for every round.
#[derive(Debug)]
pub struct UniformSelector<R = StdRng> {
    rng: R,
}

impl UniformSelector<StdRng> {
    /// Seed a fresh generator from the operating system
    pub fn from_entropy() -> Result<Self, CryptoUnavailable> {
        let rng = StdRng::from_rng(OsRng)?;
        Ok(Self { rng })
    }

    /// Deterministic selector, for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> UniformSelector<R> {
    /// Use the given generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSelector for UniformSelector<R> {
    fn select(&mut self, moves: &MoveSet) -> MoveIndex {
        MoveIndex::new(self.rng.gen_range(0..moves.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> MoveSet {
        MoveSet::validate((0..n).map(|i| format!("m{}", i))).unwrap()
    }

    #[test]
    fn test_uniform_including_last() {
        let moves = numbered(5);
        let mut selector = UniformSelector::seeded(7);
        let trials = 60_000;
        let mut counts = [0usize; 5];

        for _ in 0..trials {
            counts[selector.select(&moves).get()] += 1;
        }

        let expected = trials / moves.len();
        for (index, count) in counts.iter().enumerate() {
            let diff = count.abs_diff(expected);
            assert!(
                diff < expected / 20,
                "index {} drawn {} times, expected about {}",
                index,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_last_index_reachable_for_small_set() {
        let moves = numbered(3);
        let mut selector = UniformSelector::seeded(1);
        assert!((0..1_000).any(|_| selector.select(&moves).get() == 2));
    }

    #[test]
    fn test_consecutive_draws_not_stuck() {
        let moves = numbered(3);
        let mut selector = UniformSelector::seeded(42);
        let draws: Vec<usize> = (0..300).map(|_| selector.select(&moves).get()).collect();
        let repeats = draws.windows(2).filter(|w| w[0] == w[1]).count();
        // Independent draws repeat about a third of the time
        assert!(repeats > 60 && repeats < 140, "repeats = {}", repeats);
    }

    #[test]
    fn test_from_entropy() {
        let moves = numbered(3);
        let mut selector = UniformSelector::from_entropy().unwrap();
        assert!(selector.select(&moves).get() < 3);
    }
}
