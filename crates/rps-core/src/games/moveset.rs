//! Validated, ordered move sets.

use crate::error::{ConfigurationError, SelectionError};
use std::collections::HashSet;
use std::fmt;

/// Position of a move within a [`MoveSet`]
///
/// Only a `MoveSet` hands these out, so an index is always in range for the
/// set that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveIndex(usize);

impl MoveIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based position in the move set
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered collection of distinct move names
///
/// The order defines the cyclic "beats" relation: every move beats the
/// `(N - 1) / 2` moves before it (wrapping around) and loses to the same
/// number of moves after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate a list of move names
    ///
    /// The list must hold an odd number of names, at least three, with no
    /// repeats. Input order is preserved.
    pub fn validate<I, S>(names: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < 3 || names.len() % 2 == 0 {
            return Err(ConfigurationError::WrongCount(names.len()));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(ConfigurationError::Duplicate(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Number of moves (always odd, at least 3)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Never true for a validated set
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// How many moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        (self.len() - 1) / 2
    }

    /// Name of the move at `index`
    ///
    /// Panics if `index` came from a larger set; use [`MoveSet::index`] to
    /// re-check an index from elsewhere.
    pub fn name(&self, index: MoveIndex) -> &str {
        &self.names[index.0]
    }

    /// All names in declared order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Check a raw zero-based index against this set
    pub fn index(&self, index: usize) -> Result<MoveIndex, SelectionError> {
        if index < self.len() {
            Ok(MoveIndex(index))
        } else {
            Err(SelectionError::OutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Look up a move by exact name
    pub fn position(&self, name: &str) -> Option<MoveIndex> {
        self.names.iter().position(|n| n == name).map(MoveIndex)
    }

    /// Iterate over `(index, name)` pairs in declared order
    pub fn iter(&self) -> impl Iterator<Item = (MoveIndex, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (MoveIndex(i), name.as_str()))
    }

    /// Interpret a menu choice
    ///
    /// Numbers are 1-based menu entries. Anything that is not a number must
    /// match a move name exactly.
    pub fn parse_choice(&self, input: &str) -> Result<MoveIndex, SelectionError> {
        let input = input.trim();

        if let Ok(number) = input.parse::<usize>() {
            return match number.checked_sub(1) {
                Some(index) if index < self.len() => Ok(MoveIndex(index)),
                _ => Err(SelectionError::OutOfRange {
                    index: number,
                    len: self.len(),
                }),
            };
        }

        self.position(input)
            .ok_or_else(|| SelectionError::Malformed(input.to_string()))
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}
