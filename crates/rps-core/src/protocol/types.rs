//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a game between a first and a second move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl Outcome {
    /// Same game seen from the other side
    pub fn flip(self) -> Outcome {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// Which player won, given who played first
    pub fn winner(self, first: Player) -> Option<Player> {
        match self {
            Outcome::FirstWins => Some(first),
            Outcome::SecondWins => Some(first.opponent()),
            Outcome::Draw => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::FirstWins => "first wins",
            Outcome::SecondWins => "second wins",
            Outcome::Draw => "draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Player identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the opponent
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_id_generation() {
        let id1 = RoundId::new();
        let id2 = RoundId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_round_id_serializes_as_plain_uuid() {
        let id = RoundId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));

        let back: RoundId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_outcome_flip() {
        assert_eq!(Outcome::FirstWins.flip(), Outcome::SecondWins);
        assert_eq!(Outcome::SecondWins.flip(), Outcome::FirstWins);
        assert_eq!(Outcome::Draw.flip(), Outcome::Draw);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::FirstWins.winner(Player::Human), Some(Player::Human));
        assert_eq!(
            Outcome::SecondWins.winner(Player::Human),
            Some(Player::Computer)
        );
        assert_eq!(Outcome::Draw.winner(Player::Computer), None);
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Human.opponent(), Player::Computer);
        assert_eq!(Player::Computer.opponent(), Player::Human);
    }
}
