//! Error types shared across the crate.

use thiserror::Error;

/// Errors from validating the externally supplied move list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Expected an odd number of moves, at least 3 (got {0})")]
    WrongCount(usize),

    #[error("Duplicate move: {0}")]
    Duplicate(String),
}

/// Errors from interpreting the human's move choice
///
/// These are recoverable: the session keeps its pending commitment and the
/// caller may simply ask again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Move {index} is out of range for {len} moves")]
    OutOfRange { index: usize, len: usize },

    #[error("Not a move number or name: {0:?}")]
    Malformed(String),

    #[error("No round in progress")]
    NoRoundInProgress,
}

/// The operating system could not supply cryptographic randomness
#[derive(Debug, Error)]
#[error("Cryptographic randomness unavailable: {0}")]
pub struct CryptoUnavailable(#[from] rand::Error);

/// Errors from starting a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Crypto(#[from] CryptoUnavailable),
}

/// Errors from parsing hex-encoded keys and digests
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexError {
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Expected {expected} bytes, got {got}")]
    WrongLength { expected: usize, got: usize },
}
