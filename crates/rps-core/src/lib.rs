//! Verifiable Rock-Paper-Scissors Core Library
//!
//! This crate provides the move-set validation, cyclic outcome resolution
//! and HMAC commit-reveal scheme for playing an N-move rock-paper-scissors
//! variant against the computer. The computer's move is committed before the
//! human chooses, and the revealed key lets anyone check it afterwards.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{verify, Commitment, CommitmentDigest, HmacKey, Reveal};
pub use error::{ConfigurationError, CryptoUnavailable, HexError, SelectionError, SessionError};
pub use games::{resolve, MoveIndex, MoveSelector, MoveSet, OutcomeTable, UniformSelector};
pub use protocol::{Outcome, Player, RoundId, RoundReceipt, Session, Verdict};
