//! Cryptographic primitives for the commit-reveal scheme.
//!
//! The computer commits to its move by publishing
//! `HMAC-SHA256(key, move name)` before the human chooses. The key is
//! revealed afterwards so anyone can recompute the digest.

mod commitment;

pub use commitment::{verify, Commitment, CommitmentDigest, HmacKey, Reveal, KEY_LEN};
