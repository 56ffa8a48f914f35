//! HMAC key and digest for the commit-reveal scheme.

use crate::error::{CryptoUnavailable, HexError};
use crate::games::{MoveIndex, MoveSet};
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Length of keys and digests in bytes
pub const KEY_LEN: usize = 32;

/// HMAC-SHA256 over `message`
fn keyed_hash(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

fn decode_32(s: &str) -> Result<[u8; 32], HexError> {
    let bytes = hex::decode(s.trim())?;
    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| HexError::WrongLength {
        expected: KEY_LEN,
        got: bytes.len(),
    })
}

mod hex32 {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::decode_32(&hex_str).map_err(serde::de::Error::custom)
    }
}

/// Secret HMAC key, withheld until the round is judged
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmacKey(#[serde(with = "hex32")] [u8; KEY_LEN]);

impl HmacKey {
    /// Draw a fresh key from the operating system's CSPRNG
    ///
    /// There is no fallback: if the OS cannot provide entropy the round
    /// cannot be played fairly.
    pub fn random() -> Result<Self, CryptoUnavailable> {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HmacKey(..)")
    }
}

impl fmt::Display for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for HmacKey {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_32(s).map(Self)
    }
}

/// Published digest = HMAC-SHA256(key, move name)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitmentDigest(#[serde(with = "hex32")] [u8; 32]);

impl CommitmentDigest {
    /// Compute the digest of `move_name` under `key`
    pub fn compute(key: &HmacKey, move_name: &str) -> Self {
        Self(keyed_hash(key.as_bytes(), move_name.as_bytes()))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check that `key` and `claimed_move` produce this digest
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &HmacKey, claimed_move: &str) -> bool {
        let expected = Self::compute(key, claimed_move);
        self.0[..].ct_eq(&expected.0[..]).into()
    }
}

impl fmt::Debug for CommitmentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentDigest({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for CommitmentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for CommitmentDigest {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_32(s).map(Self)
    }
}

/// Check a revealed key and move against a published digest
pub fn verify(digest: &CommitmentDigest, key: &HmacKey, claimed_move: &str) -> bool {
    digest.verify(key, claimed_move)
}

/// A move fixed in advance behind a keyed hash
///
/// Only the digest is visible until [`Commitment::reveal`] consumes the
/// commitment and hands back the key and the move.
pub struct Commitment {
    key: HmacKey,
    committed_move: MoveIndex,
    digest: CommitmentDigest,
}

/// Key and move disclosed when a commitment is opened
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub key: HmacKey,
    pub committed_move: MoveIndex,
}

impl Commitment {
    /// Commit to `choice` under a fresh random key
    pub fn commit(moves: &MoveSet, choice: MoveIndex) -> Result<Self, CryptoUnavailable> {
        Ok(Self::with_key(HmacKey::random()?, moves, choice))
    }

    /// Commit to `choice` under a caller-supplied key
    pub fn with_key(key: HmacKey, moves: &MoveSet, choice: MoveIndex) -> Self {
        let digest = CommitmentDigest::compute(&key, moves.name(choice));
        Self {
            key,
            committed_move: choice,
            digest,
        }
    }

    /// The digest, safe to publish straight away
    pub fn digest(&self) -> &CommitmentDigest {
        &self.digest
    }

    /// Open the commitment
    pub fn reveal(self) -> Reveal {
        Reveal {
            key: self.key,
            committed_move: self.committed_move,
        }
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commitment")
            .field("digest", &self.digest)
            .finish_non_exhaustive()
    }
}
