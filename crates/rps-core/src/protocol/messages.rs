//! Round receipts.

use crate::crypto::{verify, CommitmentDigest, HmacKey};
use crate::protocol::{Outcome, RoundId};
use serde::{Deserialize, Serialize};

/// Self-contained evidence of a finished round
///
/// Anyone holding a receipt can recompute `HMAC-SHA256(key, computer_move)`
/// and compare it with `digest`, the value shown before the human chose.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReceipt {
    pub round_id: RoundId,
    pub moves: Vec<String>,
    pub human_move: String,
    pub computer_move: String,
    /// Human is the first player
    pub outcome: Outcome,
    pub digest: CommitmentDigest,
    pub key: HmacKey,
}

impl RoundReceipt {
    /// Check the revealed key and move against the published digest
    pub fn verify(&self) -> bool {
        self.moves.contains(&self.computer_move)
            && verify(&self.digest, &self.key, &self.computer_move)
    }
}
