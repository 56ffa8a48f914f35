//! A game session: one move set, one selector, at most one open round.

use crate::crypto::{Commitment, CommitmentDigest, HmacKey};
use crate::error::{CryptoUnavailable, SelectionError, SessionError};
use crate::games::{resolve, MoveIndex, MoveSelector, MoveSet, OutcomeTable, UniformSelector};
use crate::protocol::{Outcome, Player, RoundId, RoundReceipt};
use tracing::debug;

/// Round whose commitment is published but not yet opened
#[derive(Debug)]
struct PendingRound {
    id: RoundId,
    commitment: Commitment,
}

/// Everything disclosed once a round is judged
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub round_id: RoundId,
    /// Digest published before the human chose
    pub digest: CommitmentDigest,
    /// Key revealed after the human chose
    pub key: HmacKey,
    pub human_move: MoveIndex,
    pub computer_move: MoveIndex,
    /// Human is the first player
    pub outcome: Outcome,
}

impl Verdict {
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner(Player::Human)
    }

    /// Serializable evidence for this round
    pub fn receipt(&self, moves: &MoveSet) -> RoundReceipt {
        RoundReceipt {
            round_id: self.round_id,
            moves: moves.names().to_vec(),
            human_move: moves.name(self.human_move).to_string(),
            computer_move: moves.name(self.computer_move).to_string(),
            outcome: self.outcome,
            digest: self.digest,
            key: self.key.clone(),
        }
    }
}

/// Game session between a human and the computer
///
/// The computer's move is committed in [`Session::begin_round`] and only
/// revealed by [`Session::judge`].
#[derive(Debug)]
pub struct Session<Sel = UniformSelector> {
    moves: MoveSet,
    selector: Sel,
    pending: Option<PendingRound>,
}

impl Session<UniformSelector> {
    /// Validate `names` and seed a selector from the OS
    pub fn new<I, T>(names: I) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let moves = MoveSet::validate(names)?;
        let selector = UniformSelector::from_entropy()?;
        Ok(Self::with_selector(moves, selector))
    }
}

impl<Sel: MoveSelector> Session<Sel> {
    pub fn with_selector(moves: MoveSet, selector: Sel) -> Self {
        Self {
            moves,
            selector,
            pending: None,
        }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Digest of the open round, if any
    pub fn pending_digest(&self) -> Option<&CommitmentDigest> {
        self.pending.as_ref().map(|round| round.commitment.digest())
    }

    pub fn pending_round(&self) -> Option<RoundId> {
        self.pending.as_ref().map(|round| round.id)
    }

    /// Outcome matrix for the help screen
    pub fn table(&self) -> OutcomeTable {
        OutcomeTable::new(&self.moves)
    }

    /// Pick the computer's move and commit to it
    ///
    /// Returns the digest to publish. An open round is abandoned and its key
    /// stays secret.
    pub fn begin_round(&mut self) -> Result<CommitmentDigest, CryptoUnavailable> {
        if let Some(old) = self.pending.take() {
            debug!("Abandoning round {} without reveal", old.id);
        }

        let choice = self.selector.select(&self.moves);
        let commitment = Commitment::commit(&self.moves, choice)?;
        let digest = *commitment.digest();
        let id = RoundId::new();

        debug!("Round {} committed: {}", id, digest);
        self.pending = Some(PendingRound { id, commitment });

        Ok(digest)
    }

    /// Reveal the computer's move and decide the round
    ///
    /// `user_move` is zero-based. It is checked before the open round is
    /// touched, so a bad index leaves the published digest in place.
    pub fn judge(&mut self, user_move: usize) -> Result<Verdict, SelectionError> {
        let human_move = self.moves.index(user_move)?;
        self.settle(human_move)
    }

    /// Like [`Session::judge`], from a menu number or move name
    pub fn judge_choice(&mut self, input: &str) -> Result<Verdict, SelectionError> {
        let human_move = self.moves.parse_choice(input)?;
        self.settle(human_move)
    }

    fn settle(&mut self, human_move: MoveIndex) -> Result<Verdict, SelectionError> {
        let PendingRound { id, commitment } =
            self.pending.take().ok_or(SelectionError::NoRoundInProgress)?;

        let digest = *commitment.digest();
        let reveal = commitment.reveal();
        let outcome = resolve(&self.moves, human_move, reveal.committed_move);

        debug!(
            "Round {} judged: {} vs {} -> {}",
            id,
            self.moves.name(human_move),
            self.moves.name(reveal.committed_move),
            outcome
        );

        Ok(Verdict {
            round_id: id,
            digest,
            key: reveal.key,
            human_move,
            computer_move: reveal.committed_move,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::verify;

    /// Always plays the same move
    struct Fixed(usize);

    impl MoveSelector for Fixed {
        fn select(&mut self, moves: &MoveSet) -> MoveIndex {
            moves.index(self.0).unwrap()
        }
    }

    fn session(computer: usize) -> Session<Fixed> {
        let moves = MoveSet::validate(["rock", "paper", "scissors"]).unwrap();
        Session::with_selector(moves, Fixed(computer))
    }

    #[test]
    fn test_full_round_human_wins() {
        // Computer plays scissors, human plays rock
        let mut session = session(2);
        let digest = session.begin_round().unwrap();

        let verdict = session.judge(0).unwrap();
        assert_eq!(verdict.outcome, Outcome::FirstWins);
        assert_eq!(verdict.winner(), Some(Player::Human));
        assert_eq!(verdict.digest, digest);
        assert!(verify(&digest, &verdict.key, "scissors"));
        assert!(session.pending_digest().is_none());
    }

    #[test]
    fn test_full_round_computer_wins() {
        // Computer plays paper, human plays rock
        let mut session = session(1);
        session.begin_round().unwrap();

        let verdict = session.judge_choice("rock").unwrap();
        assert_eq!(verdict.outcome, Outcome::SecondWins);
        assert_eq!(verdict.winner(), Some(Player::Computer));
    }

    #[test]
    fn test_draw() {
        let mut session = session(1);
        session.begin_round().unwrap();

        let verdict = session.judge_choice("2").unwrap();
        assert_eq!(verdict.outcome, Outcome::Draw);
        assert_eq!(verdict.winner(), None);
    }

    #[test]
    fn test_bad_input_keeps_commitment() {
        let mut session = session(0);
        let digest = session.begin_round().unwrap();
        let round = session.pending_round();

        assert_eq!(
            session.judge(3),
            Err(SelectionError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            session.judge_choice("lizard"),
            Err(SelectionError::Malformed("lizard".to_string()))
        );
        assert_eq!(session.pending_digest(), Some(&digest));
        assert_eq!(session.pending_round(), round);

        let verdict = session.judge(1).unwrap();
        assert_eq!(verdict.digest, digest);
        assert!(verify(&digest, &verdict.key, "rock"));
    }

    #[test]
    fn test_judge_without_round() {
        let mut session = session(0);
        assert_eq!(session.judge(0), Err(SelectionError::NoRoundInProgress));
    }

    #[test]
    fn test_commitment_is_single_use() {
        let mut session = session(0);
        session.begin_round().unwrap();
        session.judge(0).unwrap();

        assert_eq!(session.judge(0), Err(SelectionError::NoRoundInProgress));
    }

    #[test]
    fn test_new_round_replaces_open_one() {
        let mut session = session(0);
        let first = session.begin_round().unwrap();
        let second = session.begin_round().unwrap();

        assert_ne!(first, second);
        assert_eq!(session.judge(0).unwrap().digest, second);
    }

    #[test]
    fn test_new_validates_moves() {
        assert!(matches!(
            Session::new(["rock", "paper"]),
            Err(SessionError::Configuration(_))
        ));
        assert!(Session::new(["rock", "paper", "scissors"]).is_ok());
    }

    #[test]
    fn test_receipt_from_verdict() {
        let mut session = session(2);
        session.begin_round().unwrap();
        let verdict = session.judge(0).unwrap();

        let receipt = verdict.receipt(session.moves());
        assert_eq!(receipt.human_move, "rock");
        assert_eq!(receipt.computer_move, "scissors");
        assert_eq!(receipt.moves, vec!["rock", "paper", "scissors"]);
        assert!(receipt.verify());
    }
}
