//! Rock-Paper-Scissors CLI
//!
//! Plays an N-move rock-paper-scissors variant against the computer. The
//! computer's move is committed with HMAC-SHA256 before the player chooses,
//! and the key is shown afterwards so the round can be checked.

mod play;
mod table;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rps_core::{verify, CommitmentDigest, HmacKey, MoveSet, Session};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "rps", version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Moves in cyclic order; shorthand for `rps play <MOVES>...`.
    /// If the first move is named `play`, `table` or `verify`, use
    /// `rps play <MOVES>...` instead.
    moves: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively against the computer
    Play {
        /// Moves in cyclic order (an odd number, at least 3, no repeats)
        #[arg(required = true)]
        moves: Vec<String>,

        /// Also print each round's receipt as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print who wins every pairing and exit
    Table {
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Check a revealed key and move against a published HMAC
    Verify {
        /// HMAC shown before the move was made (hex)
        #[arg(long)]
        digest: String,

        /// HMAC key shown after the round (hex)
        #[arg(long)]
        key: String,

        /// Move the computer claims to have played
        #[arg(long = "move")]
        claimed_move: String,
    },
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")
}

fn move_set(moves: Vec<String>) -> Result<MoveSet> {
    MoveSet::validate(moves).context("invalid move list (example: rps rock paper scissors)")
}

fn run_verify(digest: &str, key: &str, claimed_move: &str) -> Result<()> {
    let digest: CommitmentDigest = digest.parse().context("invalid --digest")?;
    let key: HmacKey = key.parse().context("invalid --key")?;

    if verify(&digest, &key, claimed_move) {
        println!("{}", "valid".green().bold());
        Ok(())
    } else {
        println!("{}", "INVALID".red().bold());
        bail!("HMAC of {:?} under this key does not match the digest", claimed_move)
    }
}

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let (moves, json) = match cli.command {
        Some(Command::Play { moves, json }) => (moves, json),
        Some(Command::Table { moves }) => {
            let moves = move_set(moves)?;
            table::print(&rps_core::OutcomeTable::new(&moves));
            return Ok(());
        }
        Some(Command::Verify {
            digest,
            key,
            claimed_move,
        }) => return run_verify(&digest, &key, &claimed_move),
        None => (cli.moves, false),
    };

    let moves = move_set(moves)?;
    info!("Starting session with {} moves: {}", moves.len(), moves);

    let selector = rps_core::UniformSelector::from_entropy()
        .context("cannot seed the move generator")?;
    play::run(Session::with_selector(moves, selector), json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_moves_mean_play() {
        let cli = Cli::try_parse_from(["rps", "rock", "paper", "scissors"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.moves, vec!["rock", "paper", "scissors"]);
    }

    #[test]
    fn test_play_subcommand() {
        let cli = Cli::try_parse_from(["rps", "play", "--json", "a", "b", "c"]).unwrap();
        match cli.command {
            Some(Command::Play { moves, json }) => {
                assert!(json);
                assert_eq!(moves, vec!["a", "b", "c"]);
            }
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn test_move_named_like_subcommand() {
        // Bare form: the first word is taken as the subcommand
        let cli = Cli::try_parse_from(["rps", "table", "chair", "lamp"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Table { .. })));

        // Explicit play keeps it as a move
        let cli = Cli::try_parse_from(["rps", "play", "table", "chair", "lamp"]).unwrap();
        match cli.command {
            Some(Command::Play { moves, .. }) => {
                assert_eq!(moves, vec!["table", "chair", "lamp"]);
            }
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn test_bad_move_list() {
        let err = move_set(vec!["rock".into(), "rock".into(), "paper".into()]).unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate move: rock"));
    }

    #[test]
    fn test_run_verify() {
        let key = HmacKey::from_bytes([9; 32]);
        let digest = CommitmentDigest::compute(&key, "paper");

        assert!(run_verify(&digest.to_string(), &key.to_string(), "paper").is_ok());
        assert!(run_verify(&digest.to_string(), &key.to_string(), "rock").is_err());
        assert!(run_verify("not hex", &key.to_string(), "paper").is_err());
    }
}
