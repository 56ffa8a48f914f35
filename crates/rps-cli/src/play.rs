//! Interactive game loop.

use crate::table;
use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::Input;
use rps_core::{CommitmentDigest, MoveSelector, MoveSet, Player, Session, Verdict};
use tracing::{debug, info};

const EXIT: &str = "0";
const HELP: &str = "?";

fn print_menu(digest: &CommitmentDigest, moves: &MoveSet) {
    println!("{}", "Rock-paper-scissors".green().bold());
    println!();
    println!("{} {}", "HMAC:".magenta(), digest.to_string().magenta());
    println!("{}", "Available moves:".yellow());
    for (index, name) in moves.iter() {
        println!("{}", format!("{} - {}", index.get() + 1, name).blue());
    }
    println!("{}", format!("{} - exit", EXIT).red());
    println!("{}", format!("{} - help", HELP).yellow());
}

fn print_verdict(verdict: &Verdict, moves: &MoveSet) {
    let computer_move = moves.name(verdict.computer_move);

    println!("Your move: {}", moves.name(verdict.human_move).green());
    println!("Computer move: {}", computer_move.cyan());
    match verdict.winner() {
        Some(Player::Human) => println!("{}", "You win!".green().bold()),
        Some(Player::Computer) => println!("{}", "You lose!".red().bold()),
        None => println!("{}", "Draw!".yellow().bold()),
    }
    println!("{} {}", "HMAC key:".magenta(), verdict.key.to_string().magenta());
    println!(
        "{}",
        format!(
            "Check it: rps verify --digest {} --key {} --move {:?}",
            verdict.digest, verdict.key, computer_move
        )
        .dimmed()
    );
}

/// Play rounds until the player enters `0`
pub fn run<S: MoveSelector>(mut session: Session<S>, json: bool) -> Result<()> {
    loop {
        let digest = session
            .begin_round()
            .context("cannot commit to a move without secure randomness")?;
        print_menu(&digest, session.moves());

        let verdict = loop {
            let input: String = Input::new()
                .with_prompt("Enter your move")
                .allow_empty(true)
                .interact_text()?;

            match input.trim() {
                EXIT => {
                    info!("Player left; round abandoned without reveal");
                    return Ok(());
                }
                HELP => {
                    table::print(&session.table());
                    continue;
                }
                _ => {}
            }

            match session.judge_choice(&input) {
                Ok(verdict) => break verdict,
                Err(err) => {
                    debug!("Rejected input {:?}: {}", input, err);
                    println!("{}", err.to_string().red());
                }
            }
        };

        print_verdict(&verdict, session.moves());
        if json {
            let receipt = verdict.receipt(session.moves());
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
        println!();
    }
}
