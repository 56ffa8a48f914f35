//! Help table: outcome of every pairing.

use colored::Colorize;
use rps_core::{Outcome, OutcomeTable};

const CORNER: &str = "v PC / User >";

fn label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::FirstWins => "Win",
        Outcome::SecondWins => "Lose",
        Outcome::Draw => "Draw",
    }
}

fn rule(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Render the table as plain text; colors are applied by [`print`]
fn cells(table: &OutcomeTable) -> (Vec<String>, Vec<(String, Vec<Outcome>)>) {
    let mut header = vec![CORNER.to_string()];
    header.extend(table.moves().names().iter().cloned());

    let rows = table
        .rows()
        .map(|(name, row)| (name.to_string(), row.to_vec()))
        .collect();

    (header, rows)
}

/// Column widths; the first column also has to fit every row label
fn widths(header: &[String], rows: &[(String, Vec<Outcome>)]) -> Vec<usize> {
    let mut widths: Vec<usize> = header
        .iter()
        .map(|h| h.chars().count().max(label(Outcome::SecondWins).len()))
        .collect();
    for (name, _) in rows {
        widths[0] = widths[0].max(name.chars().count());
    }
    widths
}

/// Print the outcome of every pairing, from the player's side
pub fn print(table: &OutcomeTable) {
    let (header, rows) = cells(table);
    let widths = widths(&header, &rows);
    let rule = rule(&widths);

    println!("{}", "Results from the user's point of view:".yellow());
    println!("{}", rule);
    let mut line = String::from("|");
    for (text, width) in header.iter().zip(&widths) {
        line.push_str(&format!(" {} |", format!("{:<w$}", text, w = width).bold()));
    }
    println!("{}", line);
    println!("{}", rule);

    for (name, outcomes) in rows {
        let mut line = format!("| {} |", format!("{:<w$}", name, w = widths[0]).bold());
        for (outcome, width) in outcomes.iter().zip(&widths[1..]) {
            let text = format!("{:<w$}", label(*outcome), w = width);
            let text = match outcome {
                Outcome::FirstWins => text.green(),
                Outcome::SecondWins => text.red(),
                Outcome::Draw => text.yellow(),
            };
            line.push_str(&format!(" {} |", text));
        }
        println!("{}", line);
    }
    println!("{}", rule);
}
