//! Display functions for game state and command results

use super::formatters::{feedback_row, keyboard_rows, known_letters_summary};
use crate::commands::CheckResult;
use crate::core::{KnownLetters, WORD_LENGTH};
use crate::game::{GameSnapshot, Phase, RowSignal, SubmitOutcome};
use colored::Colorize;

/// Print submitted rows, the row being typed, and remaining empty rows
pub fn print_board(snapshot: &GameSnapshot<'_>) {
    println!();
    for record in snapshot.history {
        println!("  {}", feedback_row(&record.word, &record.feedback));
    }

    let mut rows_left = snapshot.max_guesses.saturating_sub(snapshot.history.len());
    if snapshot.phase == Phase::Active && rows_left > 0 {
        let typed: String = snapshot
            .buffer
            .chars()
            .map(|c| format!(" {c} "))
            .collect();
        let blanks = " _ ".repeat(WORD_LENGTH - snapshot.buffer.len());
        let row = format!("{typed}{blanks}");
        match snapshot.row_signal {
            Some(RowSignal::Rejected | RowSignal::Unverified) => println!("  {}", row.red()),
            _ => println!("  {row}"),
        }
        rows_left -= 1;
    }

    for _ in 0..rows_left {
        println!("  {}", " · ".repeat(WORD_LENGTH).bright_black());
    }
    println!();
}

/// Print the hint keyboard
pub fn print_keyboard(known: &KnownLetters) {
    for row in keyboard_rows(known) {
        println!("  {row}");
    }
    println!();
}

/// Print a one-line message describing a submit outcome
pub fn print_outcome(outcome: SubmitOutcome, snapshot: &GameSnapshot<'_>) {
    match outcome {
        SubmitOutcome::Ignored => println!(
            "{}",
            format!("Type all {WORD_LENGTH} letters before submitting").yellow()
        ),
        SubmitOutcome::Stale => {}
        SubmitOutcome::Rejected => println!("{}", "Not in word list".red().bold()),
        SubmitOutcome::Unverified => println!(
            "{}",
            "Could not reach the dictionary - try again".red().bold()
        ),
        SubmitOutcome::Accepted { phase, .. } => match phase {
            Phase::Won => println!(
                "{}",
                format!("🎉 Solved in {} guesses!", snapshot.history.len())
                    .green()
                    .bold()
            ),
            Phase::Lost => {
                let answer = snapshot.target.map_or_else(String::new, |w| w.to_string());
                println!(
                    "{} {}",
                    "❌ Out of guesses. The word was".red().bold(),
                    answer.bright_yellow().bold()
                );
            }
            Phase::Active => println!(
                "Guess {} of {}",
                snapshot.attempt, snapshot.max_guesses
            ),
        },
    }
}

/// Print the result of the check command
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", feedback_row(&result.guess, &result.feedback));
    println!("  {}  {}\n", result.feedback.to_emoji(), result.feedback);

    println!("Known letters: {}", known_letters_summary(&result.known));
    print_keyboard(&result.known);

    if result.feedback.is_solved() {
        println!("{}", "✅ Exact match".green().bold());
    }
}
