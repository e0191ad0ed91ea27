//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a guess.

use crate::core::Word;
use crate::dictionary::DictionaryValidator;
use crate::game::{GameSession, SubmitOutcome};
use crate::output::{print_board, print_keyboard, print_outcome};
use crate::wordlists::TargetPicker;
use anyhow::{Context, Result};
use std::io::{self, Write};
use tokio::runtime::Handle;

/// What a line of input asks for
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    NewGame,
    Restart,
    Guess(&'a str),
}

fn parse_command(input: &str) -> Command<'_> {
    match input {
        ":quit" | ":q" | ":exit" => Command::Quit,
        ":new" | ":n" => Command::NewGame,
        ":restart" | ":r" => Command::Restart,
        guess => Command::Guess(guess),
    }
}

/// Run the simple interactive CLI mode
///
/// Lookups are driven to completion on `runtime` before the next line is read.
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple(
    session: &mut GameSession,
    validator: &dyn DictionaryValidator,
    targets: &mut TargetPicker,
    runtime: &Handle,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a five-letter guess and press Enter.");
    println!("Commands: ':quit' to exit, ':new' for a new word, ':restart' to replay this one\n");

    print_board(&session.snapshot());

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_command(&input) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                if let Some(target) = targets.next_target() {
                    session.restart_with(target);
                    println!("\n🔄 New game started!");
                }
                print_board(&session.snapshot());
            }
            Command::Restart => {
                session.restart();
                println!("\n🔄 Game restarted!");
                print_board(&session.snapshot());
            }
            Command::Guess(text) => {
                if let Err(err) = Word::new(text) {
                    println!("❌ {err}");
                    continue;
                }

                let outcome = play_line(session, validator, runtime, text);
                let snapshot = session.snapshot();
                if outcome != SubmitOutcome::Ignored {
                    print_board(&snapshot);
                    print_keyboard(snapshot.known);
                }
                print_outcome(outcome, &snapshot);

                if snapshot.phase.is_over() && !play_again(session, targets)? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Replace the buffer with `text` and submit it
fn play_line(
    session: &mut GameSession,
    validator: &dyn DictionaryValidator,
    runtime: &Handle,
    text: &str,
) -> SubmitOutcome {
    while session.remove_letter() {}
    for letter in text.chars() {
        session.add_letter(letter);
    }
    runtime.block_on(session.submit_guess(validator))
}

fn play_again(session: &mut GameSession, targets: &mut TargetPicker) -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
    if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
        return Ok(false);
    }

    match targets.next_target() {
        Some(target) => session.restart_with(target),
        None => session.restart(),
    }
    println!("\n🔄 New game started!");
    print_board(&session.snapshot());
    Ok(true)
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
