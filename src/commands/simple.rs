//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use crate::core::Universe;
use crate::output::formatters::feedback_pegs;
use crate::output::{print_suggestion, print_turn_result};
use crate::solver::{Session, SessionConfig, SessionState};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// One line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Quit,
    Guess(String),
}

impl PlayerInput {
    /// Classify a trimmed input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line {
            "quit" | "exit" => Self::Quit,
            other => Self::Guess(other.to_string()),
        }
    }
}

/// Interpret the answer to the hint prompt
#[must_use]
pub fn wants_hints(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Start a session, seeded if a seed was given
#[must_use]
pub fn new_session(config: SessionConfig, seed: Option<u64>) -> Session {
    let universe = Universe::generate();
    match seed {
        Some(seed) => Session::with_rng(&universe, config, &mut StdRng::seed_from_u64(seed)),
        None => Session::with_rng(&universe, config, &mut rand::rng()),
    }
}

/// Run the simple interactive CLI mode
///
/// If `hints` is `None` the player is asked whether to show suggestions.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(
    config: SessionConfig,
    seed: Option<u64>,
    hints: Option<bool>,
) -> Result<(), String> {
    let title = "Welcome to Bulls and Cows with Information Theory!";
    println!("===========================================================");
    println!("{}", title.bold());
    println!("Guess the 4-digit number. Each digit must be unique.");
    println!("===========================================================");

    let show_suggestions = match hints {
        Some(choice) => choice,
        None => get_user_input("\nWant to get suggestions (hints)? (y/n)")?
            .as_deref()
            .is_some_and(wants_hints),
    };

    let mut session = new_session(config.with_suggestions(show_suggestions), seed);

    println!(
        "\nInitial possibilities: {}",
        session.remaining_candidates().len()
    );
    println!("Initial entropy: {:.2} bits", session.initial_entropy());

    while session.state() == SessionState::Active {
        let Some(line) =
            get_user_input("\nEnter your guess (4 unique digits, 'exit' or 'quit' to exit)")?
        else {
            // End of input counts as quitting
            println!();
            reveal(&mut session);
            break;
        };

        let guess = match PlayerInput::parse(&line) {
            PlayerInput::Quit => {
                reveal(&mut session);
                break;
            }
            PlayerInput::Guess(guess) => guess,
        };

        let result = match session.submit_guess(&guess) {
            Ok(result) => result,
            Err(e) => {
                println!("{} {e}", "❌".red());
                continue;
            }
        };

        print_turn_result(&result);

        if session.show_suggestions()
            && let Some(suggestion) = result.suggestion
        {
            print_suggestion(suggestion, session.remaining_candidates());
        }

        if result.is_win() {
            print_victory(&session);
        }
    }

    Ok(())
}

fn reveal(session: &mut Session) {
    let secret = session.quit();
    println!(
        "The secret number: {}",
        secret.to_string().bright_yellow().bold()
    );
}

fn print_victory(session: &Session) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    let banner = "    🎉 Congratulations! You win! 🎉";
    println!("{}", banner.bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    let turns = session.turns();
    println!(
        "\n  Solved in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, record) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.guess.to_string().bright_white().bold(),
            feedback_pegs(record.feedback)
        );
    }
    println!();
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_commands() {
        assert_eq!(PlayerInput::parse("quit"), PlayerInput::Quit);
        assert_eq!(PlayerInput::parse("exit"), PlayerInput::Quit);
    }

    #[test]
    fn parse_guess_passes_text_through() {
        assert_eq!(
            PlayerInput::parse("1234"),
            PlayerInput::Guess("1234".to_string())
        );
        // Validation is the session's job
        assert_eq!(
            PlayerInput::parse("12a4"),
            PlayerInput::Guess("12a4".to_string())
        );
    }

    #[test]
    fn hint_preference() {
        assert!(wants_hints("y"));
        assert!(wants_hints("Y"));
        assert!(wants_hints(" yes "));
        assert!(!wants_hints("n"));
        assert!(!wants_hints(""));
        assert!(!wants_hints("maybe"));
    }

    #[test]
    fn seeded_sessions_share_secret() {
        let config = SessionConfig::default();
        let a = new_session(config, Some(99));
        let b = new_session(config, Some(99));

        assert_eq!(a.secret(), b.secret());
        assert_eq!(a.state(), SessionState::Active);
    }

    #[test]
    fn hint_preference_is_echoed() {
        let session = new_session(SessionConfig::default().with_suggestions(true), Some(1));
        assert!(session.show_suggestions());
    }
}
