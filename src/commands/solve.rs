//! Self-play command
//!
//! Plays a game against a known secret by always taking the suggested guess.

use crate::core::{Code, Universe};
use crate::solver::{Session, SessionConfig, TurnResult};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_turns: 10,
        }
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub turns: Vec<TurnResult>,
    pub secret: String,
    pub initial_entropy: f64,
}

/// Solve a specific secret by following the suggester
///
/// # Errors
///
/// Returns an error if the secret is not 4 distinct digits.
pub fn solve_secret(
    config: &SolveConfig,
    session_config: SessionConfig,
) -> Result<SolveResult, String> {
    let secret = Code::parse(&config.secret).map_err(|e| format!("Invalid secret: {e}"))?;

    let universe = Universe::generate();
    let mut session = Session::with_secret(&universe, secret, session_config);
    let turns = play_out(&mut session, config.max_turns);

    Ok(SolveResult {
        success: turns.last().is_some_and(TurnResult::is_win),
        turns,
        secret: secret.to_string(),
        initial_entropy: session.initial_entropy(),
    })
}

/// Play suggested guesses until the session is won or `max_turns` is reached
///
/// Each turn's result carries the next suggestion, so the suggester runs once
/// per turn.
pub fn play_out(session: &mut Session, max_turns: usize) -> Vec<TurnResult> {
    let mut turns = Vec::new();
    let mut next = session.suggestion();

    while let Some(guess) = next {
        if turns.len() >= max_turns {
            break;
        }
        let Ok(result) = session.submit_code(guess) else {
            break;
        };
        next = result.suggestion;
        turns.push(result);
    }

    turns
}
