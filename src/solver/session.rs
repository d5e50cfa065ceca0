//! Game session
//!
//! A session owns the secret, the shrinking candidate set, and the guess
//! history, and answers one guess per turn.

use super::entropy::{DEFAULT_SCAN_LIMIT, Suggester, entropy, mutual_information};
use super::pruner::retain_consistent;
use crate::core::{Code, CodeError, Feedback, Universe};
use rand::Rng;
use std::fmt;

/// Engine settings for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Leading candidates scored per suggestion
    pub scan_limit: usize,
    /// Caller preference for surfacing suggestions; echoed, never interpreted
    pub show_suggestions: bool,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(scan_limit: usize, show_suggestions: bool) -> Self {
        Self {
            scan_limit,
            show_suggestions,
        }
    }

    #[must_use]
    pub const fn with_scan_limit(mut self, scan_limit: usize) -> Self {
        self.scan_limit = scan_limit;
        self
    }

    #[must_use]
    pub const fn with_suggestions(mut self, show_suggestions: bool) -> Self {
        self.show_suggestions = show_suggestions;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_LIMIT, false)
    }
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting guesses
    Active,
    /// The secret was guessed
    Won,
    /// The player quit
    Terminated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Won => write!(f, "won"),
            Self::Terminated => write!(f, "terminated"),
        }
    }
}

/// One entry of the guess history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Everything the caller learns from one turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnResult {
    pub guess: Code,
    pub feedback: Feedback,
    /// Entropy of the candidate set before pruning
    pub entropy_before: f64,
    /// Entropy of the candidate set after pruning
    pub entropy_after: f64,
    /// Expected information of the guess against the pre-prune set
    pub mutual_information: f64,
    /// Candidates left after pruning
    pub remaining: usize,
    /// Next guess from the suggester; `None` once the game is won
    pub suggestion: Option<Code>,
}

impl TurnResult {
    #[inline]
    #[must_use]
    pub const fn bulls(&self) -> u8 {
        self.feedback.bulls()
    }

    #[inline]
    #[must_use]
    pub const fn cows(&self) -> u8 {
        self.feedback.cows()
    }

    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.feedback.is_win()
    }

    /// Bits actually gained this turn
    #[must_use]
    pub fn information_gained(&self) -> f64 {
        self.entropy_before - self.entropy_after
    }
}

/// Error type for rejected guesses
///
/// A rejected guess never changes the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The guess is not 4 distinct digits
    Invalid(CodeError),
    /// The session is no longer accepting guesses
    Finished(SessionState),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "Invalid guess: {e}"),
            Self::Finished(state) => write!(f, "Game is over ({state}), start a new one"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Finished(_) => None,
        }
    }
}

impl From<CodeError> for SessionError {
    fn from(e: CodeError) -> Self {
        Self::Invalid(e)
    }
}

/// A single game against a hidden secret
///
/// The candidate set starts as a copy of the universe and only shrinks. Since
/// every turn is pruned with the secret's own feedback, the secret is always
/// among the candidates.
#[derive(Debug, Clone)]
pub struct Session {
    secret: Code,
    candidates: Vec<Code>,
    history: Vec<GuessRecord>,
    state: SessionState,
    suggester: Suggester,
    show_suggestions: bool,
    initial_size: usize,
}

impl Session {
    /// Start a game with a secret drawn from the thread RNG
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::solver::{Session, SessionConfig, SessionState};
    ///
    /// let session = Session::new(SessionConfig::default());
    /// assert_eq!(session.state(), SessionState::Active);
    /// assert_eq!(session.remaining_candidates().len(), 5040);
    /// assert!(session.history().is_empty());
    /// ```
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let universe = Universe::generate();
        Self::with_rng(&universe, config, &mut rand::rng())
    }

    /// Start a game with a secret drawn uniformly from `universe` using `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        universe: &Universe,
        config: SessionConfig,
        rng: &mut R,
    ) -> Self {
        // The universe is never empty
        let secret = universe.codes()[rng.random_range(0..universe.len())];
        Self::with_secret(universe, secret, config)
    }

    /// Start a game against a known secret
    #[must_use]
    pub fn with_secret(universe: &Universe, secret: Code, config: SessionConfig) -> Self {
        debug_assert!(universe.contains(&secret));
        let candidates = universe.codes().to_vec();
        let initial_size = candidates.len();

        log::info!(
            "new session: {initial_size} candidates, {:.2} bits, scan limit {}",
            entropy(initial_size),
            config.scan_limit
        );

        Self {
            secret,
            candidates,
            history: Vec::new(),
            state: SessionState::Active,
            suggester: Suggester::new(config.scan_limit),
            show_suggestions: config.show_suggestions,
            initial_size,
        }
    }

    /// Validate and play a guess typed by the player
    ///
    /// # Errors
    /// Returns `SessionError::Finished` if the game already ended and
    /// `SessionError::Invalid` if the text is not 4 distinct digits. The
    /// session is unchanged in both cases.
    pub fn submit_guess(&mut self, text: &str) -> Result<TurnResult, SessionError> {
        self.ensure_active()?;
        let guess = Code::parse(text)?;
        self.submit_code(guess)
    }

    /// Play an already-validated guess
    ///
    /// # Errors
    /// Returns `SessionError::Finished` if the game already ended.
    pub fn submit_code(&mut self, guess: Code) -> Result<TurnResult, SessionError> {
        self.ensure_active()?;

        let feedback = Feedback::calculate(&guess, &self.secret);
        self.history.push(GuessRecord { guess, feedback });

        // Information is measured against the set before the answer is known
        let entropy_before = self.current_entropy();
        let mutual_information = mutual_information(&guess, &self.candidates);

        let before = self.candidates.len();
        retain_consistent(&mut self.candidates, &guess, feedback);
        let remaining = self.candidates.len();
        let entropy_after = self.current_entropy();

        debug_assert!(remaining <= before);
        if remaining == 0 {
            log::warn!("candidate set emptied after {guess} ({feedback})");
        }

        let suggestion = if feedback.is_win() {
            self.state = SessionState::Won;
            None
        } else {
            self.suggester.suggest(&self.candidates)
        };

        log::debug!(
            "turn {}: {guess} -> {feedback}, {before} -> {remaining} candidates, {mutual_information:.3} bits expected",
            self.history.len()
        );

        Ok(TurnResult {
            guess,
            feedback,
            entropy_before,
            entropy_after,
            mutual_information,
            remaining,
            suggestion,
        })
    }

    /// End the game and reveal the secret
    ///
    /// An active session becomes `Terminated`; a won session stays `Won`.
    pub fn quit(&mut self) -> Code {
        if self.state == SessionState::Active {
            self.state = SessionState::Terminated;
            log::debug!("session terminated after {} turns", self.history.len());
        }
        self.secret
    }

    /// Suggestion for the current candidate set
    ///
    /// Used before the first guess, when no turn result carries one yet.
    #[must_use]
    pub fn suggestion(&self) -> Option<Code> {
        self.suggester.suggest(&self.candidates)
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    /// Secrets still consistent with every feedback so far
    #[inline]
    #[must_use]
    pub fn remaining_candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Number of guesses played
    #[inline]
    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// Entropy of the full universe at the start of the game
    #[must_use]
    pub fn initial_entropy(&self) -> f64 {
        entropy(self.initial_size)
    }

    #[must_use]
    pub fn current_entropy(&self) -> f64 {
        entropy(self.candidates.len())
    }

    /// The caller's preference, as given in the config
    #[inline]
    #[must_use]
    pub const fn show_suggestions(&self) -> bool {
        self.show_suggestions
    }

    #[inline]
    #[must_use]
    pub const fn scan_limit(&self) -> usize {
        self.suggester.scan_limit()
    }

    /// Settings the session runs with
    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        SessionConfig::new(self.scan_limit(), self.show_suggestions)
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Active => Ok(()),
            state => Err(SessionError::Finished(state)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fast_config() -> SessionConfig {
        SessionConfig::default().with_scan_limit(20)
    }

    fn session_with(secret: &str) -> Session {
        let universe = Universe::generate();
        Session::with_secret(&universe, Code::parse(secret).unwrap(), fast_config())
    }

    #[test]
    fn new_session_is_active_and_full() {
        let session = Session::new(fast_config());

        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.remaining_candidates().len(), Universe::SIZE);
        assert!(session.history().is_empty());
        assert!((session.initial_entropy() - 12.30).abs() < 0.01);
        assert!(session.remaining_candidates().contains(&session.secret()));
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let universe = Universe::generate();
        let a = Session::with_rng(&universe, fast_config(), &mut StdRng::seed_from_u64(7));
        let b = Session::with_rng(&universe, fast_config(), &mut StdRng::seed_from_u64(7));

        assert_eq!(a.secret(), b.secret());
    }

    #[test]
    fn drawn_secrets_come_from_universe() {
        let universe = Universe::generate();
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..50 {
            let session = Session::with_rng(&universe, fast_config(), &mut rng);
            assert!(universe.contains(&session.secret()));
            assert!(session.remaining_candidates().contains(&session.secret()));
        }
    }

    #[test]
    fn turn_result_reports_feedback_and_entropy() {
        let mut session = session_with("1243");
        let result = session.submit_guess("1234").unwrap();

        assert_eq!((result.bulls(), result.cows()), (2, 2));
        assert!((result.entropy_before - 12.299).abs() < 0.01);
        assert!(result.entropy_after < result.entropy_before);
        assert_eq!(result.remaining, session.remaining_candidates().len());
        assert!((result.entropy_after - entropy(result.remaining)).abs() < 1e-12);
        assert!(result.suggestion.is_some());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].feedback, Feedback::new(2, 2));
    }

    #[test]
    fn mutual_information_uses_pre_prune_set() {
        let universe = Universe::generate();
        let mut session =
            Session::with_secret(&universe, Code::parse("5913").unwrap(), fast_config());
        let guess = Code::parse("0123").unwrap();

        let result = session.submit_code(guess).unwrap();

        let expected = mutual_information(&guess, universe.codes());
        assert!((result.mutual_information - expected).abs() < 1e-12);
        assert!(result.mutual_information <= result.entropy_before);
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut session = session_with("4096");
        let result = session.submit_guess("4096").unwrap();

        assert_eq!(result.feedback, Feedback::WIN);
        assert!(result.is_win());
        assert!(result.suggestion.is_none());
        assert_eq!(result.remaining, 1);
        assert!(result.entropy_after.abs() < f64::EPSILON);
        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn finished_session_rejects_guesses() {
        let mut session = session_with("4096");
        session.submit_guess("4096").unwrap();

        let err = session.submit_guess("1234").unwrap_err();
        assert_eq!(err, SessionError::Finished(SessionState::Won));
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn invalid_guesses_leave_state_untouched() {
        let mut session = session_with("4096");

        for bad in ["123", "11234", "12a4", "1123"] {
            let err = session.submit_guess(bad).unwrap_err();
            assert!(matches!(err, SessionError::Invalid(_)), "{bad} accepted");
        }

        assert!(session.history().is_empty());
        assert_eq!(session.remaining_candidates().len(), Universe::SIZE);
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn invalid_guess_error_kinds() {
        let mut session = session_with("4096");

        assert_eq!(
            session.submit_guess("123"),
            Err(SessionError::Invalid(CodeError::InvalidLength(3)))
        );
        assert_eq!(
            session.submit_guess("12a4"),
            Err(SessionError::Invalid(CodeError::NonDigit('a')))
        );
        assert_eq!(
            session.submit_guess("1123"),
            Err(SessionError::Invalid(CodeError::RepeatedDigit('1')))
        );
    }

    #[test]
    fn quit_reveals_secret_and_terminates() {
        let mut session = session_with("8152");
        session.submit_guess("0123").unwrap();

        assert_eq!(session.quit().to_string(), "8152");
        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(
            session.submit_guess("8152"),
            Err(SessionError::Finished(SessionState::Terminated))
        );
    }

    #[test]
    fn quit_after_win_stays_won() {
        let mut session = session_with("8152");
        session.submit_guess("8152").unwrap();

        session.quit();
        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn secret_survives_and_set_shrinks_over_random_games() {
        let universe = Universe::generate();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..5 {
            let mut session = Session::with_rng(&universe, fast_config(), &mut rng);

            for _ in 0..8 {
                if !session.is_active() {
                    break;
                }
                let guess = universe.codes()[rng.random_range(0..universe.len())];
                let before = session.remaining_candidates().len();
                let result = session.submit_code(guess).unwrap();

                assert!(result.remaining <= before);
                assert!(session.remaining_candidates().contains(&session.secret()));
                assert!(result.mutual_information >= 0.0);
                assert!(result.mutual_information <= result.entropy_before + 1e-9);
            }
        }
    }

    #[test]
    fn following_suggestions_wins() {
        let mut session = session_with("9876");
        let mut guess = session.suggestion();

        while let Some(next) = guess {
            let result = session.submit_code(next).unwrap();
            guess = result.suggestion;
            assert!(session.turns() <= 10, "too many turns");
        }

        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn config_is_echoed() {
        let universe = Universe::generate();
        let config = SessionConfig::new(0, true);
        let session = Session::with_secret(&universe, Code::parse("0123").unwrap(), config);

        assert!(session.show_suggestions());
        assert_eq!(session.scan_limit(), 1);
        assert_eq!(session.config(), SessionConfig::new(1, true));
    }

    #[test]
    fn session_error_display() {
        let err = SessionError::from(CodeError::InvalidLength(5));
        assert!(err.to_string().starts_with("Invalid guess"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(
            SessionError::Finished(SessionState::Won)
                .to_string()
                .contains("won")
        );
    }
}
