//! TUI application state and logic

use crate::core::{CODE_LENGTH, Code, Feedback, Universe};
use crate::solver::{Session, SessionConfig, SessionState, TurnResult};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub universe: Universe,
    pub config: SessionConfig,
    pub session: Session,
    pub rng: StdRng,
    pub history: Vec<HistoryEntry>,
    pub last_result: Option<TurnResult>,
    pub opening_suggestion: Option<Code>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_hints: bool,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Code,
    pub feedback: Feedback,
    pub mutual_information: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_guesses: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_won as f64
        }
    }
}

impl App {
    /// Create the app and start the first game
    ///
    /// A seed makes the sequence of secrets reproducible.
    #[must_use]
    pub fn new(config: SessionConfig, seed: Option<u64>) -> Self {
        let universe = Universe::generate();
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let session = Session::with_rng(&universe, config, &mut rng);
        let opening_suggestion = session.suggestion();

        Self {
            universe,
            config,
            session,
            rng,
            history: Vec::new(),
            last_result: None,
            opening_suggestion,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the 4-digit secret (all digits unique).".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Press '?' to toggle hints from the information engine.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            show_hints: config.show_suggestions,
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// The guess the engine would play next
    #[must_use]
    pub fn current_suggestion(&self) -> Option<Code> {
        match &self.last_result {
            Some(result) => result.suggestion,
            None => self.opening_suggestion,
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.remaining_candidates().len()
    }

    /// Bits learned since the start of the game
    #[must_use]
    pub fn information_gained(&self) -> f64 {
        self.session.initial_entropy() - self.session.current_entropy()
    }

    /// Submit the typed guess
    pub fn handle_guess(&mut self) {
        let guess = self.input_buffer.trim().to_string();
        let candidates_before = self.candidates_count();

        match self.session.submit_guess(&guess) {
            Ok(result) => {
                self.history.push(HistoryEntry {
                    guess: result.guess,
                    feedback: result.feedback,
                    mutual_information: result.mutual_information,
                    candidates_before,
                    candidates_after: result.remaining,
                });
                self.last_result = Some(result);
                self.input_buffer.clear();

                if result.is_win() {
                    self.finish_game(true);
                    let turns = self.session.turns();
                    self.add_message(
                        &format!(
                            "🎉 Solved in {turns} {}! Press 'n' for a new game or 'q' to quit.",
                            if turns == 1 { "guess" } else { "guesses" }
                        ),
                        MessageStyle::Success,
                    );
                } else {
                    self.add_message(
                        &format!(
                            "{}: {} bulls, {} cows ({:.2} bits expected)",
                            result.guess,
                            result.bulls(),
                            result.cows(),
                            result.mutual_information
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Give up on the current game and reveal the secret
    pub fn quit_game(&mut self) {
        if self.session.state() != SessionState::Active {
            return;
        }

        let secret = self.session.quit();
        self.finish_game(false);
        self.add_message(
            &format!("The secret was {secret}. Press 'n' for a new game or 'q' to quit."),
            MessageStyle::Info,
        );
    }

    pub fn new_game(&mut self) {
        self.session = Session::with_rng(&self.universe, self.config, &mut self.rng);
        self.opening_suggestion = self.session.suggestion();
        self.history.clear();
        self.last_result = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            "New game started! A fresh secret is hidden.",
            MessageStyle::Info,
        );
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') => {
                    self.new_game();
                }
                _ => {
                    // Between games, ignore other keys
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.quit_game();
                }
                KeyCode::Char('?') => {
                    self.toggle_hints();
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.push_digit(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    self.handle_guess();
                }
                _ => {}
            },
        }
    }

    fn push_digit(&mut self, digit: char) {
        if self.input_buffer.len() < CODE_LENGTH {
            self.input_buffer.push(digit);
        }
    }

    pub fn toggle_hints(&mut self) {
        self.show_hints = !self.show_hints;
        let text = if self.show_hints {
            "Hints on"
        } else {
            "Hints off"
        };
        self.add_message(text, MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn finish_game(&mut self, won: bool) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            self.stats.total_guesses += self.session.turns();
        }
        self.input_mode = InputMode::GameOver;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(SessionConfig::default().with_scan_limit(20), Some(3))
    }

    #[test]
    fn new_app_is_guessing_with_opening_suggestion() {
        let app = app();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.candidates_count(), Universe::SIZE);
        assert_eq!(
            app.current_suggestion().map(|c| c.to_string()),
            Some("0123".to_string())
        );
        assert!(app.information_gained().abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_guess_reports_error() {
        let mut app = app();
        app.input_buffer = "112".to_string();
        app.handle_guess();

        assert!(app.history.is_empty());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
        // The buffer is kept so the player can fix it
        assert_eq!(app.input_buffer, "112");
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut app = app();
        app.input_buffer = app.session.secret().to_string();
        app.handle_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_guesses, 1);
        assert!(app.current_suggestion().is_none());
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn guess_records_history() {
        let mut app = app();
        let secret = app.session.secret();
        let guess = app
            .universe
            .codes()
            .iter()
            .find(|&&c| c != secret)
            .copied()
            .unwrap();

        app.input_buffer = guess.to_string();
        app.handle_guess();

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].candidates_before, Universe::SIZE);
        assert_eq!(app.history[0].candidates_after, app.candidates_count());
        assert!(app.information_gained() > 0.0);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn quit_then_new_game() {
        let mut app = app();
        let first_secret = app.session.secret();

        app.quit_game();
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .last()
                .is_some_and(|m| m.text.contains(&first_secret.to_string()))
        );

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history.is_empty());
        assert_eq!(app.candidates_count(), Universe::SIZE);
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typing_stops_at_four_digits() {
        let mut app = app();
        for c in ['5', 'x', '0', '7', '1', '9'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "5071");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "507");
    }

    #[test]
    fn keys_drive_a_game() {
        let mut app = app();
        for c in app.session.secret().to_string().chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::GameOver);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_while_guessing() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn toggle_hints_flips() {
        let mut app = app();
        assert!(!app.show_hints);
        app.toggle_hints();
        assert!(app.show_hints);
        app.toggle_hints();
        assert!(!app.show_hints);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
