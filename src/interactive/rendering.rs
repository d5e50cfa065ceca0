//! TUI rendering with ratatui
//!
//! Panels for the Bulls and Cows game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CODE_LENGTH, Feedback};
use crate::output::CANDIDATE_DISPLAY_THRESHOLD;
use crate::solver::SessionState;
use crate::solver::entropy::calculate_metrics;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐂 BULLS AND COWS - Information Theory Edition")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),      // Last turn
            Constraint::Percentage(40), // Candidates
            Constraint::Min(5),         // History
        ])
        .split(area);

    render_last_turn(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn peg_spans(feedback: Feedback) -> Vec<Span<'static>> {
    let bulls = usize::from(feedback.bulls());
    let cows = usize::from(feedback.cows());
    let misses = CODE_LENGTH.saturating_sub(bulls + cows);

    vec![
        Span::styled("●".repeat(bulls), Style::default().fg(Color::Green)),
        Span::styled("○".repeat(cows), Style::default().fg(Color::Yellow)),
        Span::styled("·".repeat(misses), Style::default().fg(Color::DarkGray)),
    ]
}

fn render_last_turn(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if let Some(result) = &app.last_result {
        let mut guess_line = vec![
            Span::raw("Guess:     "),
            Span::styled(
                result.guess.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        guess_line.extend(peg_spans(result.feedback));
        guess_line.push(Span::raw(format!(
            "  {} bulls, {} cows",
            result.bulls(),
            result.cows()
        )));
        lines.push(Line::from(guess_line));
        lines.push(Line::from(format!(
            "Entropy:   {:.2} → {:.2} bits",
            result.entropy_before, result.entropy_after
        )));
        lines.push(Line::from(format!(
            "Expected:  {:.3} bits of information",
            result.mutual_information
        )));
        lines.push(Line::from(format!(
            "Gained:    {:.3} bits",
            result.information_gained()
        )));
    } else {
        lines.push(Line::from("No guesses yet. Type 4 unique digits."));
    }

    if app.show_hints
        && let Some(suggestion) = app.current_suggestion()
    {
        lines.push(Line::from(vec![
            Span::raw("Suggested: "),
            Span::styled(
                suggestion.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Last Turn ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.remaining_candidates();
    let count = candidates.len();

    let content = if app.session.state() == SessionState::Won {
        vec![Line::from("Game completed!")]
    } else if app.show_hints && count < CANDIDATE_DISPLAY_THRESHOLD {
        let mut lines = vec![Line::from("Almost there! Remaining secrets:")];
        for candidate in candidates {
            let metrics = calculate_metrics(candidate, candidates);
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(candidate.to_string(), Style::default().fg(Color::Green)),
                Span::styled(
                    format!(" {:.2}b", metrics.mutual_information),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }
        lines
    } else {
        vec![
            Line::from(format!("{count} candidates remaining")),
            Line::from(format!(
                "Information needed: {:.2} bits",
                app.session.current_entropy()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{:2}: {} ", i + 1, entry.guess))];
            spans.extend(peg_spans(entry.feedback));
            spans.push(Span::raw(format!(
                " [{:.2} bits] {} → {}",
                entry.mutual_information, entry.candidates_before, entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_information_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_information_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = app.session.initial_entropy();
    let bits_gained = app.information_gained();
    let ratio = if total_bits > 0.0 {
        (bits_gained / total_bits).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{bits_gained:.1}/{total_bits:.1} bits"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver if app.session.state() == SessionState::Won => (
            " 🎉 YOU WIN! 🎉 | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Red,
        ),
        InputMode::Guessing => (
            " Enter Guess (4 unique digits) | Enter to submit ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode_text = format!("Turn: {}", app.session.turns());
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Avg: {:.1}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.average_guesses()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.candidates_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Enter: Submit | ?: Hints | q: Give Up",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
