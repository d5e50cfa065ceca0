//! Formatting utilities for terminal output

use super::CANDIDATE_DISPLAY_THRESHOLD;
use crate::core::{CODE_LENGTH, Code, Feedback};

/// Format feedback as pegs: ● per bull, ○ per cow, · for the rest
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let bulls = usize::from(feedback.bulls());
    let cows = usize::from(feedback.cows());
    let misses = CODE_LENGTH.saturating_sub(bulls + cows);

    format!(
        "{}{}{}",
        "●".repeat(bulls),
        "○".repeat(cows),
        "·".repeat(misses)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format bits as a bar scaled to the entropy of the full universe
#[must_use]
pub fn entropy_bar(bits: f64, width: usize) -> String {
    let max_entropy = 12.3; // log2(5040)
    create_progress_bar(bits, max_entropy, width)
}

/// Join codes into a single line, e.g. `[0123, 0145]`
#[must_use]
pub fn code_list(codes: &[Code]) -> String {
    let joined: Vec<String> = codes.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}

/// Candidate list worth showing once the game is nearly solved
///
/// `None` while [`CANDIDATE_DISPLAY_THRESHOLD`] or more candidates remain.
#[must_use]
pub fn near_solution_list(candidates: &[Code]) -> Option<String> {
    if candidates.len() < CANDIDATE_DISPLAY_THRESHOLD {
        Some(code_list(candidates))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Universe;

    #[test]
    fn pegs_all_misses() {
        assert_eq!(feedback_pegs(Feedback::new(0, 0)), "····");
    }

    #[test]
    fn pegs_win() {
        assert_eq!(feedback_pegs(Feedback::WIN), "●●●●");
    }

    #[test]
    fn pegs_mixed() {
        assert_eq!(feedback_pegs(Feedback::new(1, 2)), "●○○·");
        assert_eq!(feedback_pegs(Feedback::new(0, 4)), "○○○○");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(500.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-3.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn code_list_formatting() {
        let codes = vec![Code::parse("0123").unwrap(), Code::parse("4567").unwrap()];
        assert_eq!(code_list(&codes), "[0123, 4567]");
        assert_eq!(code_list(&[]), "[]");
    }

    #[test]
    fn near_solution_list_only_below_threshold() {
        let universe = Universe::generate();
        let nine = &universe.codes()[..9];
        let ten = &universe.codes()[..10];

        let listed = near_solution_list(nine).unwrap();
        assert!(listed.starts_with("[0123, 0124"));
        assert_eq!(listed.matches(", ").count(), 8);

        assert!(near_solution_list(ten).is_none());
        assert!(near_solution_list(universe.codes()).is_none());
    }
}
