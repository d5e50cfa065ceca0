//! Candidate pruning
//!
//! Keeps the candidates that would have produced the observed feedback.

use crate::core::{Code, Feedback};

/// Candidates consistent with `observed` for `guess`, in their original order
///
/// The result is never larger than the input. If `observed` is the feedback
/// the true secret gives, the secret is always kept.
#[must_use]
pub fn prune(candidates: &[Code], guess: &Code, observed: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|&candidate| Feedback::calculate(guess, candidate) == observed)
        .copied()
        .collect()
}

/// In-place variant of [`prune`], reusing the set's allocation
pub fn retain_consistent(candidates: &mut Vec<Code>, guess: &Code, observed: Feedback) {
    candidates.retain(|candidate| Feedback::calculate(guess, candidate) == observed);
}
