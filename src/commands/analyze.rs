//! Guess analysis command
//!
//! Scores an opening guess against the full universe.

use crate::core::{Code, Feedback, Universe};
use crate::solver::entropy::{GuessMetrics, calculate_metrics, entropy, feedback_distribution};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: String,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    pub total_entropy: f64,
    pub distribution: Vec<(Feedback, usize)>,
}

/// Analyze the information content of a guess against a set of candidates
///
/// # Errors
///
/// Returns an error if the guess is not 4 distinct digits.
pub fn analyze_guess(guess: &str, candidates: &[Code]) -> Result<AnalysisResult, String> {
    let code = Code::parse(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let metrics = calculate_metrics(&code, candidates);
    let distribution = feedback_distribution(&code, candidates);

    Ok(AnalysisResult {
        guess: code.to_string(),
        metrics,
        total_candidates: candidates.len(),
        total_entropy: entropy(candidates.len()),
        distribution,
    })
}

/// Analyze a guess as an opening move
///
/// # Errors
///
/// Returns an error if the guess is not 4 distinct digits.
pub fn analyze_opening(guess: &str) -> Result<AnalysisResult, String> {
    let universe = Universe::generate();
    analyze_guess(guess, universe.codes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_valid_guess() {
        let result = analyze_opening("0123").unwrap();

        assert_eq!(result.guess, "0123");
        assert_eq!(result.total_candidates, 5040);
        assert!((result.metrics.mutual_information - 2.771).abs() < 0.001);
        assert_eq!(result.metrics.partitions, result.distribution.len());
        assert_eq!(result.metrics.max_partition, 1440);
    }

    #[test]
    fn analyze_invalid_guess() {
        assert!(analyze_opening("0000").is_err());
        assert!(analyze_opening("abcd").is_err());
    }

    #[test]
    fn information_properties() {
        let result = analyze_opening("5071").unwrap();

        // Information is bounded by the entropy of the candidate set
        assert!(result.metrics.mutual_information >= 0.0);
        assert!(result.metrics.mutual_information <= result.total_entropy);

        // Expected remaining should be sensible
        assert!(result.metrics.expected_remaining >= 1.0);
        assert!(result.metrics.expected_remaining <= result.total_candidates as f64);
    }

    #[test]
    fn analyze_against_subset() {
        let universe = Universe::generate();
        let subset = &universe.codes()[..10];
        let result = analyze_guess("0123", subset).unwrap();

        assert_eq!(result.total_candidates, 10);
        assert_eq!(
            result.distribution.iter().map(|(_, n)| n).sum::<usize>(),
            10
        );
    }
}
