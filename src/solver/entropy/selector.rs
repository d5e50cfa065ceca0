//! Mutual-information guess selection
//!
//! Scores a bounded prefix of the candidate set and picks the guess with the
//! highest expected information gain.

use super::calculator::mutual_information;
use crate::core::Code;

/// How many leading candidates the suggester scores by default
pub const DEFAULT_SCAN_LIMIT: usize = 500;

/// Suggests the next guess by maximizing mutual information
///
/// Only the first `scan_limit` candidates are scored, each against the whole
/// candidate set. Scoring all of them costs up to 5040 × 5040 comparisons per
/// turn. Because the prefix follows enumeration order rather than anything
/// meaningful, the suggestion can be sub-optimal once the set is larger than
/// the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggester {
    scan_limit: usize,
}

impl Suggester {
    /// Create a suggester that scores at most `scan_limit` candidates
    ///
    /// A limit of 0 is raised to 1 so a non-empty set always yields a guess.
    #[must_use]
    pub const fn new(scan_limit: usize) -> Self {
        let scan_limit = if scan_limit == 0 { 1 } else { scan_limit };
        Self { scan_limit }
    }

    #[must_use]
    pub const fn scan_limit(&self) -> usize {
        self.scan_limit
    }

    /// Best next guess, or `None` if no candidates remain
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Universe;
    /// use bulls_cows::solver::entropy::Suggester;
    ///
    /// let universe = Universe::generate();
    /// let suggestion = Suggester::default().suggest(universe.codes());
    ///
    /// // Every opening guess is equally informative, so the first one wins the tie
    /// assert_eq!(suggestion.unwrap().to_string(), "0123");
    /// ```
    #[must_use]
    pub fn suggest(&self, candidates: &[Code]) -> Option<Code> {
        self.suggest_with_score(candidates).map(|(code, _)| code)
    }

    /// Best next guess together with its mutual information
    ///
    /// Ties go to the earliest candidate: a later guess must score strictly
    /// higher to replace the current best.
    #[must_use]
    pub fn suggest_with_score(&self, candidates: &[Code]) -> Option<(Code, f64)> {
        let mut best: Option<(Code, f64)> = None;

        for guess in candidates.iter().take(self.scan_limit) {
            let info = mutual_information(guess, candidates);
            if best.is_none_or(|(_, best_info)| info > best_info) {
                best = Some((*guess, info));
            }
        }

        if let Some((code, info)) = best {
            log::trace!(
                "suggest {code} ({info:.3} bits) from {} of {} candidates",
                candidates.len().min(self.scan_limit),
                candidates.len()
            );
        }

        best
    }
}

impl Default for Suggester {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_LIMIT)
    }
}
