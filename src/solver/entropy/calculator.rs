//! Entropy and mutual information over candidate sets
//!
//! Every surviving candidate is equally consistent with the feedback seen so
//! far, so the posterior over secrets is uniform and the entropy of a
//! candidate set depends only on its size.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Distinct values of [`Feedback::index`]
const FEEDBACK_SLOTS: usize = 25;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Expected information gain in bits
    pub mutual_information: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum bucket size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedbacks the guess can produce
    pub partitions: usize,
}

/// Entropy in bits of a uniform distribution over `set_size` outcomes
///
/// `entropy(0)` is 0 by convention. An empty candidate set only arises from
/// inconsistent feedback and never from a real game.
///
/// # Examples
/// ```
/// use bulls_cows::solver::entropy::entropy;
///
/// assert!((entropy(5040) - 12.30).abs() < 0.01);
/// assert_eq!(entropy(1), 0.0);
/// assert_eq!(entropy(0), 0.0);
/// ```
#[must_use]
pub fn entropy(set_size: usize) -> f64 {
    if set_size == 0 {
        return 0.0;
    }
    (set_size as f64).log2()
}

/// Expected information gain of `guess` against `candidates`, in bits
///
/// I(secret; feedback) = H(secret) - H(secret | feedback), where
/// H(secret | feedback) = Σ (|bucket| / total) · log₂|bucket| over the buckets
/// of candidates that share a feedback.
///
/// Returns 0 for empty and singleton candidate sets.
///
/// # Examples
/// ```
/// use bulls_cows::core::Code;
/// use bulls_cows::solver::entropy::mutual_information;
///
/// let guess = Code::parse("1234").unwrap();
/// let candidates = vec![Code::parse("1234").unwrap(), Code::parse("5678").unwrap()];
///
/// // Two candidates, two distinct feedbacks: one full bit
/// let info = mutual_information(&guess, &candidates);
/// assert!((info - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn mutual_information(guess: &Code, candidates: &[Code]) -> f64 {
    let total = candidates.len();
    if total <= 1 {
        return 0.0;
    }

    let counts = feedback_counts(*guess, candidates);
    let info = entropy(total) - conditional_entropy(counts, total);

    // Float noise can land a hair below zero when the guess does not split
    info.max(0.0)
}

/// Bucket sizes indexed by [`Feedback::index`]
///
/// The hot path of the suggester. A fixed array keeps the summation order
/// identical for every guess, so guesses with the same bucket sizes score
/// exactly equal and ties resolve by position alone.
fn feedback_counts(guess: Code, candidates: &[Code]) -> [usize; FEEDBACK_SLOTS] {
    let mut counts = [0usize; FEEDBACK_SLOTS];

    for candidate in candidates {
        counts[Feedback::calculate(&guess, candidate).index()] += 1;
    }

    counts
}

/// Group candidates by the feedback they produce with the guess
pub(crate) fn group_by_feedback(guess: Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::calculate(&guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Expected entropy remaining once the feedback is known
///
/// H = Σ p(bucket) · log₂|bucket|
///
/// # Properties
/// - 0 when every bucket holds a single candidate
/// - log₂(total) when everything falls in one bucket
#[must_use]
pub fn conditional_entropy(bucket_sizes: impl IntoIterator<Item = usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    bucket_sizes
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| count as f64 / total * entropy(count))
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns mutual information, expected remaining candidates, and the
/// worst-case bucket. Used by the analysis views.
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            mutual_information: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
        };
    }

    let buckets = group_by_feedback(*guess, candidates);
    let total = candidates.len();

    let mutual_information = if total <= 1 {
        0.0
    } else {
        (entropy(total) - conditional_entropy(buckets.values().copied(), total)).max(0.0)
    };

    let expected_remaining: f64 = buckets
        .values()
        .map(|&count| count as f64 * count as f64 / total as f64)
        .sum();

    let max_partition = buckets.values().copied().max().unwrap_or(0);

    GuessMetrics {
        mutual_information,
        expected_remaining,
        max_partition,
        partitions: buckets.len(),
    }
}

/// Bucket sizes keyed by feedback, sorted by bulls then cows
///
/// Feeds the distribution table of the `analyze` command.
#[must_use]
pub fn feedback_distribution(guess: &Code, candidates: &[Code]) -> Vec<(Feedback, usize)> {
    let mut distribution: Vec<(Feedback, usize)> =
        group_by_feedback(*guess, candidates).into_iter().collect();
    distribution.sort_unstable_by_key(|&(feedback, _)| feedback);
    distribution
}
