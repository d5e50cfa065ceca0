//! Information-theoretic scoring
//!
//! Entropy of candidate sets, mutual information of guesses, and the
//! suggester built on top of them.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_metrics, conditional_entropy, entropy, feedback_distribution,
    mutual_information,
};
pub use selector::{DEFAULT_SCAN_LIMIT, Suggester};
