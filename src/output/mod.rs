//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_result, print_solve_result, print_suggestion,
    print_turn_result,
};

/// Candidate lists are printed in full only below this size
pub const CANDIDATE_DISPLAY_THRESHOLD: usize = 10;
