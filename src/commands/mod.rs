//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_guess, analyze_opening};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_secrets};
pub use simple::{new_session, run_simple};
pub use solve::{SolveConfig, SolveResult, play_out, solve_secret};
