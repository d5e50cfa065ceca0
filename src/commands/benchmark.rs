//! Benchmark command
//!
//! Plays many self-play games and summarizes how many turns they take.

use super::solve::play_out;
use crate::core::{Code, Universe};
use crate::solver::{Session, SessionConfig, TurnResult};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub average_information: f64,
    pub worst_secrets: Vec<(String, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Pick the secrets to benchmark against
///
/// With a seed the sample is reproducible; without one it comes from the
/// thread RNG. A count at or above the universe size returns every code.
#[must_use]
pub fn sample_secrets(universe: &Universe, count: usize, seed: Option<u64>) -> Vec<Code> {
    if count >= universe.len() {
        return universe.codes().to_vec();
    }

    let mut secrets: Vec<Code> = match seed {
        Some(seed) => universe
            .codes()
            .choose_multiple(&mut StdRng::seed_from_u64(seed), count)
            .copied()
            .collect(),
        None => universe
            .codes()
            .choose_multiple(&mut rand::rng(), count)
            .copied()
            .collect(),
    };
    secrets.sort_unstable();
    secrets
}

/// Run self-play games against every secret
///
/// Games are independent and run on the rayon pool; each one owns its
/// session. A game that hits `max_turns` counts as unsolved.
#[must_use]
pub fn run_benchmark(
    universe: &Universe,
    secrets: &[Code],
    config: SessionConfig,
    max_turns: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let games: Vec<(Code, Vec<TurnResult>)> = secrets
        .par_iter()
        .map(|&secret| {
            let mut session = Session::with_secret(universe, secret, config);
            let turns = play_out(&mut session, max_turns);
            pb.inc(1);
            (secret, turns)
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    summarize(&games, duration)
}

fn summarize(games: &[(Code, Vec<TurnResult>)], duration: Duration) -> BenchmarkResult {
    let mut total_turns = 0;
    let mut solved = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut information = 0.0;
    let mut information_samples = 0usize;

    for (_, turns) in games {
        let count = turns.len();
        total_turns += count;
        min_turns = min_turns.min(count);
        max_turns = max_turns.max(count);
        *distribution.entry(count).or_insert(0) += 1;

        if turns.last().is_some_and(TurnResult::is_win) {
            solved += 1;
        }

        information += turns.iter().map(|t| t.mutual_information).sum::<f64>();
        information_samples += count;
    }

    let mut worst_secrets: Vec<(String, usize)> = games
        .iter()
        .map(|(secret, turns)| (secret.to_string(), turns.len()))
        .collect();
    worst_secrets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    worst_secrets.truncate(5);

    let total_games = games.len();
    let per_game = |value: f64, n: usize| if n == 0 { 0.0 } else { value / n as f64 };

    BenchmarkResult {
        total_games,
        solved,
        total_turns,
        average_turns: per_game(total_turns as f64, total_games),
        min_turns: if total_games == 0 { 0 } else { min_turns },
        max_turns,
        distribution,
        average_information: per_game(information, information_samples),
        worst_secrets,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(1e-9),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> SessionConfig {
        SessionConfig::default().with_scan_limit(25)
    }

    #[test]
    fn sample_is_reproducible_with_seed() {
        let universe = Universe::generate();
        let a = sample_secrets(&universe, 12, Some(42));
        let b = sample_secrets(&universe, 12, Some(42));

        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert!(a.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sample_everything_when_count_is_large() {
        let universe = Universe::generate();
        assert_eq!(
            sample_secrets(&universe, 10_000, None).len(),
            Universe::SIZE
        );
    }

    #[test]
    fn benchmark_solves_every_game() {
        let universe = Universe::generate();
        let secrets = sample_secrets(&universe, 8, Some(1));

        let result = run_benchmark(&universe, &secrets, fast(), 10, false);

        assert_eq!(result.total_games, 8);
        assert_eq!(result.solved, 8);
        assert_eq!(result.distribution.values().sum::<usize>(), 8);
        assert!(result.min_turns >= 1);
        assert!(result.max_turns <= 10);
        assert!(result.average_turns >= result.min_turns as f64);
        assert!(result.average_turns <= result.max_turns as f64);
        assert!(result.average_information > 0.0);
        assert_eq!(result.worst_secrets.len(), 5);
        assert_eq!(result.worst_secrets[0].1, result.max_turns);
    }

    #[test]
    fn benchmark_turn_limit_counts_as_unsolved() {
        let universe = Universe::generate();
        let secrets = vec![Code::parse("9876").unwrap()];

        let result = run_benchmark(&universe, &secrets, fast(), 1, false);

        assert_eq!(result.solved, 0);
        assert_eq!(result.max_turns, 1);
    }

    #[test]
    fn benchmark_empty() {
        let universe = Universe::generate();
        let result = run_benchmark(&universe, &[], fast(), 10, false);

        assert_eq!(result.total_games, 0);
        assert_eq!(result.min_turns, 0);
        assert!(result.average_turns.abs() < f64::EPSILON);
    }
}
