//! Bulls and Cows - CLI
//!
//! Play in a TUI or a plain terminal, or let the information engine play
//! itself.

use anyhow::Result;
use bulls_cows::{
    commands::{
        SolveConfig, analyze_opening, run_benchmark, run_simple, sample_secrets, solve_secret,
    },
    core::Universe,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{SessionConfig, entropy::DEFAULT_SCAN_LIMIT},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls and Cows with entropy and mutual-information feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// How many candidates the suggester scores per turn
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_SCAN_LIMIT)]
    scan_limit: usize,

    /// Seed for secret selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show suggestions without asking
    #[arg(long, global = true)]
    hints: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (prompt-driven game without TUI)
    Simple,

    /// Analyze the information an opening guess yields
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Let the engine solve a specific secret
    Solve {
        /// The secret to solve
        secret: String,

        /// Show entropy figures for each turn
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(short = 'm', long, default_value = "10")]
        max_turns: usize,
    },

    /// Benchmark the engine over random secrets
    Benchmark {
        /// Number of random secrets to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Play every one of the 5040 secrets
        #[arg(short, long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = SessionConfig::default().with_scan_limit(cli.scan_limit);
    log::debug!("scan limit {}, seed {:?}", config.scan_limit, cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config.with_suggestions(cli.hints), cli.seed),
        Commands::Simple => {
            let hints = cli.hints.then_some(true);
            run_simple(config, cli.seed, hints).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Analyze { guess } => run_analyze_command(&guess),
        Commands::Solve {
            secret,
            verbose,
            max_turns,
        } => run_solve_command(secret, verbose, max_turns, config),
        Commands::Benchmark { count, all } => {
            run_benchmark_command(count, all, cli.seed, config);
            Ok(())
        }
    }
}

fn run_play_command(config: SessionConfig, seed: Option<u64>) -> Result<()> {
    use bulls_cows::interactive::{App, run_tui};

    let app = App::new(config, seed);
    run_tui(app)
}

fn run_analyze_command(guess: &str) -> Result<()> {
    let result = analyze_opening(guess).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_solve_command(
    secret: String,
    verbose: bool,
    max_turns: usize,
    config: SessionConfig,
) -> Result<()> {
    let solve_config = SolveConfig::new(secret).with_max_turns(max_turns);
    let result = solve_secret(&solve_config, config).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(count: usize, all: bool, seed: Option<u64>, config: SessionConfig) {
    let universe = Universe::generate();
    let count = if all { universe.len() } else { count };

    println!(
        "Running benchmark on {count} secrets (scan limit {})...",
        config.scan_limit
    );

    let secrets = sample_secrets(&universe, count, seed);
    let result = run_benchmark(&universe, &secrets, config, 10, true);
    print_benchmark_result(&result);
}
