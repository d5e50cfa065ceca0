//! Display functions for command results

use super::formatters::{entropy_bar, feedback_pegs, near_solution_list};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Code;
use crate::solver::TurnResult;
use colored::Colorize;

/// Print the feedback and information figures of one turn
pub fn print_turn_result(result: &TurnResult) {
    println!(
        "\n{} {}   Bulls: {}, Cows: {}",
        result.guess.to_string().bright_white().bold(),
        feedback_pegs(result.feedback),
        result.bulls().to_string().green().bold(),
        result.cows().to_string().yellow().bold()
    );
    println!("Previous entropy: {:.2} bits", result.entropy_before);
    println!("Current entropy: {:.2} bits", result.entropy_after);
    println!(
        "Mutual information of this guess: {}",
        format!("{:.2} bits", result.mutual_information).bright_yellow()
    );
    println!("Remaining possibilities: {}", result.remaining);
}

/// Print the suggested next guess, plus the candidates once few remain
pub fn print_suggestion(suggestion: Code, candidates: &[Code]) {
    println!(
        "{} {}",
        "★ Suggested next guess:".bright_cyan(),
        suggestion.to_string().bright_cyan().bold()
    );

    if let Some(list) = near_solution_list(candidates) {
        println!("{} {list}", "★ Almost there!".bright_magenta().bold());
    }
}

/// Print the result of a self-play game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.secret.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!("\nInitial entropy: {:.2} bits", result.initial_entropy);
    }

    for (i, turn) in result.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            turn.guess,
            feedback_pegs(turn.feedback)
        );

        if verbose {
            println!(
                "  Entropy:     {:.3} → {:.3} bits",
                turn.entropy_before, turn.entropy_after
            );
            println!("  Expected:    {:.3} bits", turn.mutual_information);
            println!("  Gained:      {:.3} bits", turn.information_gained());
            println!("  Remaining:   {} candidates", turn.remaining);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.turns.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.turns.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "INFORMATION ANALYSIS:".bright_cyan().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.mutual_information, 30);

    println!(
        "\n📊 Against {} possible secrets ({:.2} bits):",
        result.total_candidates, result.total_entropy
    );
    println!(
        "   Information: [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.mutual_information).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!("   Worst case:  {} candidates", metrics.max_partition);
    println!("   Feedbacks:   {} distinct", metrics.partitions);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let largest = metrics.max_partition.max(1) as f64;
    for &(feedback, count) in &result.distribution {
        let pct = count as f64 / result.total_candidates.max(1) as f64 * 100.0;
        let bar_width = (count as f64 / largest * 30.0).ceil() as usize;
        println!(
            "   {} {} {:5} ({:5.1}%)",
            feedback,
            "█".repeat(bar_width).green(),
            count,
            pct
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_games).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_turns)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!(
        "   Info per guess:   {:.3} bits",
        result.average_information
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games.max(1) as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {turns:2}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.worst_secrets.is_empty() {
        println!("\n🐢 {}", "Hardest secrets:".bright_cyan().bold());
        for (secret, turns) in &result.worst_secrets {
            println!("   {secret}: {turns} guesses");
        }
    }
}
