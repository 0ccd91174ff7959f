//! Display functions for command results

use super::formatters::{coloured_code, coloured_pegs, create_progress_bar};
use crate::commands::{BenchmarkResult, SolveResult, SpaceReport};
use crate::game::GameOutcome;
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  {}",
        coloured_code(&result.secret),
        format!("(strategy: {})", result.strategy).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        let record = &step.report.record;
        println!(
            "\nTurn {}: {} {}  {}",
            record.turn,
            coloured_code(&record.guess),
            coloured_pegs(record.verdict, length),
            record.verdict.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.report.candidates_before, step.report.candidates_after
            );

            if let Some(metrics) = step.metrics {
                println!("  Worst case: {} candidates", metrics.max_partition);
                println!("  Expected:   {:.1} candidates", metrics.expected_remaining);
                println!(
                    "  Entropy:    {:.3} bits over {} verdicts",
                    metrics.entropy, metrics.partitions
                );
            }

            if step.report.candidates_after > 0 {
                let reduction =
                    step.report.candidates_before as f64 / step.report.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    match &result.outcome {
        GameOutcome::Won { turn, .. } => println!(
            "{}",
            format!(
                "✅ Solved in {turn} {}!",
                if *turn == 1 { "turn" } else { "turns" }
            )
            .green()
            .bold()
        ),
        GameOutcome::Exhausted { turns, reason } => println!(
            "{}",
            format!("❌ Failed after {turns} turns: {reason}").red().bold()
        ),
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
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if !result.distribution.is_empty() {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&turns, &count) in &result.distribution {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {turns:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} ({}):",
            "Failures".red().bold(),
            result.failures.len()
        );
        for secret in result.failures.iter().take(20) {
            println!("   {}", coloured_code(secret));
        }
        if result.failures.len() > 20 {
            println!("   … and {} more", result.failures.len() - 20);
        }
    }
}

/// Print the code space report
pub fn print_space_report(report: &SpaceReport) {
    let game = &report.config.game;

    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "CODE SPACE".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("   Colours:          {}", game.colours);
    println!("   Length:           {}", game.length);
    println!(
        "   Repeats:          {}",
        if game.repeats { "allowed" } else { "not allowed" }
    );
    match report.size {
        Some(size) => println!(
            "   Possible codes:   {}",
            size.to_string().bright_yellow().bold()
        ),
        None => println!("   Possible codes:   {}", "more than 2^64".bright_red().bold()),
    }
    println!("   Sample secret:    {}", coloured_code(&report.sample));

    if !report.within_limit() {
        println!(
            "\n{}",
            format!(
                "⚠ Too large to solve: the limit is {} codes (see --space-limit)",
                report.config.space_limit
            )
            .yellow()
        );
    }
}
