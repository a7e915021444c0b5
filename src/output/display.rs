//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs, paint_code};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Feedback;
use crate::solver::{Outcome, Round};
use colored::Colorize;

/// Print one round of a session
pub fn print_round(turn: usize, round: &Round) {
    let length = round.guess.length();
    print!(
        "  {}. {}  {} {}",
        turn.to_string().bright_black(),
        paint_code(&round.guess),
        feedback_pegs(round.feedback, length),
        round.feedback.to_string().bright_black()
    );
    match (round.candidates_before, round.candidates_after) {
        (Some(before), Some(after)) if !round.is_solved() => {
            println!("  candidates: {before} → {after}");
        }
        _ => println!(),
    }
}

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with {}",
        paint_code(&result.secret),
        result.strategy.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            paint_code(&round.guess),
            feedback_pegs(round.feedback, round.guess.length())
        );

        if verbose {
            println!("  Feedback:   {}", round.feedback);
            if let (Some(before), Some(after)) = (round.candidates_before, round.candidates_after) {
                println!("  Candidates: {before} → {after}");
                if after > 0 && !round.is_solved() {
                    let reduction = before as f64 / after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                        reduction.log2()
                    );
                }
            }
        }
    }

    println!();
    match result.outcome {
        Outcome::Solved(_) => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses())
                .green()
                .bold()
        ),
        Outcome::Exhausted => println!(
            "{}",
            format!("❌ No code fits the feedback after {} guesses", result.guesses())
                .red()
                .bold()
        ),
        Outcome::Aborted => println!("{}", "⏹ Aborted".yellow().bold()),
    }
}

/// Print the feedback partition of a code
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        paint_code(&result.code)
    );
    println!("{}", "═".repeat(60).cyan());

    let length = result.code.length();
    let max_entropy = (Feedback::all(length).count() as f64).log2();

    println!("\n📊 Against all {} codes:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        create_progress_bar(result.entropy, max_entropy, 30).green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Worst case:  {} codes remain", result.worst_case);
    println!(
        "   Expected:    {:.1} codes remain",
        result.expected_remaining
    );

    println!("\n📈 {}", "Buckets:".bright_cyan().bold());
    for &(feedback, size) in &result.buckets {
        let bar = create_progress_bar(size as f64, result.worst_case as f64, 30);
        println!(
            "   {} {:<7} {} {size:5}",
            feedback_pegs(feedback, length),
            feedback.to_string(),
            bar.green()
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
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();
    for (guess_count, count) in counts {
        let pct = (count as f64 / result.total_games.max(1) as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count:3}: {bar} {count:4} ({pct:5.1}%)");
    }
}
