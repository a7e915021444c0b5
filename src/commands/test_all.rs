//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every code of a length and generates statistics.

use crate::core::{Code, enumerate};
use crate::error::SolverError;
use crate::solver::{SecretOracle, SessionConfig};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Code,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub strategy: &'static str,
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub first_guess: Option<Code>,
    pub worst_secrets: Vec<(Code, usize)>,
}

/// Run the configured solver on every secret (or the first `limit` in index order)
///
/// # Errors
///
/// Propagates any [`SolverError`] raised by a session.
pub fn run_test_all(config: SessionConfig, limit: Option<usize>) -> Result<TestAllStatistics, SolverError> {
    let secrets: Vec<Code> = enumerate(config.code_length)
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🎯 Testing {} secrets...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut results: Vec<SecretTestResult> = Vec::with_capacity(secrets.len());
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    let mut first_guess = None;

    let total_start = Instant::now();

    for (idx, secret) in secrets.iter().enumerate() {
        let mut session = config.build_session();
        let outcome = session.run(&mut SecretOracle::new(*secret))?;

        let num_guesses = session.history().len();
        if first_guess.is_none() {
            first_guess = session.history().first().map(|round| round.guess);
        }

        let success = outcome.is_solved();
        if success {
            *guess_distribution.entry(num_guesses).or_insert(0) += 1;
        }
        results.push(SecretTestResult {
            secret: *secret,
            num_guesses,
            success,
        });

        if idx % 10 == 0 {
            let avg =
                results.iter().map(|r| r.num_guesses).sum::<usize>() as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();
    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut worst_secrets: Vec<(Code, usize)> =
        solved.iter().map(|r| (r.secret, r.num_guesses)).collect();
    worst_secrets.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
    worst_secrets.truncate(10);

    Ok(TestAllStatistics {
        strategy: config.strategy.name(),
        total_secrets: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        first_guess,
        worst_secrets,
    })
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(60));
    println!(" Test Results ({}) ", stats.strategy);
    println!("{}", "═".repeat(60));

    let total = stats.total_secrets.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Worst case:           {}", stats.max_guesses);
    println!("  Total time:           {:.2}s", stats.total_time.as_secs_f64());
    println!(
        "  Time per secret:      {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );
    if let Some(first) = stats.first_guess {
        println!("  Opening guess:        {first}");
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    let mut counts: Vec<(usize, usize)> = stats
        .guess_distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();
    for (guesses, count) in counts {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(1);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:3} guesses: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.worst_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, guesses) in stats.worst_secrets.iter().take(5) {
            println!("  {} ({} guesses)", secret.to_string().yellow(), guesses);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodeLength;
    use crate::solver::StrategyKind;

    fn config(pegs: usize, strategy: StrategyKind) -> SessionConfig {
        SessionConfig::new(CodeLength::new(pegs).unwrap(), strategy)
    }

    #[test]
    fn every_two_peg_secret_is_solved() {
        for strategy in StrategyKind::ALL {
            let stats = run_test_all(config(2, strategy), None).unwrap();
            assert_eq!(stats.total_secrets, 36);
            assert_eq!(stats.solved, 36, "{strategy}");
            assert_eq!(stats.failed, 0);
            assert_eq!(stats.guess_distribution.values().sum::<usize>(), 36);
        }
    }

    #[test]
    fn brute_force_worst_case_is_whole_codespace() {
        let stats = run_test_all(config(2, StrategyKind::BruteForce), None).unwrap();
        assert_eq!(stats.min_guesses, 1);
        assert_eq!(stats.max_guesses, 36);
        assert_eq!(stats.worst_secrets[0], ("OO".parse::<Code>().unwrap(), 36));
        assert!((stats.average_guesses - 18.5).abs() < 1e-9);
    }

    #[test]
    fn limit_restricts_secrets() {
        let stats = run_test_all(config(4, StrategyKind::Minimax), Some(5)).unwrap();
        assert_eq!(stats.total_secrets, 5);
        assert_eq!(stats.first_guess.unwrap().to_string(), "Y Y B B");
        assert!(stats.max_guesses <= 5);
    }
}
