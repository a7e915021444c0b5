//! Benchmark command
//!
//! Tests solver performance across randomly drawn secrets.

use crate::core::{Code, CodeLength, decode};
use crate::error::SolverError;
use crate::solver::{Outcome, SecretOracle, SessionConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Draw `count` secrets uniformly from the codespace
///
/// # Errors
///
/// Never fails for indices drawn below `6^N`; the error is the decoder's.
pub fn random_secrets<R: Rng>(
    rng: &mut R,
    length: CodeLength,
    count: usize,
) -> Result<Vec<Code>, SolverError> {
    (0..count)
        .map(|_| decode(rng.random_range(0..length.space_size()), length))
        .collect()
}

/// Draw secrets from a seeded generator, or from OS entropy without a seed
///
/// # Errors
///
/// See [`random_secrets`].
pub fn seeded_secrets(
    length: CodeLength,
    count: usize,
    seed: Option<u64>,
) -> Result<Vec<Code>, SolverError> {
    match seed {
        Some(seed) => random_secrets(&mut StdRng::seed_from_u64(seed), length, count),
        None => random_secrets(&mut rand::rng(), length, count),
    }
}

/// Run benchmark on a set of secrets
///
/// Games that end without a solution count towards `total_games` but not
/// towards the guess statistics.
///
/// # Errors
///
/// Propagates any [`SolverError`] raised by a session.
pub fn run_benchmark(config: SessionConfig, secrets: &[Code]) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in secrets {
        let mut session = config.build_session();
        let outcome = session.run(&mut SecretOracle::new(*secret))?;
        if !matches!(outcome, Outcome::Solved(_)) {
            continue;
        }

        let guesses = session.history().len();
        solved += 1;
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_games = secrets.len();

    Ok(BenchmarkResult {
        total_games,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
