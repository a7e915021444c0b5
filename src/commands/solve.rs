//! Secret solving command
//!
//! Solves a known secret and returns every round played on the way.

use crate::core::Code;
use crate::error::SolverError;
use crate::solver::{Outcome, Round, SecretOracle, SessionConfig, Strategy, StrategyKind};

/// Configuration for solving a secret
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    pub secret: Code,
    pub strategy: StrategyKind,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Code, strategy: StrategyKind) -> Self {
        Self { secret, strategy }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub secret: Code,
    pub strategy: &'static str,
    pub outcome: Outcome,
    pub rounds: Vec<Round>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_solved()
    }

    /// Number of guesses made, including the winning one
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.rounds.len()
    }
}

/// Solve a known secret with the configured strategy
///
/// The code length is taken from the secret.
///
/// # Errors
///
/// Propagates any [`SolverError`] raised by the session. A secret oracle only
/// ever produces valid feedback, so in practice this succeeds.
pub fn solve_secret(config: SolveConfig) -> Result<SolveResult, SolverError> {
    let session_config = SessionConfig::new(config.secret.length(), config.strategy);
    let mut session = session_config.build_session();
    let mut oracle = SecretOracle::new(config.secret);

    let outcome = session.run(&mut oracle)?;

    Ok(SolveResult {
        secret: config.secret,
        strategy: session.strategy().name(),
        outcome,
        rounds: session.history().to_vec(),
    })
}
