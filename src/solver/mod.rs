//! Mastermind solving algorithms
//!
//! Three strategies share one trait and are driven by a [`Session`] against
//! an [`Oracle`] that knows the secret.

mod brute_force;
mod candidates;
mod engine;
mod filter;
pub mod minimax;
mod oracle;
pub mod strategy;

pub use brute_force::BruteForce;
pub use candidates::CandidateSet;
pub use engine::{Outcome, Round, Session, SessionConfig};
pub use filter::ConstraintFilter;
pub use minimax::Minimax;
pub use oracle::{Oracle, OracleResult, SecretOracle};
pub use strategy::{Strategy, StrategyKind, StrategyType};
