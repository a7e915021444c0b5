//! Mastermind Solver
//!
//! Solves six-color Mastermind with 2 to 5 pegs using brute force, constraint
//! filtering, or Knuth's minimax strategy.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, score};
//! use mastermind_solver::solver::{Outcome, SecretOracle, SessionConfig};
//!
//! // Score a guess
//! let guess: Code = "YYBB".parse().unwrap();
//! let secret: Code = "BGRY".parse().unwrap();
//! println!("Feedback: {}", score(&guess, &secret).unwrap());
//!
//! // Solve it
//! let mut session = SessionConfig::default().build_session();
//! let outcome = session.run(&mut SecretOracle::new(secret)).unwrap();
//! assert_eq!(outcome, Outcome::Solved(secret));
//! ```

// Core domain types
pub mod core;

// Error type shared by the library
pub mod error;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
