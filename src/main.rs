//! Mastermind Solver - CLI
//!
//! Plays six-color Mastermind with 2 to 5 pegs, either against a person
//! keeping the secret or against known secrets for analysis.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, analyze_code, print_test_all_statistics, run_benchmark, run_simple,
        run_test_all, seeded_secrets, solve_secret,
    },
    core::{Code, CodeLength},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{SessionConfig, StrategyKind},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind solver with brute force, constraint filtering and Knuth minimax",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default), filter, brute-force
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Number of pegs in the secret (2-5)
    #[arg(
        short = 'n',
        long,
        global = true,
        default_value_t = 4,
        value_parser = clap::value_parser!(u8).range(2..=5)
    )]
    length: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you keep the secret and score each guess (default)
    Play,

    /// Solve a known secret
    Solve {
        /// The secret, e.g. "RGBY" or "R G B Y"
        secret: String,

        /// Show candidate counts for every round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a code splits the codespace as a guess
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'c', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible secrets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Build the session settings from the global flags
fn session_config(cli: &Cli) -> Result<SessionConfig> {
    let code_length = CodeLength::new(usize::from(cli.length))?;
    let strategy = StrategyKind::from_name(&cli.strategy).ok_or_else(|| {
        anyhow!(
            "unknown strategy '{}' (expected minimax, filter or brute-force)",
            cli.strategy
        )
    })?;
    Ok(SessionConfig::new(code_length, strategy))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = session_config(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_simple(config),
        Commands::Solve { secret, verbose } => run_solve_command(config, &secret, verbose),
        Commands::Analyze { code } => run_analyze_command(&code),
        Commands::Benchmark { count, seed } => run_benchmark_command(config, count, seed),
        Commands::TestAll { limit } => run_test_all_command(config, limit),
    }
}

fn parse_code(text: &str) -> Result<Code> {
    text.parse::<Code>()
        .with_context(|| format!("invalid code '{text}'"))
}

fn run_solve_command(config: SessionConfig, secret: &str, verbose: bool) -> Result<()> {
    // The secret decides the code length
    let secret = parse_code(secret)?;
    let result = solve_secret(SolveConfig::new(secret, config.strategy))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(code: &str) -> Result<()> {
    let result = analyze_code(&parse_code(code)?);
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(config: SessionConfig, count: usize, seed: Option<u64>) -> Result<()> {
    match seed {
        Some(seed) => println!(
            "Running {} benchmark on {count} random {}-peg secrets (seed {seed})...",
            config.strategy, config.code_length
        ),
        None => println!(
            "Running {} benchmark on {count} random {}-peg secrets...",
            config.strategy, config.code_length
        ),
    }

    let secrets = seeded_secrets(config.code_length, count, seed)?;
    let result = run_benchmark(config, &secrets)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(config: SessionConfig, limit: Option<usize>) -> Result<()> {
    println!("\n{}", "═".repeat(60));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(60));
    println!(
        "\nTesting against all {} codes of {} pegs",
        config.code_length.space_size(),
        config.code_length
    );
    println!("Strategy: {}", config.strategy);
    println!();

    let stats = run_test_all(config, limit)?;
    print_test_all_statistics(&stats);
    Ok(())
}
