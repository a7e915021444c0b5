//! Simple interactive CLI mode
//!
//! The human keeps the secret and scores each guess; the solver does the rest.

use crate::core::{Code, CodeLength, Feedback};
use crate::output::formatters::paint_code;
use crate::output::print_round;
use crate::solver::{Oracle, OracleResult, Outcome, SessionConfig};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Oracle that asks a person for feedback on each guess
///
/// Accepts `p c` (also `p,c` or `p/c`), `win` when the guess is right, and
/// `quit` to stop. Invalid input is reported and asked for again. End of
/// input counts as `quit`.
pub struct ConsoleOracle<R, W> {
    input: R,
    output: W,
    length: CodeLength,
    turn: usize,
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> ConsoleOracle<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W, length: CodeLength) -> Self {
        Self {
            input,
            output,
            length,
            turn: 0,
            error: None,
        }
    }

    /// Start counting turns from one again
    pub fn reset(&mut self) {
        self.turn = 0;
    }

    /// The I/O error that ended the last session, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Prompt and read one trimmed line, `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns any error from writing the prompt or reading the answer.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    fn prompt(&mut self, guess: &Code) -> io::Result<OracleResult> {
        self.turn += 1;
        writeln!(self.output, "\nTurn {}: {}", self.turn, paint_code(guess))?;

        loop {
            let Some(answer) = self.ask("Feedback (p c, 'win', or 'quit')")? else {
                return Ok(OracleResult::Abort);
            };

            match answer.as_str() {
                "quit" | "q" | "exit" => return Ok(OracleResult::Abort),
                "win" | "w" | "correct" | "solved" => return Ok(OracleResult::Solved),
                text => match text.parse::<Feedback>().and_then(|fb| fb.validate(self.length)) {
                    Ok(feedback) => return Ok(OracleResult::Feedback(feedback)),
                    Err(e) => writeln!(self.output, "❌ {e}")?,
                },
            }
        }
    }
}

impl<R: BufRead, W: Write> Oracle for ConsoleOracle<R, W> {
    fn evaluate(&mut self, guess: &Code) -> OracleResult {
        match self.prompt(guess) {
            Ok(result) => result,
            Err(e) => {
                self.error = Some(e);
                OracleResult::Abort
            }
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails or the session rejects the
/// feedback it was given.
pub fn run_simple(config: SessionConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Mastermind Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Think of a secret of {} pegs using Y B G R P O. I'll guess it with {}.",
        config.code_length,
        config.strategy.name().bright_yellow()
    );
    println!("After each guess, enter the feedback as two numbers:\n");
    println!("  - pegs with the right color in the right position");
    println!("  - pegs with the right color in the wrong position");
    println!("  - Or type 'win' if I got it right!\n");
    println!("Commands: 'quit' to exit\n");

    let stdin = io::stdin();
    let mut oracle = ConsoleOracle::new(stdin.lock(), io::stdout(), config.code_length);

    loop {
        oracle.reset();
        let mut session = config.build_session();
        let mut turn = 0;
        let outcome = session.run_with(&mut oracle, |round| {
            turn += 1;
            print_round(turn, round);
        })?;

        if let Some(e) = oracle.take_error() {
            return Err(e.into());
        }

        match outcome {
            Outcome::Solved(secret) => {
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!(
                    "    🎉  Solved {} in {} {}",
                    paint_code(&secret),
                    turn.to_string().bright_cyan().bold(),
                    if turn == 1 { "guess" } else { "guesses" }
                );
                println!("{}", "═".repeat(60).bright_cyan());
            }
            Outcome::Exhausted => {
                println!(
                    "\n{}",
                    "❌ No code matches that feedback. One of the answers was probably off."
                        .red()
                );
            }
            Outcome::Aborted => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }

        match oracle.ask("\nPlay again? (yes/no)")?.as_deref() {
            Some("yes" | "y") => println!("\n🔄 New game started!"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}
