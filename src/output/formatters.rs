//! Formatting utilities for terminal output

use crate::core::{Code, CodeLength, Color, Feedback};
use colored::{ColoredString, Colorize};

/// Format feedback as key pegs
///
/// `●` for each exact match, `○` for each color-only match and `·` for the
/// pegs that scored nothing.
#[must_use]
pub fn feedback_pegs(feedback: Feedback, length: CodeLength) -> String {
    let exact = usize::from(feedback.exact());
    let color_only = usize::from(feedback.color_only());
    let blank = length.get().saturating_sub(exact + color_only);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(color_only), "·".repeat(blank))
}

/// A color letter painted in its own color
#[must_use]
pub fn paint(color: Color) -> ColoredString {
    let letter = color.letter().to_string();
    match color {
        Color::Yellow => letter.bright_yellow(),
        Color::Blue => letter.bright_blue(),
        Color::Green => letter.bright_green(),
        Color::Red => letter.bright_red(),
        Color::Pink => letter.bright_magenta(),
        Color::Orange => letter.truecolor(255, 140, 0),
    }
    .bold()
}

/// Format a code with every peg painted in its color
#[must_use]
pub fn paint_code(code: &Code) -> String {
    code.pegs()
        .iter()
        .map(|&peg| paint(peg).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(pegs: usize) -> CodeLength {
        CodeLength::new(pegs).unwrap()
    }

    #[test]
    fn feedback_pegs_mixed() {
        assert_eq!(feedback_pegs(Feedback::new(1, 2), length(4)), "●○○·");
    }

    #[test]
    fn feedback_pegs_solved() {
        assert_eq!(feedback_pegs(Feedback::solved(length(5)), length(5)), "●●●●●");
    }

    #[test]
    fn feedback_pegs_nothing() {
        assert_eq!(feedback_pegs(Feedback::default(), length(3)), "···");
    }

    #[test]
    fn painted_code_keeps_letters() {
        colored::control::set_override(false);
        assert_eq!(paint_code(&"YBGRO".parse().unwrap()), "Y B G R O");
        colored::control::unset_override();
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
