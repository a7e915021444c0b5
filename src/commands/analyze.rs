//! Code analysis command
//!
//! Splits the full codespace by the feedback a code would receive and reports
//! how informative it is as an opening guess.

use crate::core::{Code, Feedback, enumerate};
use crate::solver::minimax::partition;

/// Result of analyzing a code
pub struct AnalysisResult {
    pub code: Code,
    /// Non-empty feedback buckets, best feedback first
    pub buckets: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
}

/// Analyze a code as a guess against every code of its length
///
/// Shannon entropy is measured in bits over the bucket sizes; the expected
/// remaining count is `Σ size² / total`.
#[must_use]
pub fn analyze_code(code: &Code) -> AnalysisResult {
    let universe: Vec<Code> = enumerate(code.length()).collect();
    let total_candidates = universe.len();

    let mut buckets: Vec<(Feedback, usize)> = partition(code, &universe).into_iter().collect();
    buckets.sort_by(|a, b| b.0.cmp(&a.0));

    let worst_case = buckets.iter().map(|&(_, size)| size).max().unwrap_or(0);

    let total = total_candidates as f64;
    let entropy = buckets
        .iter()
        .map(|&(_, size)| {
            let p = size as f64 / total;
            -p * p.log2()
        })
        .sum();
    let expected_remaining = buckets
        .iter()
        .map(|&(_, size)| (size * size) as f64)
        .sum::<f64>()
        / total;

    AnalysisResult {
        code: *code,
        buckets,
        worst_case,
        entropy,
        expected_remaining,
        total_candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> AnalysisResult {
        analyze_code(&text.parse().unwrap())
    }

    #[test]
    fn monochrome_two_pegs() {
        let result = analyze("YY");

        assert_eq!(result.total_candidates, 36);
        assert_eq!(result.worst_case, 25);
        assert_eq!(
            result.buckets,
            vec![
                (Feedback::new(2, 0), 1),
                (Feedback::new(1, 0), 10),
                (Feedback::new(0, 0), 25),
            ]
        );
    }

    #[test]
    fn buckets_cover_codespace() {
        let result = analyze("YYBB");
        let total: usize = result.buckets.iter().map(|&(_, size)| size).sum();
        assert_eq!(total, 1296);
        assert_eq!(result.worst_case, 256);
    }

    #[test]
    fn entropy_properties() {
        let mono = analyze("YYYY");
        let mixed = analyze("YBGR");

        assert!(mono.entropy > 0.0);
        assert!(mixed.entropy > mono.entropy);
        // Entropy is bounded by log2 of the number of buckets
        assert!(mixed.entropy <= (mixed.buckets.len() as f64).log2() + 1e-9);
        assert!(mixed.expected_remaining < mono.expected_remaining);
    }
}
