//! Verdict partition metrics
//!
//! Scoring a guess against every candidate splits the candidates into groups
//! by verdict. The largest group is the worst case for how many candidates
//! survive the guess.

use crate::core::{Code, Verdict};
use rustc_hash::FxHashMap;

/// How a guess splits the candidate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Number of distinct verdicts the guess can receive
    pub partitions: usize,
    /// Largest verdict group (worst-case remaining candidates)
    pub max_partition: usize,
    /// Expected remaining candidates if the secret is uniform over the space
    pub expected_remaining: f64,
    /// Shannon entropy of the verdict distribution in bits
    pub entropy: f64,
}

/// Calculate the maximum remaining candidates for a guess
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let guess = Code::new("AB").unwrap();
/// let candidates = vec![Code::new("AB").unwrap(), Code::new("CD").unwrap()];
///
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    group_by_verdict(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Calculate the full partition metrics for a guess
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            partitions: 0,
            max_partition: 0,
            expected_remaining: 0.0,
            entropy: 0.0,
        };
    }

    let groups = group_by_verdict(guess, candidates);
    let total = candidates.len() as f64;

    let mut max_partition = 0;
    let mut expected_remaining = 0.0;
    let mut entropy = 0.0;
    for &count in groups.values() {
        let p = count as f64 / total;
        max_partition = max_partition.max(count);
        expected_remaining += p * count as f64;
        entropy -= p * p.log2();
    }

    GuessMetrics {
        partitions: groups.len(),
        max_partition,
        expected_remaining,
        entropy,
    }
}

/// Group candidates by the verdict they give the guess
fn group_by_verdict(guess: &Code, candidates: &[Code]) -> FxHashMap<Verdict, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts.entry(Verdict::score(guess, candidate)).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|t| Code::new(t).unwrap()).collect()
    }

    #[test]
    fn max_remaining_all_same_verdict() {
        let guess = Code::new("FFFF").unwrap();
        let candidates = codes(&["AAAA", "BBBB", "CCCC"]);
        assert_eq!(calculate_max_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn max_remaining_perfect_split() {
        let guess = Code::new("ABCD").unwrap();
        let candidates = codes(&["ABCD", "FFFF", "ABDC"]);
        assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess = Code::new("ABCD").unwrap();
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
    }

    #[test]
    fn group_by_verdict_counts_everything() {
        let guess = Code::new("AB").unwrap();
        let candidates = codes(&["AB", "BA", "AC", "CA", "CD"]);
        let groups = group_by_verdict(&guess, &candidates);

        assert_eq!(groups.values().sum::<usize>(), 5);
        assert_eq!(groups[&Verdict::new(1, 0)], 1); // AC
        assert_eq!(groups[&Verdict::new(0, 1)], 1); // CA
    }

    #[test]
    fn metrics_for_even_split() {
        let guess = Code::new("AB").unwrap();
        let candidates = codes(&["AB", "BA", "CD", "AC"]);
        let metrics = calculate_metrics(&guess, &candidates);

        assert_eq!(metrics.partitions, 4);
        assert_eq!(metrics.max_partition, 1);
        assert!((metrics.expected_remaining - 1.0).abs() < 1e-9);
        assert!((metrics.entropy - 2.0).abs() < 1e-9);
    }

    #[test]
    fn metrics_for_no_information() {
        let guess = Code::new("ZZ").unwrap();
        let candidates = codes(&["AB", "CD"]);
        let metrics = calculate_metrics(&guess, &candidates);

        assert_eq!(metrics.partitions, 1);
        assert_eq!(metrics.max_partition, 2);
        assert!((metrics.expected_remaining - 2.0).abs() < 1e-9);
        assert!(metrics.entropy.abs() < 1e-9);
    }

    #[test]
    fn metrics_for_empty_candidates() {
        let guess = Code::new("AB").unwrap();
        let metrics = calculate_metrics(&guess, &[]);
        assert_eq!(metrics.partitions, 0);
        assert_eq!(metrics.max_partition, 0);
    }
}
