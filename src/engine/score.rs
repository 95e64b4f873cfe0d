//! Guess scoring metrics
//!
//! The primary metric estimates the number of candidates that remain after a
//! guess is played, in expectation over a uniform prior on the true answer,
//! and credits a guess for being itself a possible answer (it can end the
//! game outright with probability 1/total). Lower is better.
//!
//! Pure Shannon-entropy maximization is kept as a simpler alternative; it
//! ignores the can-win-outright credit, so when guesses are drawn from the
//! candidate set it is strictly dominated by the expected-remaining metric.

use super::bucket::BucketTable;
use crate::core::Feedback;

/// Scoring metric for ranking candidate guesses (lower is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Expected remaining candidates, weighted by the chance the guess is
    /// itself the answer (primary)
    #[default]
    ExpectedRemaining,
    /// Negated Shannon entropy of the bucket distribution (alternative)
    Entropy,
}

impl Metric {
    /// Create a metric from a name string
    ///
    /// Supported names: "expected", "entropy". Defaults to the
    /// expected-remaining metric if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "entropy" => Self::Entropy,
            _ => Self::ExpectedRemaining,
        }
    }

    /// Score a bucket partition; lower is better for both metrics
    #[must_use]
    pub fn score(self, buckets: &BucketTable) -> f64 {
        match self {
            Self::ExpectedRemaining => expected_remaining(buckets),
            Self::Entropy => -shannon_entropy(buckets),
        }
    }
}

/// Expected number of remaining candidates after the guess is played
///
/// Let the all-exact bucket have size `a` (0 or 1; present only when the
/// guess is itself a candidate) and the other buckets sum to `rest`. A
/// weighted bucket-size entropy
///
/// `H = log2(rest) - (Σ nᵢ·log2(nᵢ)) / rest`
///
/// measures how evenly the guess splits the remainder; the score is then
/// `rest² / (rest + 1) / 2^H` when the exact bucket exists, `total / 2^H`
/// otherwise, and 0 when all remaining mass is in the exact bucket.
#[must_use]
pub fn expected_remaining(buckets: &BucketTable) -> f64 {
    let total = buckets.total();
    let exact = buckets.bucket(Feedback::SOLVED).len();
    let rest = total - exact;

    if rest == 0 {
        if exact == 0 {
            // Empty partition: nothing to score. Unreachable for a non-empty
            // candidate set and a valid guess.
            debug_assert!(false, "scored an empty bucket partition");
            return f64::INFINITY;
        }
        // Guessing the answer solves immediately
        return 0.0;
    }

    let rest_f = rest as f64;

    let weighted_sizes: f64 = buckets
        .iter()
        .filter(|(code, _)| !code.is_solved())
        .map(|(_, members)| {
            let n = members.len() as f64;
            n * n.log2()
        })
        .sum();

    let evenness = rest_f.log2() - weighted_sizes / rest_f;

    if exact > 0 {
        rest_f * rest_f / (rest_f + 1.0) / evenness.exp2()
    } else {
        total as f64 / evenness.exp2()
    }
}

/// Shannon entropy of the bucket distribution in bits
///
/// `H = -Σ p·log2(p)` over all non-empty buckets, including the exact one.
/// Zero for a single-bucket partition, maximized by an even split.
#[must_use]
pub fn shannon_entropy(buckets: &BucketTable) -> f64 {
    let total = buckets.total() as f64;

    if total == 0.0 {
        return 0.0;
    }

    buckets
        .iter()
        .map(|(_, members)| {
            let p = members.len() as f64 / total;
            -p * p.log2()
        })
        .sum()
}
