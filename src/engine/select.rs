//! Best-guess selection over a guess universe
//!
//! Scores every eligible guess against the current candidate set and picks a
//! score-minimizing one. The scan is a read-only fan-out over immutable data,
//! so it is parallelized with rayon; the tie-break and final pick are pure
//! reductions over the per-guess scores and stay deterministic for a fixed
//! RNG.

use super::bucket::BucketTable;
use super::score::Metric;
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// A selected guess together with its partition of the candidate set
#[derive(Debug, Clone)]
pub struct Selection {
    pub guess: Word,
    pub buckets: BucketTable,
}

/// Select the best next guess from `universe` against `candidates`
///
/// Ties on the minimum score (exact floating-point equality; every guess is
/// scored by the same deterministic formula) are broken by preferring guesses
/// that are themselves candidates, then by a uniform random pick from
/// whatever tie set remains.
///
/// Returns `None` only when `universe` is empty.
#[must_use]
pub fn select_best<R: Rng + ?Sized>(
    metric: Metric,
    candidates: &[Word],
    universe: &[Word],
    rng: &mut R,
) -> Option<Selection> {
    if universe.is_empty() {
        return None;
    }

    let members: FxHashSet<Word> = candidates.iter().copied().collect();

    let scored: Vec<(usize, f64)> = universe
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let buckets = BucketTable::partition(guess, candidates);
            (index, metric.score(&buckets))
        })
        .collect();

    let best = scored
        .iter()
        .map(|&(_, score)| score)
        .fold(f64::INFINITY, f64::min);

    let mut tied: Vec<usize> = scored
        .iter()
        .filter(|&&(_, score)| score == best)
        .map(|&(index, _)| index)
        .collect();

    // Prefer tied guesses that could win outright this turn
    let winners: Vec<usize> = tied
        .iter()
        .copied()
        .filter(|&index| members.contains(&universe[index]))
        .collect();
    if !winners.is_empty() {
        tied = winners;
    }

    let choice = *tied.choose(rng)?;
    let guess = universe[choice];
    let buckets = BucketTable::partition(&guess, candidates);

    Some(Selection { guess, buckets })
}
