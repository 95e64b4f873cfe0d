//! Partitioning a candidate set by feedback outcome
//!
//! For a fixed guess, every candidate falls into exactly one bucket keyed by
//! the feedback code it would produce. The table is a fixed 243-slot array
//! indexed by the packed code, so the full key space is covered without
//! dynamic keys.

use crate::core::{CODE_COUNT, Feedback, Word};

/// Buckets of candidates keyed by packed feedback code
///
/// Invariant: the non-empty buckets exactly partition the candidate set the
/// table was built from, and each bucket preserves the candidates' input
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketTable {
    slots: [Vec<Word>; CODE_COUNT],
}

impl BucketTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Partition `candidates` by the feedback each would produce for `guess`
    ///
    /// Cost: O(|candidates| × word length).
    #[must_use]
    pub fn partition(guess: &Word, candidates: &[Word]) -> Self {
        let mut table = Self::new();

        for &candidate in candidates {
            let code = Feedback::evaluate(guess, &candidate);
            table.slots[code.index()].push(candidate);
        }

        table
    }

    /// Get the candidates in the bucket for `code`
    ///
    /// Returns an empty slice if no candidate produces that code.
    #[inline]
    #[must_use]
    pub fn bucket(&self, code: Feedback) -> &[Word] {
        &self.slots[code.index()]
    }

    /// Remove and return the bucket for `code`
    #[inline]
    pub fn take(&mut self, code: Feedback) -> Vec<Word> {
        std::mem::take(&mut self.slots[code.index()])
    }

    /// Iterate over the non-empty buckets in code order
    pub fn iter(&self) -> impl Iterator<Item = (Feedback, &[Word])> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, members)| !members.is_empty())
            .map(|(index, members)| (Feedback::new(index as u8), members.as_slice()))
    }

    /// Total number of candidates across all buckets
    #[must_use]
    pub fn total(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Number of non-empty buckets
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.slots.iter().filter(|members| !members.is_empty()).count()
    }
}

impl Default for BucketTable {
    fn default() -> Self {
        Self::new()
    }
}
