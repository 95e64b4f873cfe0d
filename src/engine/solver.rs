//! Turn-by-turn solver state machine
//!
//! A `Solver` owns the live candidate set, the turn counter, and the current
//! guess with its precomputed bucket table. Feedback narrows the candidate
//! set to one bucket and triggers re-selection of the next guess. A single
//! instance is not safe for concurrent mutation; callers serialize access.

use super::bucket::BucketTable;
use super::score::Metric;
use super::select::{self, Selection};
use crate::core::{Feedback, Word, WordError};
use crate::vocab::Vocabulary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::sync::Arc;

/// Cached optimal opening guess for the standard word lists
///
/// This is the selector's best first move over the full answer list under the
/// expected-remaining metric, cached so a new game skips the expensive
/// first-turn scan. It is derivable: rerun `select_best` over the initial
/// candidate set whenever the word lists change. Constructors fall back to
/// that scan when the configured vocabulary does not contain this word.
pub const OPENING_GUESS: &str = "raise";

/// Turn budget used by the guess-universe policy
///
/// Once the remaining candidates plus the turns already taken fit within the
/// budget, the selector only considers guesses that could win outright.
pub const TURN_BUDGET: u32 = 6;

/// Error type for solver operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Feedback string is not exactly 5 symbols drawn from {0, 1, 2}
    InvalidFeedbackFormat(String),
    /// The feedback is inconsistent with every remaining candidate
    NoCandidatesRemain(Feedback),
    /// An overriding guess is not a valid 5-letter word
    InvalidWordFormat(WordError),
    /// The vocabulary has no answer words to solve for
    EmptyVocabulary,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFeedbackFormat(code) => {
                write!(
                    f,
                    "invalid feedback '{code}': expected exactly 5 symbols from {{0, 1, 2}}"
                )
            }
            Self::NoCandidatesRemain(code) => {
                write!(
                    f,
                    "no remaining candidate matches feedback {code}; an earlier feedback entry \
                     may be mis-scored, or the answer is not in the word list"
                )
            }
            Self::InvalidWordFormat(err) => write!(f, "invalid guess: {err}"),
            Self::EmptyVocabulary => write!(f, "vocabulary contains no answer words"),
        }
    }
}

impl std::error::Error for SolverError {}

/// Wordle solver state machine
pub struct Solver {
    vocab: Arc<Vocabulary>,
    metric: Metric,
    rng: StdRng,
    candidates: Vec<Word>,
    guess_count: u32,
    current_guess: Word,
    buckets: BucketTable,
    solved: bool,
}

impl Solver {
    /// Create a solver with the default metric and an OS-seeded RNG
    ///
    /// The candidate set starts as the vocabulary's full answer list and the
    /// current guess is the cached opening word (or a fresh selector scan if
    /// the vocabulary lacks it).
    ///
    /// # Errors
    /// Returns `SolverError::EmptyVocabulary` if the vocabulary has no
    /// answers.
    pub fn new(vocab: Arc<Vocabulary>) -> Result<Self, SolverError> {
        Self::with_options(vocab, Metric::default(), StdRng::from_os_rng())
    }

    /// Create a solver with a fixed RNG seed for reproducible tie-breaking
    ///
    /// # Errors
    /// Returns `SolverError::EmptyVocabulary` if the vocabulary has no
    /// answers.
    pub fn seeded(vocab: Arc<Vocabulary>, metric: Metric, seed: u64) -> Result<Self, SolverError> {
        Self::with_options(vocab, metric, StdRng::seed_from_u64(seed))
    }

    /// Create a solver with explicit metric and RNG
    ///
    /// # Errors
    /// Returns `SolverError::EmptyVocabulary` if the vocabulary has no
    /// answers.
    pub fn with_options(
        vocab: Arc<Vocabulary>,
        metric: Metric,
        mut rng: StdRng,
    ) -> Result<Self, SolverError> {
        let candidates: Vec<Word> = vocab.answers().to_vec();
        if candidates.is_empty() {
            return Err(SolverError::EmptyVocabulary);
        }

        let opener = vocab
            .guess_universe()
            .iter()
            .copied()
            .find(|word| word.text() == OPENING_GUESS);

        let (current_guess, buckets) = match opener {
            Some(word) => (word, BucketTable::partition(&word, &candidates)),
            None => {
                let Selection { guess, buckets } =
                    select::select_best(metric, &candidates, vocab.guess_universe(), &mut rng)
                        .ok_or(SolverError::EmptyVocabulary)?;
                (guess, buckets)
            }
        };

        Ok(Self {
            vocab,
            metric,
            rng,
            candidates,
            guess_count: 0,
            current_guess,
            buckets,
            solved: false,
        })
    }

    /// Apply the feedback observed for the current guess and return the next
    /// guess
    ///
    /// Narrows the candidate set to the bucket matching `code`, bumps the
    /// turn counter, and re-runs the selector under the guess-universe
    /// policy. The terminal code `"22222"` marks the game solved and returns
    /// the winning word.
    ///
    /// # Errors
    /// - `InvalidFeedbackFormat` if `code` is not 5 symbols over {0, 1, 2}
    /// - `NoCandidatesRemain` if no remaining candidate produces `code`
    pub fn apply_feedback(&mut self, code: &str) -> Result<Word, SolverError> {
        let code = Feedback::parse(code)
            .ok_or_else(|| SolverError::InvalidFeedbackFormat(code.to_string()))?;

        let bucket = self.buckets.take(code);
        if bucket.is_empty() {
            return Err(SolverError::NoCandidatesRemain(code));
        }

        self.candidates = bucket;
        self.guess_count += 1;

        if code.is_solved() {
            // The bucket for the terminal code can only hold the guess itself
            let winner = self.candidates[0];
            self.current_guess = winner;
            self.buckets = BucketTable::partition(&winner, &self.candidates);
            self.solved = true;
            return Ok(winner);
        }

        // Universe policy, re-evaluated every turn: once the endgame fits in
        // the turn budget, only offer guesses that could win outright.
        let endgame = self.candidates.len() as u32 + self.guess_count <= TURN_BUDGET;

        let selection = if endgame {
            select::select_best(self.metric, &self.candidates, &self.candidates, &mut self.rng)
        } else {
            select::select_best(
                self.metric,
                &self.candidates,
                self.vocab.guess_universe(),
                &mut self.rng,
            )
        }
        .ok_or(SolverError::NoCandidatesRemain(code))?;

        self.current_guess = selection.guess;
        self.buckets = selection.buckets;

        Ok(self.current_guess)
    }

    /// Force the next guess to `word`, keeping the bookkeeping consistent
    ///
    /// Normalizes case, replaces the current guess, and repartitions the
    /// candidate set against it so subsequent `apply_feedback` calls work as
    /// usual.
    ///
    /// # Errors
    /// Returns `InvalidWordFormat` if `word` is not exactly 5 alphabetic
    /// symbols.
    pub fn override_guess(&mut self, word: &str) -> Result<Word, SolverError> {
        let word = Word::new(word).map_err(SolverError::InvalidWordFormat)?;

        self.current_guess = word;
        self.buckets = BucketTable::partition(&word, &self.candidates);

        Ok(word)
    }

    /// The guess the solver currently recommends
    #[inline]
    #[must_use]
    pub const fn current_guess(&self) -> Word {
        self.current_guess
    }

    /// Bucket table of the current candidate set under the current guess
    #[inline]
    #[must_use]
    pub const fn current_buckets(&self) -> &BucketTable {
        &self.buckets
    }

    /// Words still consistent with all feedback received so far
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Number of guesses whose feedback has been applied
    #[inline]
    #[must_use]
    pub const fn turns(&self) -> u32 {
        self.guess_count
    }

    /// Whether the terminal all-exact feedback has been applied
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(answers: &[&str], extras: &[&str]) -> Arc<Vocabulary> {
        let answers = answers.iter().map(|t| Word::new(t).unwrap()).collect();
        let extras = extras.iter().map(|t| Word::new(t).unwrap()).collect();
        Arc::new(Vocabulary::new(answers, extras))
    }

    fn test_solver(answers: &[&str]) -> Solver {
        Solver::seeded(vocab(answers, &[]), Metric::ExpectedRemaining, 42).unwrap()
    }

    #[test]
    fn new_game_starts_with_full_candidate_set() {
        let solver = test_solver(&["adieu", "route", "crane"]);

        assert_eq!(solver.remaining(), 3);
        assert_eq!(solver.turns(), 0);
        assert!(!solver.is_solved());
        assert_eq!(solver.current_buckets().total(), 3);
    }

    #[test]
    fn uses_cached_opener_when_available() {
        let solver = test_solver(&["raise", "route", "crane"]);
        assert_eq!(solver.current_guess().text(), OPENING_GUESS);
    }

    #[test]
    fn falls_back_to_selector_without_cached_opener() {
        let solver = test_solver(&["adieu", "route", "crane"]);

        // The opener must come from the vocabulary and partition the full set
        let guess = solver.current_guess();
        assert!(solver.candidates().contains(&guess));
        assert_eq!(solver.current_buckets().total(), 3);
    }

    #[test]
    fn empty_vocabulary_rejected() {
        let result = Solver::seeded(vocab(&[], &[]), Metric::ExpectedRemaining, 0);
        assert!(matches!(result, Err(SolverError::EmptyVocabulary)));
    }

    #[test]
    fn apply_feedback_narrows_candidates() {
        let mut solver = test_solver(&["adieu", "route", "crane"]);

        let guess = solver.current_guess();
        let answer = Word::new("crane").unwrap();
        let code = Feedback::evaluate(&guess, &answer).to_string();

        let before = solver.remaining();
        let next = solver.apply_feedback(&code).unwrap();

        assert!(solver.remaining() < before || solver.is_solved());
        assert_eq!(solver.turns(), 1);
        assert!(solver.candidates().contains(&answer));
        assert!(solver.candidates().contains(&next) || !solver.is_solved());
    }

    #[test]
    fn plays_out_full_game() {
        let answer = Word::new("crane").unwrap();
        let mut solver = test_solver(&["adieu", "route", "crane", "slate", "grate"]);

        for _ in 0..TURN_BUDGET {
            let guess = solver.current_guess();
            let code = Feedback::evaluate(&guess, &answer);

            // The true answer stays consistent with all feedback
            assert!(solver.candidates().contains(&answer));

            let next = solver.apply_feedback(&code.to_string()).unwrap();

            if solver.is_solved() {
                assert_eq!(next, answer);
                return;
            }
        }

        panic!("game did not finish within the turn budget");
    }

    #[test]
    fn terminal_feedback_marks_solved() {
        let mut solver = test_solver(&["adieu", "route", "crane"]);

        // Force a known guess so the terminal bucket is that word
        solver.override_guess("route").unwrap();
        let winner = solver.apply_feedback("22222").unwrap();

        assert!(solver.is_solved());
        assert_eq!(winner.text(), "route");
        assert_eq!(solver.remaining(), 1);
        assert_eq!(solver.turns(), 1);
    }

    #[test]
    fn invalid_feedback_rejected() {
        let mut solver = test_solver(&["adieu", "route", "crane"]);

        for bad in ["999", "12", "abcde", "", "012100", "00003"] {
            assert!(matches!(
                solver.apply_feedback(bad),
                Err(SolverError::InvalidFeedbackFormat(_))
            ));
        }

        // Rejected feedback leaves the state untouched
        assert_eq!(solver.remaining(), 3);
        assert_eq!(solver.turns(), 0);
    }

    #[test]
    fn inconsistent_feedback_rejected() {
        let mut solver = test_solver(&["adieu", "route", "crane"]);
        solver.override_guess("route").unwrap();

        // No candidate produces all-present feedback for ROUTE
        let result = solver.apply_feedback("11111");
        assert!(matches!(result, Err(SolverError::NoCandidatesRemain(_))));
        assert_eq!(solver.turns(), 0);
    }

    #[test]
    fn override_guess_normalizes_and_repartitions() {
        let mut solver = test_solver(&["adieu", "route", "crane"]);

        let word = solver.override_guess("CRANE").unwrap();

        assert_eq!(word.text(), "crane");
        assert_eq!(solver.current_guess().text(), "crane");

        let expected = BucketTable::partition(&word, solver.candidates());
        assert_eq!(*solver.current_buckets(), expected);
    }

    #[test]
    fn override_guess_rejects_invalid_words() {
        let mut solver = test_solver(&["adieu", "route", "crane"]);

        assert!(matches!(
            solver.override_guess("ab1de"),
            Err(SolverError::InvalidWordFormat(_))
        ));
        assert!(matches!(
            solver.override_guess("toolong"),
            Err(SolverError::InvalidWordFormat(_))
        ));
    }

    #[test]
    fn seeded_solvers_are_reproducible() {
        let lists = &["adieu", "route", "crane", "slate", "grate"];
        let mut first = test_solver(lists);
        let mut second = test_solver(lists);

        assert_eq!(first.current_guess(), second.current_guess());

        let answer = Word::new("grate").unwrap();
        let code = Feedback::evaluate(&first.current_guess(), &answer).to_string();

        assert_eq!(
            first.apply_feedback(&code).unwrap(),
            second.apply_feedback(&code).unwrap()
        );
    }

    #[test]
    fn endgame_restricts_universe_to_candidates() {
        // Few candidates and extras available: the next guess must come from
        // the candidate set, not the wider universe.
        let vocab = vocab(&["crate", "grate", "irate"], &["outer", "ratio"]);
        let mut solver = Solver::seeded(vocab, Metric::ExpectedRemaining, 9).unwrap();

        solver.override_guess("slate").unwrap();
        let answer = Word::new("crate").unwrap();
        let code = Feedback::evaluate(&solver.current_guess(), &answer).to_string();

        let next = solver.apply_feedback(&code).unwrap();
        assert!(solver.candidates().contains(&next));
    }
}
