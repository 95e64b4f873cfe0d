//! Vocabulary configuration
//!
//! Holds the answer list and the extra allowed-guess list as explicit state
//! handed to each solver, so independent solvers and test fixtures can use
//! distinct word lists. Typically wrapped in an `Arc` and shared.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Answer words plus additional valid guesses
///
/// The guess universe (answers followed by the deduplicated extras) is
/// precomputed at construction.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    answers: Vec<Word>,
    universe: Vec<Word>,
}

impl Vocabulary {
    /// Build a vocabulary from answer words and extra guess-only words
    ///
    /// Extras already present among the answers are dropped so the universe
    /// holds each word once.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    /// use wordle_advisor::vocab::Vocabulary;
    ///
    /// let answers = vec![Word::new("crane").unwrap()];
    /// let extras = vec![Word::new("outer").unwrap(), Word::new("crane").unwrap()];
    ///
    /// let vocab = Vocabulary::new(answers, extras);
    /// assert_eq!(vocab.answers().len(), 1);
    /// assert_eq!(vocab.guess_universe().len(), 2);
    /// ```
    #[must_use]
    pub fn new(answers: Vec<Word>, extras: Vec<Word>) -> Self {
        let seen: FxHashSet<Word> = answers.iter().copied().collect();

        let mut universe = answers.clone();
        universe.extend(extras.into_iter().filter(|word| !seen.contains(word)));

        Self { answers, universe }
    }

    /// Load a vocabulary from two newline-delimited word-list files
    ///
    /// The first file supplies words eligible to be answers, the second
    /// additional words that are valid guesses but never answers. Blank
    /// lines are stripped and unparsable lines skipped.
    ///
    /// # Errors
    /// Returns an I/O error if either file cannot be read.
    pub fn from_files<P: AsRef<Path>>(answers_path: P, extras_path: P) -> io::Result<Self> {
        let answers = load_words(answers_path)?;
        let extras = load_words(extras_path)?;
        Ok(Self::new(answers, extras))
    }

    /// Load an answers-only vocabulary from one file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_answers_file<P: AsRef<Path>>(answers_path: P) -> io::Result<Self> {
        let answers = load_words(answers_path)?;
        Ok(Self::new(answers, Vec::new()))
    }

    /// Words eligible to be the hidden answer
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// All words eligible to be offered as a guess
    #[inline]
    #[must_use]
    pub fn guess_universe(&self) -> &[Word] {
        &self.universe
    }
}

/// Load words from a newline-delimited file, skipping blank and invalid lines
///
/// # Errors
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse newline-delimited text into words, skipping blank and invalid lines
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}
