//! Feedback code calculation and representation
//!
//! A feedback code records the per-position outcome of scoring a guess against
//! an answer:
//! - 0 = absent (letter not in word)
//! - 1 = present (letter in word, wrong position)
//! - 2 = exact (letter in correct position)
//!
//! The canonical textual form is a 5-character string such as `"00102"`.
//! Internally the code is packed as a base-3 number in a single u8, where
//! position i contributes digit × 3^i, so the full key space of 3^5 = 243
//! codes can index a fixed array.

use super::Word;
use std::fmt;

/// Number of distinct feedback codes (3^5)
pub const CODE_COUNT: usize = 243;

/// Feedback for one guess, packed as a base-3 u8 in 0..243
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u8);

impl Feedback {
    /// All exact (the terminal, solved code `"22222"`)
    pub const SOLVED: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a feedback code from a raw packed value
    ///
    /// # Panics
    /// Panics in debug mode if `value >= 243`
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "feedback value must be < 243");
        Self(value)
    }

    /// Get the raw packed value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the packed value as an array index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this is the terminal all-exact code
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == 242
    }

    /// Get the outcome digit (0, 1, or 2) at a letter position (0-4)
    #[inline]
    #[must_use]
    pub fn digit(self, position: usize) -> u8 {
        debug_assert!(position < 5);
        (self.0 / 3u8.pow(position as u32)) % 3
    }

    /// Score `guess` against `answer`
    ///
    /// Implements the standard two-phase multiset matching rules, so repeated
    /// guess letters are never credited more times than the answer contains
    /// them, and exact-position matches are resolved first.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Word};
    ///
    /// let guess = Word::new("eerie").unwrap();
    /// let answer = Word::new("crane").unwrap();
    ///
    /// // The answer's single E is consumed by the exact match at position 4,
    /// // so both leading Es come back absent.
    /// let code = Feedback::evaluate(&guess, &answer);
    /// assert_eq!(code.to_string(), "00102");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut digits = [0u8; 5];
        let mut available = answer.letter_counts();

        // First pass: exact-position matches, consuming from the answer's
        // per-letter pool
        // Allow: index needed to access guess[i], answer[i], and set digits[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.letters()[i] == answer.letters()[i] {
                digits[i] = 2;

                let letter = guess.letters()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-but-misplaced, in position order, while the
        // letter still has remaining count
        // Allow: index needed to access guess[i] and check/set digits[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if digits[i] == 0 {
                let letter = guess.letters()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    digits[i] = 1;
                    *count -= 1;
                }
            }
        }

        // Pack as a base-3 number
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for &digit in &digits {
            value += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Self(value)
    }

    /// Parse the canonical 5-digit form, e.g. `"00102"`
    ///
    /// Returns `None` unless the input is exactly 5 characters drawn from
    /// `{0, 1, 2}`.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Feedback;
    ///
    /// assert_eq!(Feedback::parse("22222"), Some(Feedback::SOLVED));
    /// assert!(Feedback::parse("999").is_none());
    /// assert!(Feedback::parse("abcde").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        if bytes.len() != 5 {
            return None;
        }

        let mut value = 0u8;
        let mut multiplier = 1u8;

        for &b in bytes {
            let digit = match b {
                b'0' => 0,
                b'1' => 1,
                b'2' => 2,
                _ => return None,
            };
            value += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Some(Self(value))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        for _ in 0..5 {
            write!(f, "{}", value % 3)?;
            value /= 3;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid feedback code: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn solved_constant() {
        assert_eq!(Feedback::SOLVED.value(), 242);
        assert!(Feedback::SOLVED.is_solved());
        assert_eq!(Feedback::SOLVED.to_string(), "22222");
    }

    #[test]
    fn evaluate_all_absent() {
        let code = Feedback::evaluate(&word("abcde"), &word("fghij"));
        assert_eq!(code.value(), 0);
        assert_eq!(code.to_string(), "00000");
    }

    #[test]
    fn evaluate_identity_is_solved() {
        for text in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = word(text);
            assert_eq!(Feedback::evaluate(&w, &w), Feedback::SOLVED);
        }
    }

    #[test]
    fn evaluate_duplicate_letters_capped_by_answer() {
        // EERIE vs CRANE: the answer's single E is consumed by the exact
        // match at position 4, so both leading Es are absent.
        let code = Feedback::evaluate(&word("eerie"), &word("crane"));
        assert_eq!(code.to_string(), "00102");
    }

    #[test]
    fn evaluate_duplicate_letters_all_present() {
        // SPEED vs ERASE: S present, both Es present (ERASE has two Es)
        let code = Feedback::evaluate(&word("speed"), &word("erase"));
        assert_eq!(code.to_string(), "10110");
    }

    #[test]
    fn evaluate_exact_beats_present_for_same_letter() {
        // ROBOT vs FLOOR: first O present, second O exact
        let code = Feedback::evaluate(&word("robot"), &word("floor"));
        assert_eq!(code.to_string(), "11020");
    }

    #[test]
    fn evaluate_letter_count_bound() {
        // Marks for a letter (exact + present) never exceed its count in the
        // answer.
        let pairs = [
            ("eerie", "crane"),
            ("speed", "erase"),
            ("robot", "floor"),
            ("geese", "eagle"),
            ("aabba", "ababa"),
        ];

        for (guess_text, answer_text) in pairs {
            let guess = word(guess_text);
            let answer = word(answer_text);
            let code = Feedback::evaluate(&guess, &answer);
            let answer_counts = answer.letter_counts();

            let mut marked: rustc_hash::FxHashMap<u8, u8> = rustc_hash::FxHashMap::default();
            for i in 0..5 {
                if code.digit(i) > 0 {
                    *marked.entry(guess.letters()[i]).or_insert(0) += 1;
                }
            }

            for (letter, count) in marked {
                assert!(
                    count <= *answer_counts.get(&letter).unwrap_or(&0),
                    "{guess_text} vs {answer_text}: letter {} over-credited",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn parse_valid_codes() {
        let code = Feedback::parse("00102").unwrap();
        assert_eq!(code.digit(0), 0);
        assert_eq!(code.digit(1), 0);
        assert_eq!(code.digit(2), 1);
        assert_eq!(code.digit(3), 0);
        assert_eq!(code.digit(4), 2);
        assert_eq!(code.to_string(), "00102");

        assert_eq!(Feedback::parse("22222"), Some(Feedback::SOLVED));
        assert_eq!(Feedback::parse("00000"), Some(Feedback::new(0)));
    }

    #[test]
    fn parse_invalid_codes() {
        assert!(Feedback::parse("999").is_none()); // Too short, wrong alphabet
        assert!(Feedback::parse("12").is_none()); // Too short
        assert!(Feedback::parse("abcde").is_none()); // Wrong alphabet
        assert!(Feedback::parse("012100").is_none()); // Too long
        assert!(Feedback::parse("").is_none()); // Empty
        assert!(Feedback::parse("00003").is_none()); // Digit out of range
    }

    #[test]
    fn display_round_trips() {
        for value in 0..243u8 {
            let code = Feedback::new(value);
            assert_eq!(Feedback::parse(&code.to_string()), Some(code));
        }
    }
}
