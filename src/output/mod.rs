//! Terminal output formatting

use crate::core::{Feedback, Word};
use colored::Colorize;

/// Render a guess with its feedback as colored letters
///
/// Exact letters are green, present letters yellow, absent letters dimmed.
#[must_use]
pub fn render_feedback(guess: &Word, code: Feedback) -> String {
    let mut out = String::new();

    for (i, &letter) in guess.letters().iter().enumerate() {
        let letter = (letter as char).to_ascii_uppercase().to_string();
        let colored = match code.digit(i) {
            2 => letter.green().bold().to_string(),
            1 => letter.yellow().to_string(),
            _ => letter.dimmed().to_string(),
        };
        out.push_str(&colored);
    }

    out
}
