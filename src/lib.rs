//! Wordle Advisor
//!
//! A Wordle guess engine that picks, after each round of feedback, the guess
//! minimizing the expected number of remaining candidates. The engine is a
//! pure, synchronous computation over caller-supplied word lists; the CLI in
//! `main.rs` is a thin harness around it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Feedback, Word};
//!
//! let guess = Word::new("eerie").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let code = Feedback::evaluate(&guess, &answer);
//! assert_eq!(code.to_string(), "00102");
//! ```

// Core domain types
pub mod core;

// Decision engine
pub mod engine;

// Terminal output formatting
pub mod output;

// Word-list configuration
pub mod vocab;
