//! Core domain types: words and feedback codes

mod feedback;
mod word;

pub use feedback::{CODE_COUNT, Feedback};
pub use word::{Word, WordError};
