//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the game history. Everything here is pure
//! and deterministic.

mod feedback;
mod game;
mod word;

pub use feedback::{FeedbackSymbol, GuessResult, ParseError, compute_feedback, compute_feedback_str};
pub use game::{GameState, unsolved_positions};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError, letter_index};
