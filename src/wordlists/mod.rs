//! Dictionaries for Wordle solving
//!
//! Provides the embedded default dictionaries and loaders for custom ones.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
