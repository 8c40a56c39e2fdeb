//! Game history
//!
//! A `GameState` is the caller-owned, append-only list of guess results for
//! one game. The solver only ever reads it as a slice.

use super::feedback::{FeedbackSymbol, GuessResult};
use super::word::WORD_LENGTH;

/// Append-only history of one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    results: Vec<GuessResult>,
}

impl GameState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Record the result of the next turn
    pub fn push(&mut self, result: GuessResult) {
        self.results.push(result);
    }

    /// Drop the most recent turn (interactive undo)
    pub fn undo(&mut self) -> Option<GuessResult> {
        self.results.pop()
    }

    #[must_use]
    pub fn results(&self) -> &[GuessResult] {
        &self.results
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GuessResult> {
        self.results.last()
    }

    /// True once the latest result is all Hits
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.last().is_some_and(GuessResult::is_solved)
    }
}

impl FromIterator<GuessResult> for GameState {
    fn from_iter<I: IntoIterator<Item = GuessResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[GuessResult]> for GameState {
    fn as_ref(&self) -> &[GuessResult] {
        &self.results
    }
}

/// Positions (0-4) not marked Hit in the most recent result
///
/// Only the latest result is consulted: a Hit is assumed to stay a Hit for
/// the rest of the game because the answer is fixed. With no history every
/// position is unsolved.
#[must_use]
pub fn unsolved_positions(history: &[GuessResult]) -> Vec<usize> {
    history.last().map_or_else(
        || (0..WORD_LENGTH).collect(),
        |latest| {
            latest
                .feedback()
                .iter()
                .enumerate()
                .filter(|&(_, &symbol)| symbol != FeedbackSymbol::Hit)
                .map(|(position, _)| position)
                .collect()
        },
    )
}
