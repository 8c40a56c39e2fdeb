//! Letter-position frequency model
//!
//! Counts how often each letter sits at each unsolved position across the
//! remaining possible answers.

use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};

/// Occurrence counts keyed by (letter, position)
///
/// Only unsolved positions are counted; solved positions stay at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencyTable {
    counts: [[u32; WORD_LENGTH]; ALPHABET_SIZE],
    positions: Vec<usize>,
}

impl LetterFrequencyTable {
    /// Build the table for `candidates` restricted to `positions`
    ///
    /// # Examples
    /// ```
    /// use wordle_frequency::core::Word;
    /// use wordle_frequency::solver::LetterFrequencyTable;
    ///
    /// let words = [Word::new("abide").unwrap(), Word::new("about").unwrap()];
    /// let refs: Vec<&Word> = words.iter().collect();
    /// let table = LetterFrequencyTable::build(&refs, &[0, 1, 2, 3, 4]);
    ///
    /// assert_eq!(table.count(b'a', 0), 2);
    /// assert_eq!(table.count(b'o', 2), 1);
    /// assert_eq!(table.total(b'b'), 2);
    /// ```
    #[must_use]
    pub fn build(candidates: &[&Word], positions: &[usize]) -> Self {
        let mut counts = [[0u32; WORD_LENGTH]; ALPHABET_SIZE];

        for word in candidates {
            for &position in positions {
                counts[letter_index(word.char_at(position))][position] += 1;
            }
        }

        Self {
            counts,
            positions: positions.to_vec(),
        }
    }

    /// Number of candidates with `letter` at `position`
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8, position: usize) -> u32 {
        self.counts[letter_index(letter)][position]
    }

    /// Sum of `letter`'s counts across the unsolved positions
    #[must_use]
    pub fn total(&self, letter: u8) -> u32 {
        self.positions
            .iter()
            .map(|&position| self.count(letter, position))
            .sum()
    }

    /// Mean count of `letter` per unsolved position (0 when none are unsolved)
    #[must_use]
    pub fn average(&self, letter: u8) -> f64 {
        if self.positions.is_empty() {
            return 0.0;
        }
        f64::from(self.total(letter)) / self.positions.len() as f64
    }

    /// The unsolved positions this table covers
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Positional score of `word`: the sum of its letters' counts over the
    /// unsolved positions
    #[must_use]
    pub fn positional_score(&self, word: &Word) -> f64 {
        self.positions
            .iter()
            .map(|&position| f64::from(self.count(word.char_at(position), position)))
            .sum()
    }
}
