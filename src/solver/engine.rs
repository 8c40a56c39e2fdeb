//! Main Wordle solver interface

use super::filter::filter_candidates;
use super::frequency::LetterFrequencyTable;
use super::scoring::{self, ScoredGuess, ScoringWeights};
use crate::core::{GuessResult, Word, unsolved_positions};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Main Wordle solver
///
/// Borrows both dictionaries for its lifetime and holds no per-game state,
/// so one solver can serve any number of games.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    guess_words: &'a [Word],
    answer_words: &'a [Word],
    weights: ScoringWeights,
}

impl<'a> Solver<'a> {
    /// Create a new solver with default weights
    ///
    /// # Parameters
    /// - `guess_words`: All valid guessable words
    /// - `answer_words`: Words that can be the secret answer
    #[must_use]
    pub fn new(guess_words: &'a [Word], answer_words: &'a [Word]) -> Self {
        Self::with_weights(guess_words, answer_words, ScoringWeights::default())
    }

    #[must_use]
    pub const fn with_weights(
        guess_words: &'a [Word],
        answer_words: &'a [Word],
        weights: ScoringWeights,
    ) -> Self {
        Self {
            guess_words,
            answer_words,
            weights,
        }
    }

    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    #[must_use]
    pub const fn guess_words(&self) -> &'a [Word] {
        self.guess_words
    }

    #[must_use]
    pub const fn answer_words(&self) -> &'a [Word] {
        self.answer_words
    }

    /// Possible answers still consistent with the history
    #[must_use]
    pub fn candidates(&self, history: &[GuessResult]) -> Vec<&'a Word> {
        filter_candidates(self.answer_words, history)
    }

    /// Count how many possible answers remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[GuessResult]) -> usize {
        self.candidates(history).len()
    }

    /// Legal guesses still consistent with the history
    #[must_use]
    pub fn legal_guesses(&self, history: &[GuessResult]) -> Vec<&'a Word> {
        filter_candidates(self.guess_words, history)
    }

    /// Score every legal guess for the next turn, best first
    #[must_use]
    pub fn ranked_guesses(&self, history: &[GuessResult]) -> Vec<ScoredGuess<'a>> {
        let mut scored = self.score_turn(history);
        scoring::rank(&mut scored);
        scored
    }

    /// Choose the next guess
    ///
    /// Returns `None` when no legal guess is consistent with the history;
    /// the game cannot continue and retrying gives the same answer. When
    /// several guesses clear the acceptance threshold one is picked
    /// uniformly with `rng`.
    pub fn choose_guess<R: Rng + ?Sized>(
        &self,
        history: &[GuessResult],
        rng: &mut R,
    ) -> Option<&'a Word> {
        let scored = self.score_turn(history);
        if scored.is_empty() {
            debug!("no legal guess remains after {} results", history.len());
            return None;
        }

        let opening = history.is_empty();
        let best = scoring::shortlist(&scored, opening, &self.weights);
        debug!(
            "turn {}: {} scored guesses, {} on the shortlist",
            history.len() + 1,
            scored.len(),
            best.len()
        );

        match best.as_slice() {
            [only] => Some(only.word),
            many => many.choose(rng).map(|s| s.word),
        }
    }

    fn score_turn(&self, history: &[GuessResult]) -> Vec<ScoredGuess<'a>> {
        let positions = unsolved_positions(history);
        let remaining_answers = self.candidates(history);
        let remaining_guesses = self.legal_guesses(history);

        debug!(
            "{} possible answers, {} legal guesses, unsolved positions {:?}",
            remaining_answers.len(),
            remaining_guesses.len(),
            positions
        );

        if remaining_guesses.is_empty() {
            return Vec::new();
        }

        let table = LetterFrequencyTable::build(&remaining_answers, &positions);
        scoring::score_guesses(
            &remaining_guesses,
            &remaining_answers,
            &table,
            history.len(),
            &self.weights,
        )
    }
}

/// Choose the next guess with default weights
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_frequency::core::Word;
/// use wordle_frequency::solver::choose_guess;
///
/// let words: Vec<Word> = ["abide", "about", "adopt"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let guess = choose_guess(&words, &words, &[], &mut rng).unwrap();
/// assert!(words.contains(guess));
/// ```
pub fn choose_guess<'a, R: Rng + ?Sized>(
    guess_dictionary: &'a [Word],
    answer_dictionary: &'a [Word],
    history: &[GuessResult],
    rng: &mut R,
) -> Option<&'a Word> {
    Solver::new(guess_dictionary, answer_dictionary).choose_guess(history, rng)
}
