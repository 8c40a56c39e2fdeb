//! Guess scoring
//!
//! A guess scores the sum of its letters' frequencies at the unsolved
//! positions, then two multiplicative penalties apply:
//!
//! ```text
//! non-answer: 1 - (NON_ANSWER_PENALTY / possible_answers) * (1 - is_possible_answer)
//! duplicate:  1 - ((HORIZON - guesses_made) / HORIZON)
//!               * ((unsolved - unique_letters) / unsolved)
//! ```
//!
//! The non-answer factor is not clamped. With fewer than
//! `NON_ANSWER_PENALTY` possible answers it turns negative for words that
//! cannot be the answer, pushing them below every possible answer.

use super::frequency::LetterFrequencyTable;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Weight of the penalty on guesses that cannot be the answer
pub const NON_ANSWER_PENALTY: f64 = 10.0;

/// Number of guesses over which the duplicate-letter penalty fades out
pub const DUPLICATE_PENALTY_HORIZON: f64 = 5.0;

/// Fraction of the best score accepted on the opening guess
pub const OPENING_RELAXATION: f64 = 0.95;

/// Tunable scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub non_answer_penalty: f64,
    pub duplicate_penalty_horizon: f64,
    pub opening_relaxation: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            non_answer_penalty: NON_ANSWER_PENALTY,
            duplicate_penalty_horizon: DUPLICATE_PENALTY_HORIZON,
            opening_relaxation: OPENING_RELAXATION,
        }
    }
}

impl ScoringWeights {
    /// Multiplier applied to guesses by answer status
    #[must_use]
    pub fn non_answer_factor(&self, possible_answer_count: usize, is_possible_answer: bool) -> f64 {
        if possible_answer_count == 0 {
            return 1.0;
        }
        let not_answer = if is_possible_answer { 0.0 } else { 1.0 };
        1.0 - (self.non_answer_penalty / possible_answer_count as f64) * not_answer
    }

    /// Multiplier penalising repeated letters in the unsolved positions
    ///
    /// With no unsolved positions there is nothing to repeat and the factor
    /// is 1.
    #[must_use]
    pub fn duplicate_factor(
        &self,
        guesses_made: usize,
        unsolved_count: usize,
        unique_letters: usize,
    ) -> f64 {
        if unsolved_count == 0 {
            return 1.0;
        }
        let horizon = self.duplicate_penalty_horizon;
        let weight = (horizon - guesses_made as f64) / horizon;
        let repeated = (unsolved_count - unique_letters) as f64 / unsolved_count as f64;
        1.0 - weight * repeated
    }

    /// Lowest score accepted into the shortlist
    ///
    /// Exactly `best` after the opening turn. On the opening turn the bar
    /// drops by `1 - opening_relaxation` of the best score's magnitude, which
    /// is `opening_relaxation * best` for non-negative scores.
    #[must_use]
    pub fn acceptance_threshold(&self, best: f64, opening: bool) -> f64 {
        if opening {
            best - (1.0 - self.opening_relaxation) * best.abs()
        } else {
            best
        }
    }
}

/// A guess with its score for the current turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    pub score: f64,
    pub possible_answer: bool,
}

/// Number of distinct letters `word` holds across `positions`
#[must_use]
pub fn unique_letter_count(word: &Word, positions: &[usize]) -> usize {
    let mut seen = 0u32;
    for &position in positions {
        seen |= 1 << (word.char_at(position) - b'a');
    }
    seen.count_ones() as usize
}

/// Score every remaining guess against the frequency table
///
/// `remaining_answers` decides which guesses count as possible answers and
/// the size of the non-answer penalty. Output order follows
/// `remaining_guesses`.
#[must_use]
pub fn score_guesses<'a>(
    remaining_guesses: &[&'a Word],
    remaining_answers: &[&Word],
    table: &LetterFrequencyTable,
    guesses_made: usize,
    weights: &ScoringWeights,
) -> Vec<ScoredGuess<'a>> {
    let answers: FxHashSet<&Word> = remaining_answers.iter().copied().collect();
    let positions = table.positions();
    let possible_answer_count = remaining_answers.len();

    remaining_guesses
        .par_iter()
        .map(|&word| {
            let possible_answer = answers.contains(word);
            let score = table.positional_score(word)
                * weights.non_answer_factor(possible_answer_count, possible_answer)
                * weights.duplicate_factor(
                    guesses_made,
                    positions.len(),
                    unique_letter_count(word, positions),
                );

            ScoredGuess {
                word,
                score,
                possible_answer,
            }
        })
        .collect()
}

/// Highest score in `scored`, if any
#[must_use]
pub fn best_score(scored: &[ScoredGuess<'_>]) -> Option<f64> {
    scored.iter().map(|s| s.score).max_by(f64::total_cmp)
}

/// Guesses scoring at or above the acceptance threshold
#[must_use]
pub fn shortlist<'s, 'a>(
    scored: &'s [ScoredGuess<'a>],
    opening: bool,
    weights: &ScoringWeights,
) -> Vec<&'s ScoredGuess<'a>> {
    let Some(best) = best_score(scored) else {
        return Vec::new();
    };
    let threshold = weights.acceptance_threshold(best, opening);

    scored.iter().filter(|s| s.score >= threshold).collect()
}

/// Sort scored guesses best first; ties keep dictionary order
pub fn rank(scored: &mut [ScoredGuess<'_>]) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_weights_use_named_constants() {
        let weights = ScoringWeights::default();
        assert!(approx(weights.non_answer_penalty, 10.0));
        assert!(approx(weights.duplicate_penalty_horizon, 5.0));
        assert!(approx(weights.opening_relaxation, 0.95));
    }

    #[test]
    fn unique_letters_in_unsolved_positions() {
        let word = Word::new("speed").unwrap();
        assert_eq!(unique_letter_count(&word, &[0, 1, 2, 3, 4]), 4);
        assert_eq!(unique_letter_count(&word, &[2, 3]), 1);
        assert_eq!(unique_letter_count(&word, &[0, 4]), 2);
        assert_eq!(unique_letter_count(&word, &[]), 0);
    }

    #[test]
    fn non_answer_factor_grows_as_pool_shrinks() {
        let weights = ScoringWeights::default();
        assert!(approx(weights.non_answer_factor(100, false), 0.9));
        assert!(approx(weights.non_answer_factor(100, true), 1.0));
        assert!(approx(weights.non_answer_factor(0, false), 1.0));
    }

    #[test]
    fn non_answer_factor_is_not_clamped() {
        // Known sharp edge: with 2 possible answers a non-answer is scaled by -4
        let weights = ScoringWeights::default();
        assert!(approx(weights.non_answer_factor(2, false), -4.0));
    }

    #[test]
    fn duplicate_factor_fades_with_guesses() {
        let weights = ScoringWeights::default();
        // SPEED on an empty board: 5 unsolved, 4 unique -> 1 - 1 * 0.2
        assert!(approx(weights.duplicate_factor(0, 5, 4), 0.8));
        // Three guesses in: weight 0.4
        assert!(approx(weights.duplicate_factor(3, 5, 4), 0.92));
        assert!(approx(weights.duplicate_factor(5, 5, 1), 1.0));
        assert!(approx(weights.duplicate_factor(2, 5, 5), 1.0));
        assert!(approx(weights.duplicate_factor(1, 0, 0), 1.0));
    }

    #[test]
    fn threshold_relaxes_only_on_opening() {
        let weights = ScoringWeights::default();
        assert!(approx(weights.acceptance_threshold(100.0, true), 95.0));
        assert!(approx(weights.acceptance_threshold(100.0, false), 100.0));
        assert!(weights.acceptance_threshold(-20.0, true) <= -20.0);
    }

    #[test]
    fn score_combines_frequency_and_penalties() {
        let answers = words(&["abide", "about", "adopt"]);
        let guesses = words(&["abide", "about", "adopt", "abbot"]);
        let answer_refs: Vec<&Word> = answers.iter().collect();
        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let table = LetterFrequencyTable::build(&answer_refs, &[0, 1, 2, 3, 4]);

        let scored = score_guesses(&guess_refs, &answer_refs, &table, 0, &ScoringWeights::default());
        assert_eq!(scored.len(), 4);

        // about: 3+2+2+1+2 = 10, all unique, possible answer
        assert!(approx(scored[1].score, 10.0));
        assert!(scored[1].possible_answer);

        // abbot: a3 b2 b0 o0 t2 = 7; non-answer with 3 answers -> 1 - 10/3;
        // duplicate b -> 0.8
        assert!(!scored[3].possible_answer);
        assert!(approx(scored[3].score, 7.0 * (1.0 - 10.0 / 3.0) * 0.8));
        assert!(scored[3].score < 0.0);
    }

    #[test]
    fn shortlist_sizes() {
        let answers = words(&["abide", "about", "adopt"]);
        let refs: Vec<&Word> = answers.iter().collect();
        let table = LetterFrequencyTable::build(&refs, &[0, 1, 2, 3, 4]);
        let weights = ScoringWeights::default();
        let scored = score_guesses(&refs, &refs, &table, 0, &weights);

        // abide 8, about 10, adopt 9: only about clears 9.5
        let opening = shortlist(&scored, true, &weights);
        let strict = shortlist(&scored, false, &weights);
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].word.text(), "about");
        assert!(opening.len() >= strict.len());

        assert!(shortlist(&[], true, &weights).is_empty());
        assert_eq!(best_score(&scored), Some(10.0));
    }

    #[test]
    fn rank_orders_best_first() {
        let answers = words(&["abide", "about", "adopt"]);
        let refs: Vec<&Word> = answers.iter().collect();
        let table = LetterFrequencyTable::build(&refs, &[0, 1, 2, 3, 4]);
        let mut scored = score_guesses(&refs, &refs, &table, 2, &ScoringWeights::default());
        rank(&mut scored);

        let order: Vec<&str> = scored.iter().map(|s| s.word.text()).collect();
        assert_eq!(order, ["about", "adopt", "abide"]);
    }
}
