//! Suggest command
//!
//! One-shot advice for a game in progress: the chosen next guess plus the
//! top of the ranking it was drawn from.

use crate::core::{GuessResult, Word};
use crate::solver::{ScoredGuess, Solver};
use rand::Rng;

/// Next-guess advice for a game state
#[derive(Debug, Clone)]
pub struct Suggestion<'a> {
    /// `None` when no legal guess fits the history
    pub guess: Option<&'a Word>,
    pub remaining_answers: usize,
    pub remaining_guesses: usize,
    /// Highest-scoring legal guesses, best first
    pub ranked: Vec<ScoredGuess<'a>>,
    /// The few answers left, when there are at most `top` of them
    pub candidates: Vec<&'a Word>,
}

/// Work out the next guess for `history`, keeping the `top` best scores
pub fn suggest<'a, R: Rng + ?Sized>(
    solver: &Solver<'a>,
    history: &[GuessResult],
    top: usize,
    rng: &mut R,
) -> Suggestion<'a> {
    let candidates = solver.candidates(history);
    let mut ranked = solver.ranked_guesses(history);
    let remaining_guesses = ranked.len();
    ranked.truncate(top);

    Suggestion {
        guess: solver.choose_guess(history, rng),
        remaining_answers: candidates.len(),
        remaining_guesses,
        ranked,
        candidates: if candidates.len() <= top {
            candidates
        } else {
            Vec::new()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn suggestion_on_empty_board() {
        let dictionary = words(&["abide", "about", "adopt"]);
        let solver = Solver::new(&dictionary, &dictionary);
        let mut rng = StdRng::seed_from_u64(1);

        let suggestion = suggest(&solver, &[], 2, &mut rng);
        assert_eq!(suggestion.remaining_answers, 3);
        assert_eq!(suggestion.remaining_guesses, 3);
        assert_eq!(suggestion.ranked.len(), 2);
        assert!(suggestion.ranked[0].score >= suggestion.ranked[1].score);
        assert!(suggestion.guess.is_some());
        assert!(suggestion.candidates.is_empty());
    }

    #[test]
    fn suggestion_lists_few_candidates() {
        let dictionary = words(&["abide", "about", "adopt"]);
        let solver = Solver::new(&dictionary, &dictionary);
        let mut rng = StdRng::seed_from_u64(1);

        let history: [GuessResult; 1] = ["+a,-b,-i,-d,-e".parse().unwrap()];
        let suggestion = suggest(&solver, &history, 5, &mut rng);
        assert_eq!(suggestion.remaining_answers, 0);
        assert_eq!(suggestion.guess, None);
        assert!(suggestion.ranked.is_empty());
    }

    #[test]
    fn suggestion_is_a_candidate_when_one_remains() {
        let dictionary = words(&["abide", "about", "adopt"]);
        let solver = Solver::new(&dictionary, &dictionary);
        let mut rng = StdRng::seed_from_u64(9);

        let history: [GuessResult; 1] = ["+a,+b,-i,-d,-e".parse().unwrap()];
        let suggestion = suggest(&solver, &history, 5, &mut rng);
        assert_eq!(suggestion.remaining_answers, 1);
        assert_eq!(suggestion.guess.map(Word::text), Some("about"));
        assert_eq!(suggestion.candidates.len(), 1);
    }
}
