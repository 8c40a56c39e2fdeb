//! Game simulation
//!
//! Plays the solver against a known answer, feeding it the feedback from
//! `compute_feedback` until it finds the word or runs out of guesses.

use crate::core::{GameState, GuessResult, Word, WordError, compute_feedback};
use crate::solver::Solver;
use log::trace;
use rand::Rng;

/// Guard on game length. Every wrong guess eliminates itself, so on a real
/// dictionary games end long before this.
pub const TURN_LIMIT: usize = 20;

/// Outcome of one simulated game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub answer: Word,
    pub game: GameState,
    pub solved: bool,
}

impl GameOutcome {
    /// Guesses used when solved, `None` for a lost game
    #[must_use]
    pub fn guess_count(&self) -> Option<usize> {
        self.solved.then_some(self.game.len())
    }
}

/// Play one game against `answer`
///
/// The game is lost if the solver returns no guess or `max_guesses` is
/// reached first.
pub fn play_game<R: Rng + ?Sized>(
    solver: &Solver<'_>,
    answer: &Word,
    max_guesses: usize,
    rng: &mut R,
) -> GameOutcome {
    let mut game = GameState::new();

    while game.len() < max_guesses {
        let Some(guess) = solver.choose_guess(game.results(), rng) else {
            trace!("{answer}: no guess available after {} turns", game.len());
            break;
        };

        let result = compute_feedback(guess, answer);
        trace!("{answer}: turn {} {result}", game.len() + 1);
        game.push(result);

        if game.is_solved() {
            return GameOutcome {
                answer: answer.clone(),
                game,
                solved: true,
            };
        }
    }

    GameOutcome {
        answer: answer.clone(),
        game,
        solved: false,
    }
}

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: TURN_LIMIT,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub result: GuessResult,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub possible_answer: bool,
}

/// Solve a specific word, recording candidate counts at every turn
///
/// # Errors
///
/// Returns `WordError` if the target is not a valid 5-letter word. A target
/// the solver cannot reach is a lost game, not an error.
pub fn solve_word<R: Rng + ?Sized>(
    config: SolveConfig,
    solver: &Solver<'_>,
    rng: &mut R,
) -> Result<SolveResult, WordError> {
    let target = Word::new(&config.target)?;
    let outcome = play_game(solver, &target, config.max_guesses, rng);

    let results = outcome.game.results();
    let guesses = results
        .iter()
        .enumerate()
        .map(|(turn, result)| {
            let before = solver.candidates(&results[..turn]);
            GuessStep {
                result: result.clone(),
                candidates_before: before.len(),
                candidates_after: solver.count_candidates(&results[..=turn]),
                possible_answer: before.contains(&result.word()),
            }
        })
        .collect();

    Ok(SolveResult {
        success: outcome.solved,
        guesses,
        target: target.text().to_string(),
    })
}
