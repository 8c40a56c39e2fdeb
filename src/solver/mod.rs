//! Wordle solving
//!
//! Candidate filtering, the letter-position frequency model and the scorer
//! that turns them into the next guess.

mod engine;
pub mod filter;
mod frequency;
pub mod scoring;

pub use engine::{Solver, choose_guess};
pub use filter::{CandidateFilter, LetterTally, filter_candidates};
pub use frequency::LetterFrequencyTable;
pub use scoring::{
    DUPLICATE_PENALTY_HORIZON, NON_ANSWER_PENALTY, OPENING_RELAXATION, ScoredGuess,
    ScoringWeights, unique_letter_count,
};
