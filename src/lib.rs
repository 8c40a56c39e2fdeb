//! Wordle Frequency Solver
//!
//! Picks the next Wordle guess by filtering the dictionaries against the
//! feedback so far and scoring each legal guess by how common its letters
//! are, position by position, among the answers still in play.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_frequency::core::{Word, compute_feedback};
//! use wordle_frequency::solver::Solver;
//! use wordle_frequency::wordlists::{ALLOWED, ANSWERS, loader::words_from_slice};
//!
//! let guesses = words_from_slice(ALLOWED);
//! let answers = words_from_slice(ANSWERS);
//! let solver = Solver::new(&guesses, &answers);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let secret = Word::new("abide").unwrap();
//! let guess = solver.choose_guess(&[], &mut rng).unwrap();
//! let result = compute_feedback(guess, &secret);
//! println!("{guess}: {result}");
//!
//! assert!(solver.candidates(&[result]).contains(&&secret));
//! ```

// Core domain types
pub mod core;

// Filtering and scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
