//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod suggest;

pub use benchmark::{BenchmarkResult, GameRecord, pick_targets, run_benchmark, write_results_csv};
pub use simple::run_simple;
pub use solve::{GameOutcome, SolveConfig, SolveResult, TURN_LIMIT, play_game, solve_word};
pub use suggest::{Suggestion, suggest};
