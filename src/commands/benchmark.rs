//! Benchmark command
//!
//! Plays the solver against many answers in parallel and collects the
//! guess-count distribution.

use super::solve::play_game;
use crate::core::Word;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Guess counts above this share a single "more" bucket in reports
pub const DISTRIBUTION_LIMIT: usize = 10;

/// Outcome of a single benchmarked game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub answer: String,
    /// Guesses used, `None` if the game was lost
    pub guesses: Option<usize>,
    pub first_guess: Option<String>,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub records: Vec<GameRecord>,
    pub solved: usize,
    pub failed: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub duration: Duration,
    pub words_per_second: f64,
    pub first_guess_used: BTreeMap<String, usize>,
}

impl BenchmarkResult {
    #[must_use]
    pub fn total_games(&self) -> usize {
        self.records.len()
    }

    /// Games solved in more than `DISTRIBUTION_LIMIT` guesses
    #[must_use]
    pub fn beyond_limit(&self) -> usize {
        self.distribution
            .range(DISTRIBUTION_LIMIT + 1..)
            .map(|(_, count)| count)
            .sum()
    }

    fn from_records(records: Vec<GameRecord>, duration: Duration) -> Self {
        let mut distribution = BTreeMap::new();
        let mut first_guess_used = BTreeMap::new();
        let mut total_guesses = 0;

        for record in &records {
            if let Some(guesses) = record.guesses {
                *distribution.entry(guesses).or_insert(0) += 1;
                total_guesses += guesses;
            }
            if let Some(first) = &record.first_guess {
                *first_guess_used.entry(first.clone()).or_insert(0) += 1;
            }
        }

        let solved: usize = distribution.values().sum();
        let failed = records.len() - solved;
        let average_guesses = if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        };
        let seconds = duration.as_secs_f64();

        Self {
            solved,
            failed,
            average_guesses,
            min_guesses: distribution.keys().next().copied().unwrap_or(0),
            max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
            distribution,
            duration,
            words_per_second: if seconds > 0.0 {
                records.len() as f64 / seconds
            } else {
                0.0
            },
            first_guess_used,
            records,
        }
    }
}

/// Draw `count` benchmark answers, with replacement
#[must_use]
pub fn pick_targets<'a, R: Rng + ?Sized>(
    answer_words: &'a [Word],
    count: usize,
    rng: &mut R,
) -> Vec<&'a Word> {
    (0..count)
        .filter_map(|_| answer_words.choose(rng))
        .collect()
}

/// Play one game per target
///
/// Game `i` draws its tie-breaks from `StdRng::seed_from_u64(seed + i)`,
/// so a run is reproducible regardless of thread scheduling.
#[must_use]
pub fn run_benchmark(
    solver: &Solver<'_>,
    targets: &[&Word],
    seed: u64,
    max_guesses: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    info!("benchmarking {} games, seed {seed}", targets.len());
    let start = Instant::now();

    let records: Vec<GameRecord> = targets
        .par_iter()
        .enumerate()
        .map(|(index, &answer)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            let outcome = play_game(solver, answer, max_guesses, &mut rng);
            pb.inc(1);

            GameRecord {
                answer: answer.text().to_string(),
                guesses: outcome.guess_count(),
                first_guess: outcome
                    .game
                    .results()
                    .first()
                    .map(|r| r.word().text().to_string()),
            }
        })
        .collect();

    pb.finish_and_clear();
    BenchmarkResult::from_records(records, start.elapsed())
}

/// Write per-game results as `word,count`, with `-1` for a lost game
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_results_csv<P: AsRef<Path>>(records: &[GameRecord], path: P) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_results(records, &mut out)?;
    out.flush()
}

fn write_results<W: Write>(records: &[GameRecord], out: &mut W) -> io::Result<()> {
    writeln!(out, "word,count")?;
    for record in records {
        match record.guesses {
            Some(guesses) => writeln!(out, "{},{guesses}", record.answer)?,
            None => writeln!(out, "{},-1", record.answer)?,
        }
    }
    Ok(())
}
