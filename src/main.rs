//! Wordle Frequency Solver - CLI
//!
//! Suggests Wordle guesses from letter-position frequencies of the answers
//! still in play.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use wordle_frequency::{
    commands::{
        SolveConfig, TURN_LIMIT, pick_targets, run_benchmark, run_simple, solve_word, suggest,
        write_results_csv,
    },
    core::{GameState, GuessResult, Word},
    output::{print_benchmark_result, print_solve_result, print_suggestion},
    solver::{
        DUPLICATE_PENALTY_HORIZON, NON_ANSWER_PENALTY, OPENING_RELAXATION, ScoringWeights, Solver,
    },
    wordlists::{
        ALLOWED, ANSWERS,
        loader::{load_from_file, load_game_state, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_frequency",
    about = "Wordle solver using constraint filtering and letter-position frequency scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer dictionary file (default: embedded list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Guess dictionary file (default: embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Seed for tie-breaking between equally good guesses
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Fraction of the best score accepted on the opening guess
    #[arg(long, global = true, default_value_t = OPENING_RELAXATION)]
    opening_relaxation: f64,

    /// Penalty weight on guesses that cannot be the answer
    #[arg(long, global = true, default_value_t = NON_ANSWER_PENALTY)]
    non_answer_penalty: f64,

    /// Guesses over which the repeated-letter penalty fades out
    #[arg(long, global = true, default_value_t = DUPLICATE_PENALTY_HORIZON)]
    duplicate_horizon: f64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Simple,

    /// Suggest the next guess for a game in progress
    Suggest {
        /// Game-state CSV, one guess per line (e.g. `-c,-r,+a,~n,-e`)
        state: Option<PathBuf>,

        /// Extra result appended after the file, same format
        #[arg(short, long = "result", allow_hyphen_values = true)]
        results: Vec<String>,

        /// Number of top-scoring guesses to show
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts for every turn
        #[arg(short = 'd', long)]
        details: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random answers to play
        #[arg(short = 'n', long, default_value_t = 200)]
        count: usize,

        /// Play every answer once instead of a random sample
        #[arg(short, long)]
        all: bool,

        /// Write per-game results as `word,count` CSV
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Give up on a game after this many guesses
        #[arg(short, long, default_value_t = TURN_LIMIT)]
        max_guesses: usize,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load a dictionary from `path`, or convert the embedded one
fn load_dictionary(path: Option<&Path>, embedded: &[&str]) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(embedded),
    };
    ensure!(!words.is_empty(), "dictionary has no valid words");
    Ok(words)
}

fn weights(cli: &Cli) -> Result<ScoringWeights> {
    ensure!(
        cli.opening_relaxation > 0.0 && cli.opening_relaxation <= 1.0,
        "--opening-relaxation must be in (0, 1]"
    );
    ensure!(
        cli.duplicate_horizon > 0.0,
        "--duplicate-horizon must be positive"
    );

    Ok(ScoringWeights {
        non_answer_penalty: cli.non_answer_penalty,
        duplicate_penalty_horizon: cli.duplicate_horizon,
        opening_relaxation: cli.opening_relaxation,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let answer_words =
        load_dictionary(cli.answers.as_deref(), ANSWERS).context("loading answer dictionary")?;
    let guess_words =
        load_dictionary(cli.guesses.as_deref(), ALLOWED).context("loading guess dictionary")?;
    info!(
        "{} answers, {} allowed guesses",
        answer_words.len(),
        guess_words.len()
    );

    let solver = Solver::with_weights(&guess_words, &answer_words, weights(&cli)?);
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => {
            let mut reader = io::stdin().lock();
            run_simple(&solver, &mut reader, &mut rng)?;
            Ok(())
        }
        Commands::Suggest {
            state,
            results,
            top,
        } => run_suggest_command(&solver, state.as_deref(), &results, top, &mut rng),
        Commands::Solve { word, details } => {
            let result = solve_word(SolveConfig::new(word), &solver, &mut rng)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Benchmark {
            count,
            all,
            output,
            max_guesses,
        } => {
            let targets: Vec<&Word> = if all {
                answer_words.iter().collect()
            } else {
                pick_targets(&answer_words, count, &mut rng)
            };
            println!("Running benchmark on {} words (seed {seed})...", targets.len());

            let result = run_benchmark(&solver, &targets, seed, max_guesses, true);
            print_benchmark_result(&result);

            if let Some(path) = output {
                write_results_csv(&result.records, &path)
                    .with_context(|| format!("writing results to {}", path.display()))?;
                println!("\nResults written to {}", path.display());
            }
            Ok(())
        }
    }
}

fn run_suggest_command(
    solver: &Solver<'_>,
    state: Option<&Path>,
    results: &[String],
    top: usize,
    rng: &mut StdRng,
) -> Result<()> {
    let mut game = match state {
        Some(path) => load_game_state(path)?,
        None => GameState::new(),
    };
    for text in results {
        let result: GuessResult = text
            .parse()
            .with_context(|| format!("invalid result '{text}'"))?;
        game.push(result);
    }

    let suggestion = suggest(solver, game.results(), top, rng);
    print_suggestion(&suggestion);
    Ok(())
}
