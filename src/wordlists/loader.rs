//! Dictionary and game-state loading
//!
//! Dictionaries are one word per line. A line may also be a CSV row, in
//! which case its first field is the word. Game states are CSV with five
//! `<symbol><letter>` cells per guess.

use crate::core::{GameState, GuessResult, ParseError, Word};
use log::warn;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading a file from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a dictionary from a file
///
/// Invalid entries are skipped with a warning; duplicates are dropped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_frequency::wordlists::loader::load_from_file;
///
/// let words = load_from_file("All Valid Answers.csv").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let content = read(path.as_ref())?;
    Ok(parse_word_list(&content))
}

/// Parse dictionary text, keeping first occurrences in order
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let field = line.split(',').next().unwrap_or_default().trim();
            if field.is_empty() {
                return None;
            }
            match Word::new(field) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("skipping dictionary line {}: '{field}': {e}", index + 1);
                    None
                }
            }
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_frequency::wordlists::loader::words_from_slice;
/// use wordle_frequency::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load a saved game state
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::Parse` for the first malformed row.
pub fn load_game_state<P: AsRef<Path>>(path: P) -> Result<GameState, LoadError> {
    let content = read(path.as_ref())?;
    parse_game_state(&content)
}

/// Parse game-state CSV: one guess per line, blank lines ignored
///
/// # Errors
///
/// Returns `LoadError::Parse` with the 1-based line number of the first
/// malformed row.
pub fn parse_game_state(content: &str) -> Result<GameState, LoadError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let cells: Vec<&str> = line.split(',').collect();
            GuessResult::from_cells(&cells).map_err(|source| LoadError::Parse {
                line: index + 1,
                source,
            })
        })
        .collect()
}
