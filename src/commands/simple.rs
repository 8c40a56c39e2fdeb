//! Simple interactive CLI mode
//!
//! Suggests a guess, reads the colour feedback the game showed, and repeats.
//! Reads from any `BufRead` so sessions can be scripted.

use crate::core::{FeedbackSymbol, GameState, GuessResult, WORD_LENGTH, Word};
use crate::output::formatters::result_to_emoji;
use crate::solver::Solver;
use colored::Colorize;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Candidate lists at or below this size are printed in full
const SHOW_CANDIDATES: usize = 10;

/// One line of player input during a game
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    New,
    Undo,
    Feedback(GuessResult),
    Override(Word),
    Invalid(String),
}

fn parse_input(input: &str, guess: &Word) -> Input {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::New,
        "undo" | "u" => Input::Undo,
        "win" | "correct" | "solved" => Input::Feedback(GuessResult::new(
            guess.clone(),
            [FeedbackSymbol::Hit; WORD_LENGTH],
        )),
        _ => {
            if let Some(text) = input.strip_prefix("guess ") {
                return match Word::new(text.trim()) {
                    Ok(word) => Input::Override(word),
                    Err(e) => Input::Invalid(e.to_string()),
                };
            }
            match GuessResult::from_pattern(guess.clone(), &input) {
                Ok(result) => Input::Feedback(result),
                Err(e) => Input::Invalid(e.to_string()),
            }
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Returns the number of games solved when the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
#[allow(clippy::too_many_lines)] // Interactive game loop
pub fn run_simple<B: BufRead, R: Rng + ?Sized>(
    solver: &Solver<'_>,
    reader: &mut B,
    rng: &mut R,
) -> io::Result<usize> {
    print_banner();

    let mut game = GameState::new();
    let mut solved_games = 0;

    loop {
        let remaining = solver.candidates(game.results());

        let Some(mut guess) = solver.choose_guess(game.results(), rng).cloned() else {
            println!(
                "\n{} Your feedback may be incorrect.",
                "❌ No guesses fit this feedback!".red()
            );
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            let Some(command) = read_line(reader, "Command")? else {
                return Ok(solved_games);
            };
            match command.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(solved_games),
                "new" | "n" => game = GameState::new(),
                "undo" | "u" => {
                    game.undo();
                }
                _ => {}
            }
            continue;
        };

        println!("{}", "─".repeat(60).bright_black());
        println!(
            "Turn {}: {} possible answers",
            game.len() + 1,
            remaining.len()
        );
        println!("{}", "─".repeat(60).bright_black());
        println!(
            "\n💡 Suggested guess: {}",
            guess.text().to_uppercase().bright_yellow().bold()
        );

        if remaining.len() <= SHOW_CANDIDATES {
            println!("\nRemaining answers:");
            for candidate in &remaining {
                println!("  • {}", candidate.text().to_uppercase());
            }
        }
        println!();

        let result = loop {
            let Some(input) = read_line(reader, "Feedback (G/Y/-, 'win', or command)")? else {
                return Ok(solved_games);
            };

            match parse_input(&input, &guess) {
                Input::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(solved_games);
                }
                Input::New => {
                    game = GameState::new();
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                Input::Undo => {
                    if game.undo().is_some() {
                        println!("✓ Undone! Back to turn {}\n", game.len() + 1);
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                Input::Override(word) => {
                    debug!("player overrode {guess} with {word}");
                    println!("Playing {} instead", word.text().to_uppercase().bold());
                    guess = word;
                }
                Input::Feedback(result) => break Some(result),
                Input::Invalid(reason) => {
                    println!("❌ {reason}. Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n");
                }
            }
        };

        let Some(result) = result else {
            continue;
        };
        game.push(result);

        if game.is_solved() {
            solved_games += 1;
            print_victory(&game);

            let again = read_line(reader, "Play again? (yes/no)")?.unwrap_or_default();
            if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(solved_games);
            }
            game = GameState::new();
            println!("\n🔄 New game started!\n");
        }
    }
}

fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses built from the most common letters.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩/+ for green (correct position)");
    println!("  - Use Y/y/🟨/~ for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess,");
    println!("          'guess <word>' to play a different word\n");
}

fn print_victory(game: &GameState) {
    let turns = game.len();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉  W O R D L E   S O L V E D !  🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, result) in game.results().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            result.word().text().to_uppercase().bright_white().bold(),
            result_to_emoji(result)
        );
    }
    println!("\n{}\n", "═".repeat(60).bright_cyan());
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line<B: BufRead>(reader: &mut B, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
