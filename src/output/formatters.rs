//! Formatting utilities for terminal output

use crate::core::{FeedbackSymbol, GuessResult};

/// Colour square for one feedback symbol
#[must_use]
pub const fn symbol_to_emoji(symbol: FeedbackSymbol) -> char {
    match symbol {
        FeedbackSymbol::Hit => '🟩',
        FeedbackSymbol::Present => '🟨',
        FeedbackSymbol::Miss => '⬜',
    }
}

/// Format a guess result as a row of colour squares
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result
        .feedback()
        .iter()
        .map(|&symbol| symbol_to_emoji(symbol))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width] before the cast
    let filled = ((value / max) * width as f64).clamp(0.0, width as f64) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
