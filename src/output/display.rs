//! Display functions for command results

use super::formatters::{create_progress_bar, result_to_emoji};
use crate::commands::benchmark::DISTRIBUTION_LIMIT;
use crate::commands::{BenchmarkResult, SolveResult, Suggestion};
use colored::Colorize;

/// Print next-guess advice
pub fn print_suggestion(suggestion: &Suggestion<'_>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} possible answers, {} legal guesses",
        suggestion.remaining_answers, suggestion.remaining_guesses
    );
    println!("{}", "─".repeat(60).cyan());

    let Some(guess) = suggestion.guess else {
        println!(
            "\n{}",
            "❌ No guess fits this game state. Check the results entered."
                .red()
                .bold()
        );
        return;
    };

    println!(
        "\n💡 Next guess: {}",
        guess.text().to_uppercase().bright_yellow().bold()
    );

    if !suggestion.ranked.is_empty() {
        println!("\n📊 {}", "Top scores:".bright_cyan().bold());
        for (i, scored) in suggestion.ranked.iter().enumerate() {
            let marker = if scored.possible_answer { "●" } else { "○" };
            println!(
                "   {:2}. {} {} {:10.2}",
                i + 1,
                marker,
                scored.word.text().to_uppercase(),
                scored.score
            );
        }
        println!("   (● possible answer)");
    }

    if !suggestion.candidates.is_empty() {
        println!("\nRemaining answers:");
        for candidate in &suggestion.candidates {
            println!("  • {}", candidate.text().to_uppercase());
        }
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.result.word().text().to_uppercase(),
            result_to_emoji(&step.result)
        );

        if verbose {
            println!("  Result:     {}", step.result);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Guess was {}",
                if step.possible_answer {
                    "a possible answer"
                } else {
                    "not a possible answer"
                }
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games());
    println!("   Solved:           {}", result.solved.to_string().green());
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    let rows = (1..=DISTRIBUTION_LIMIT)
        .map(|guesses| {
            let count = result.distribution.get(&guesses).copied().unwrap_or(0);
            (guesses.to_string(), count)
        })
        .chain(std::iter::once(("+".to_string(), result.beyond_limit())));

    for (label, count) in rows {
        let pct = count as f64 / result.solved as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {label:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    let mut first_guesses: Vec<(&String, &usize)> = result.first_guess_used.iter().collect();
    first_guesses.sort_by_key(|(_, count)| std::cmp::Reverse(**count));

    println!("\n🎯 First Guess Usage");
    for (word, count) in first_guesses.iter().take(5) {
        println!("   {}: {count} times", word.to_uppercase());
    }
}
