//! Per-letter feedback for a guess
//!
//! Each guessed letter receives one of three symbols:
//! - `+` Hit (correct letter, correct position)
//! - `~` Present (letter is in the answer, elsewhere)
//! - `-` Miss (letter does not occur again in the answer)
//!
//! A `GuessResult` serializes as five 2-character cells, symbol then letter,
//! e.g. `+c,~r,-a,-n,+e`. A bare letter with no symbol is read as Present.

use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;
use thiserror::Error;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    Hit,
    Present,
    Miss,
}

impl FeedbackSymbol {
    /// Serialization character for this symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hit => '+',
            Self::Present => '~',
            Self::Miss => '-',
        }
    }

    /// Parse a serialization character (`+`, `~`, `-`)
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Hit),
            '~' => Some(Self::Present),
            '-' => Some(Self::Miss),
            _ => None,
        }
    }

    /// Parse a colour-pattern character as typed by a player
    ///
    /// Accepts G/🟩/`+` for Hit, Y/🟨/`~` for Present and `-`/`_`/X/⬜ for Miss.
    #[must_use]
    pub const fn from_pattern_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' | '+' => Some(Self::Hit),
            'Y' | 'y' | '🟨' | '~' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '⬜' => Some(Self::Miss),
            _ => None,
        }
    }

    /// True for Hit and Present: the letter is known to occur in the answer
    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Hit | Self::Present)
    }
}

/// Error parsing a serialized guess result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 5 feedback cells, got {0}")]
    WrongCellCount(usize),
    #[error("unknown feedback symbol '{0}'")]
    UnknownSymbol(char),
    #[error("feedback symbol '{0}' is not followed by a letter")]
    MissingLetter(char),
    #[error("malformed feedback cell '{0}'")]
    MalformedCell(String),
    #[error(transparent)]
    Word(#[from] WordError),
}

/// Feedback for one guessed word, position-aligned to the guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    word: Word,
    feedback: [FeedbackSymbol; WORD_LENGTH],
}

impl GuessResult {
    #[must_use]
    pub const fn new(word: Word, feedback: [FeedbackSymbol; WORD_LENGTH]) -> Self {
        Self { word, feedback }
    }

    /// Build a result from a guessed word and a colour pattern like `"GY-G-"`
    ///
    /// # Errors
    /// Returns `ParseError` if the pattern is not 5 recognised characters.
    pub fn from_pattern(word: Word, pattern: &str) -> Result<Self, ParseError> {
        let symbols = pattern
            .trim()
            .chars()
            .map(|ch| FeedbackSymbol::from_pattern_char(ch).ok_or(ParseError::UnknownSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        let feedback: [FeedbackSymbol; WORD_LENGTH] = symbols
            .try_into()
            .map_err(|s: Vec<_>| ParseError::WrongCellCount(s.len()))?;

        Ok(Self::new(word, feedback))
    }

    /// Parse five serialized cells (`"+a"`, `"~b"`, `"-c"`, or a bare `"d"`)
    ///
    /// # Errors
    /// Returns `ParseError` if there are not exactly five well-formed cells.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Result<Self, ParseError> {
        if cells.len() != WORD_LENGTH {
            return Err(ParseError::WrongCellCount(cells.len()));
        }

        let mut letters = String::with_capacity(WORD_LENGTH);
        let mut feedback = [FeedbackSymbol::Miss; WORD_LENGTH];

        for (slot, cell) in feedback.iter_mut().zip(cells) {
            let cell = cell.as_ref().trim();
            let mut chars = cell.chars();
            let (symbol, letter) = match (chars.next(), chars.next(), chars.next()) {
                (Some(letter), None, None) if letter.is_ascii_alphabetic() => {
                    (FeedbackSymbol::Present, letter)
                }
                (Some(ch), Some(letter), None) => {
                    let symbol =
                        FeedbackSymbol::from_symbol(ch).ok_or(ParseError::UnknownSymbol(ch))?;
                    (symbol, letter)
                }
                _ => return Err(ParseError::MalformedCell(cell.to_string())),
            };
            *slot = symbol;
            letters.push(letter);
        }

        Ok(Self::new(Word::new(letters)?, feedback))
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[FeedbackSymbol; WORD_LENGTH] {
        &self.feedback
    }

    /// Iterate `(letter, symbol)` pairs in guess order
    pub fn iter(&self) -> impl Iterator<Item = (u8, FeedbackSymbol)> + '_ {
        self.word.chars().iter().copied().zip(self.feedback)
    }

    /// True when every position is a Hit
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.iter().all(|&s| s == FeedbackSymbol::Hit)
    }

    /// The five 2-character cells of this result
    #[must_use]
    pub fn cells(&self) -> [String; WORD_LENGTH] {
        std::array::from_fn(|i| {
            format!(
                "{}{}",
                self.feedback[i].symbol(),
                char::from(self.word.char_at(i))
            )
        })
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cells().join(","))
    }
}

impl std::str::FromStr for GuessResult {
    type Err = ParseError;

    /// Parse either comma-separated cells or the compact form (`+c~r-a-n+e`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            let cells: Vec<&str> = s.split(',').collect();
            return Self::from_cells(&cells);
        }

        let mut cells = Vec::with_capacity(WORD_LENGTH);
        let mut chars = s.chars().filter(|c| !c.is_whitespace());
        while let Some(ch) = chars.next() {
            if FeedbackSymbol::from_symbol(ch).is_some() {
                let letter = chars.next().ok_or(ParseError::MissingLetter(ch))?;
                cells.push(format!("{ch}{letter}"));
            } else {
                cells.push(ch.to_string());
            }
        }
        Self::from_cells(&cells)
    }
}

/// Compute the feedback for `guess` when the secret is `answer`
///
/// Hits are marked first. Then, for every answer position not matched by a
/// Hit, the leftmost unmarked guess position holding that answer letter is
/// marked Present, so Present marks never exceed the letter's remaining
/// multiplicity in the answer. Everything left over is a Miss.
///
/// # Examples
/// ```
/// use wordle_frequency::core::{Word, compute_feedback};
///
/// let guess = Word::new("speed").unwrap();
/// let answer = Word::new("erase").unwrap();
/// let result = compute_feedback(&guess, &answer);
/// assert_eq!(result.to_string(), "~s,-p,~e,~e,-d");
/// ```
#[must_use]
pub fn compute_feedback(guess: &Word, answer: &Word) -> GuessResult {
    let mut marks: [Option<FeedbackSymbol>; WORD_LENGTH] = [None; WORD_LENGTH];

    for (position, mark) in marks.iter_mut().enumerate() {
        if guess.char_at(position) == answer.char_at(position) {
            *mark = Some(FeedbackSymbol::Hit);
        }
    }

    for position in 0..WORD_LENGTH {
        if marks[position] == Some(FeedbackSymbol::Hit) {
            continue;
        }
        let letter = answer.char_at(position);
        if let Some(slot) = (0..WORD_LENGTH)
            .find(|&other| marks[other].is_none() && guess.char_at(other) == letter)
        {
            marks[slot] = Some(FeedbackSymbol::Present);
        }
    }

    GuessResult::new(
        guess.clone(),
        marks.map(|mark| mark.unwrap_or(FeedbackSymbol::Miss)),
    )
}

/// Validating wrapper around [`compute_feedback`] for raw strings
///
/// # Errors
/// Returns `WordError` if either word is not a valid 5-letter word.
pub fn compute_feedback_str(guess: &str, answer: &str) -> Result<GuessResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok(compute_feedback(&guess, &answer))
}

#[cfg(test)]
mod tests {
    use super::FeedbackSymbol::{Hit, Miss, Present};
    use super::*;

    fn feedback(guess: &str, answer: &str) -> [FeedbackSymbol; WORD_LENGTH] {
        *compute_feedback_str(guess, answer).unwrap().feedback()
    }

    fn positive_marks(result: &GuessResult, letter: u8) -> usize {
        result
            .iter()
            .filter(|&(l, s)| l == letter && s.is_positive())
            .count()
    }

    #[test]
    fn all_hits() {
        let result = compute_feedback_str("crane", "crane").unwrap();
        assert!(result.is_solved());
    }

    #[test]
    fn all_misses() {
        assert_eq!(feedback("abcde", "fghij"), [Miss; 5]);
    }

    #[test]
    fn mixed_feedback() {
        // C(hit) R(present) A(hit) N(miss) E(miss)
        assert_eq!(feedback("crane", "charm"), [Hit, Present, Hit, Miss, Miss]);
    }

    #[test]
    fn duplicate_guess_letters_capped_by_answer() {
        // ERASE has two Es; SPEED marks both, never more
        let result = compute_feedback_str("speed", "erase").unwrap();
        assert_eq!(*result.feedback(), [Present, Miss, Present, Present, Miss]);
        assert_eq!(positive_marks(&result, b'e'), 2);
    }

    #[test]
    fn single_answer_letter_marks_once() {
        // GLASS has one A: only one non-hit A may be marked in SASSY-style guesses
        let result = compute_feedback_str("sassy", "glass").unwrap();
        assert_eq!(*result.feedback(), [Present, Present, Miss, Hit, Miss]);
        assert_eq!(positive_marks(&result, b's'), 2);
        assert_eq!(positive_marks(&result, b'a'), 1);
    }

    #[test]
    fn hit_consumes_letter_before_present() {
        // ROBOT vs FLOOR: second O is a hit, first O takes the remaining one
        assert_eq!(feedback("robot", "floor"), [Present, Present, Miss, Hit, Miss]);
        // Only one E in ABIDE, already taken by the hit in position 5
        assert_eq!(feedback("eerie", "abide"), [Miss, Miss, Miss, Present, Hit]);
    }

    #[test]
    fn repeated_answer_letters() {
        // AABBC has two As and two Bs
        assert_eq!(feedback("abcde", "aabbc"), [Hit, Present, Present, Miss, Miss]);
        assert_eq!(feedback("bbbbb", "aabbc"), [Miss, Miss, Hit, Hit, Miss]);
    }

    #[test]
    fn marks_never_exceed_multiplicity() {
        let words = ["speed", "erase", "sassy", "glass", "aabbc", "abcde", "eerie", "robot"];
        for guess in words {
            for answer in words {
                let result = compute_feedback_str(guess, answer).unwrap();
                let answer_word = Word::new(answer).unwrap();
                for letter in b'a'..=b'z' {
                    assert!(
                        positive_marks(&result, letter) <= answer_word.count_of(letter),
                        "{guess} vs {answer}: too many marks for {}",
                        char::from(letter)
                    );
                }
            }
        }
    }

    #[test]
    fn invalid_input_rejected() {
        assert!(matches!(
            compute_feedback_str("toolong", "crane"),
            Err(WordError::InvalidLength(7))
        ));
        assert!(compute_feedback_str("crane", "cr4ne").is_err());
    }

    #[test]
    fn serialize_cells() {
        let result = compute_feedback_str("crane", "slate").unwrap();
        assert_eq!(result.to_string(), "-c,-r,+a,-n,+e");
    }

    #[test]
    fn parse_serialized_forms() {
        let expected = compute_feedback_str("crane", "slate").unwrap();
        assert_eq!("-c,-r,+a,-n,+e".parse::<GuessResult>().unwrap(), expected);
        assert_eq!("-c-r+a-n+e".parse::<GuessResult>().unwrap(), expected);
        assert_eq!(" -c, -r, +A, -n, +e ".parse::<GuessResult>().unwrap(), expected);
    }

    #[test]
    fn bare_letter_is_present() {
        let result = GuessResult::from_cells(&["+c", "r", "-a", "n", "+e"]).unwrap();
        assert_eq!(*result.feedback(), [Hit, Present, Miss, Present, Hit]);
        assert_eq!(result.word().text(), "crane");

        let compact: GuessResult = "+cr-an+e".parse().unwrap();
        assert_eq!(compact, result);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            GuessResult::from_cells(&["+c", "-r"]),
            Err(ParseError::WrongCellCount(2))
        );
        assert_eq!(
            "*c,-r,+a,-n,+e".parse::<GuessResult>(),
            Err(ParseError::UnknownSymbol('*'))
        );
        assert_eq!(
            "-c-r+a-n+".parse::<GuessResult>(),
            Err(ParseError::MissingLetter('+'))
        );
        assert!(matches!(
            "+c,-r,+a,-n,+ee".parse::<GuessResult>(),
            Err(ParseError::MalformedCell(_))
        ));
        assert!(matches!(
            "+1,-r,+a,-n,+e".parse::<GuessResult>(),
            Err(ParseError::Word(WordError::InvalidCharacters))
        ));
    }

    #[test]
    fn from_colour_pattern() {
        let word = Word::new("crane").unwrap();
        let a = GuessResult::from_pattern(word.clone(), "GY-xG").unwrap();
        let b = GuessResult::from_pattern(word.clone(), "🟩🟨⬜⬜🟩").unwrap();
        assert_eq!(a, b);
        assert_eq!(*a.feedback(), [Hit, Present, Miss, Miss, Hit]);

        assert_eq!(
            GuessResult::from_pattern(word.clone(), "GYG"),
            Err(ParseError::WrongCellCount(3))
        );
        assert_eq!(
            GuessResult::from_pattern(word, "GYQGY"),
            Err(ParseError::UnknownSymbol('Q'))
        );
    }
}
