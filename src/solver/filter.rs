//! Candidate filtering
//!
//! Prunes a dictionary to the words consistent with every guess result seen
//! so far. Each result contributes positional constraints (a Hit pins the
//! letter, a Present or Miss forbids it at that slot) and per-letter count
//! constraints derived from how many times the letter was marked Hit/Present
//! versus Miss.

use crate::core::{ALPHABET_SIZE, FeedbackSymbol, GuessResult, Word, letter_index};

/// Per-letter mark counts for one guess result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterTally {
    positive: [u8; ALPHABET_SIZE],
    negative: [u8; ALPHABET_SIZE],
}

impl LetterTally {
    #[must_use]
    pub fn from_result(result: &GuessResult) -> Self {
        let mut tally = Self {
            positive: [0; ALPHABET_SIZE],
            negative: [0; ALPHABET_SIZE],
        };

        for (letter, symbol) in result.iter() {
            let index = letter_index(letter);
            if symbol.is_positive() {
                tally.positive[index] += 1;
            } else {
                tally.negative[index] += 1;
            }
        }

        tally
    }

    /// Hit + Present marks for `letter`: the minimum occurrences in the answer
    #[inline]
    #[must_use]
    pub const fn positive_hits(&self, letter: u8) -> usize {
        self.positive[letter_index(letter)] as usize
    }

    /// Miss marks for `letter`
    #[inline]
    #[must_use]
    pub const fn negative_hits(&self, letter: u8) -> usize {
        self.negative[letter_index(letter)] as usize
    }

    /// Whether a word holding `count` copies of `letter` fits this tally
    #[must_use]
    pub const fn allows_count(&self, letter: u8, count: usize) -> bool {
        match (self.positive_hits(letter), self.negative_hits(letter)) {
            (0, _) => count == 0,
            (positive, 0) => count >= positive,
            (positive, _) => count == positive,
        }
    }
}

/// Constraints derived from one guess result
struct Constraint<'h> {
    result: &'h GuessResult,
    tally: LetterTally,
}

impl Constraint<'_> {
    fn admits(&self, word: &Word) -> bool {
        let positional = self
            .result
            .iter()
            .enumerate()
            .all(|(position, (letter, symbol))| match symbol {
                FeedbackSymbol::Hit => word.char_at(position) == letter,
                FeedbackSymbol::Present | FeedbackSymbol::Miss => word.char_at(position) != letter,
            });

        positional
            && self
                .result
                .word()
                .chars()
                .iter()
                .all(|&letter| self.tally.allows_count(letter, word.count_of(letter)))
    }
}

/// Pre-computed constraints for a whole history
///
/// Constraints commute, so the order results were recorded in does not
/// change which words are admitted.
pub struct CandidateFilter<'h> {
    constraints: Vec<Constraint<'h>>,
}

impl<'h> CandidateFilter<'h> {
    #[must_use]
    pub fn new(history: &'h [GuessResult]) -> Self {
        let constraints = history
            .iter()
            .map(|result| Constraint {
                result,
                tally: LetterTally::from_result(result),
            })
            .collect();

        Self { constraints }
    }

    /// True if `word` is consistent with every result in the history
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.constraints.iter().all(|c| c.admits(word))
    }

    /// Keep only the admitted words, preserving dictionary order
    pub fn apply<'a, I>(&self, dictionary: I) -> Vec<&'a Word>
    where
        I: IntoIterator<Item = &'a Word>,
    {
        dictionary.into_iter().filter(|w| self.admits(w)).collect()
    }
}

/// Filter `dictionary` down to the words consistent with `history`
///
/// An empty result is a valid outcome: no word fits the feedback.
///
/// # Examples
/// ```
/// use wordle_frequency::core::{GuessResult, Word};
/// use wordle_frequency::solver::filter_candidates;
///
/// let dictionary: Vec<Word> = ["crate", "slate", "grate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let history: Vec<GuessResult> = vec!["-g,+r,+a,+t,+e".parse().unwrap()];
///
/// let remaining = filter_candidates(&dictionary, &history);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "crate");
/// ```
pub fn filter_candidates<'a, I>(dictionary: I, history: &[GuessResult]) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    CandidateFilter::new(history).apply(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compute_feedback;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn result(s: &str) -> GuessResult {
        s.parse().unwrap()
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn empty_history_keeps_everything() {
        let dictionary = words(&["crane", "slate", "abide"]);
        assert_eq!(filter_candidates(&dictionary, &[]).len(), 3);
    }

    #[test]
    fn tally_counts_marks() {
        let tally = LetterTally::from_result(&result("~s,-p,~e,~e,-d"));
        assert_eq!(tally.positive_hits(b'e'), 2);
        assert_eq!(tally.negative_hits(b'e'), 0);
        assert_eq!(tally.positive_hits(b'p'), 0);
        assert_eq!(tally.negative_hits(b'p'), 1);
        assert_eq!(tally.positive_hits(b'z'), 0);
    }

    #[test]
    fn count_rules() {
        // E: one present, one miss -> exactly one E
        let exact = LetterTally::from_result(&result("-e,~e,-r,-i,-c"));
        assert!(exact.allows_count(b'e', 1));
        assert!(!exact.allows_count(b'e', 2));
        assert!(!exact.allows_count(b'e', 0));

        // S: present only -> at least one S
        let at_least = LetterTally::from_result(&result("~s,-l,-a,-t,-e"));
        assert!(at_least.allows_count(b's', 1));
        assert!(at_least.allows_count(b's', 3));
        assert!(!at_least.allows_count(b's', 0));

        // L: miss only -> absent
        assert!(at_least.allows_count(b'l', 0));
        assert!(!at_least.allows_count(b'l', 1));
    }

    #[test]
    fn hit_pins_letter() {
        let dictionary = words(&["crate", "grate", "crane", "trace"]);
        let remaining = filter_candidates(&dictionary, &[result("+c,+r,-x,-y,-z")]);
        assert_eq!(texts(&remaining), ["crate", "crane"].map(String::from));
    }

    #[test]
    fn present_forbids_its_own_position() {
        let dictionary = words(&["about", "tabby", "habit", "adopt"]);
        // A present at position 0 and B missing
        let remaining = filter_candidates(&dictionary, &[result("~a,-b,-c,-d,-e")]);
        assert!(remaining.is_empty());

        let remaining = filter_candidates(&dictionary, &[result("~b,-q,-w,-x,-z")]);
        assert_eq!(texts(&remaining), ["about", "tabby", "habit"].map(String::from));
    }

    #[test]
    fn miss_alongside_present_caps_count() {
        // EERIE vs ABIDE marks -e,-e,-r,~i,+e
        let guess = Word::new("eerie").unwrap();
        let answer = Word::new("abide").unwrap();
        let history = [compute_feedback(&guess, &answer)];

        let dictionary = words(&["abide", "geese", "elide", "aside", "bribe"]);
        let remaining = filter_candidates(&dictionary, &history);
        // Exactly one E (at the end), an I elsewhere than position 3, no R
        assert_eq!(texts(&remaining), ["abide", "aside"].map(String::from));
    }

    #[test]
    fn all_misses_remove_letter_everywhere() {
        let dictionary = words(&["lemon", "melon", "board", "radio"]);
        let remaining = filter_candidates(&dictionary, &[result("-l,-e,-q,-q,-q")]);
        assert_eq!(texts(&remaining), ["board", "radio"].map(String::from));
    }

    #[test]
    fn contradictory_history_gives_empty_set() {
        let dictionary = words(&["crane", "slate"]);
        let history = [result("+c,+r,+a,+n,+e"), result("-c,-r,-a,-n,-e")];
        assert!(filter_candidates(&dictionary, &history).is_empty());
    }

    #[test]
    fn constraints_commute() {
        let dictionary = words(&["abide", "about", "adopt", "crane", "audio", "adore"]);
        let a = result("+a,-r,~o,-s,-e");
        let b = result("+a,-b,-o,-u,+t");
        let forward = filter_candidates(&dictionary, &[a.clone(), b.clone()]);
        let backward = filter_candidates(&dictionary, &[b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn filter_admits_and_applies_to_references() {
        let dictionary = words(&["crate", "grate", "irate"]);
        let history = [result("-c,+r,+a,+t,+e")];
        let filter = CandidateFilter::new(&history);
        assert!(!filter.admits(&dictionary[0]));
        assert!(filter.admits(&dictionary[1]));

        let refs: Vec<&Word> = dictionary.iter().collect();
        let again = filter.apply(refs.iter().copied());
        assert_eq!(texts(&again), ["grate", "irate"].map(String::from));
    }
}
