use crate::logic::game::WORD_LENGTH;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Bulls and cows for a single guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Letters in the right place (bulls).
    pub correct_position: usize,
    /// Letters present in the secret but placed elsewhere (cows).
    pub correct_letter: usize,
}

impl Score {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.correct_position == WORD_LENGTH
    }
}

/// Scores `guess` against `secret`.
///
/// The shared-letter total counts each distinct guess letter at most as often
/// as it occurs in both words; exact matches are part of that total and are
/// subtracted out so they are only reported once.
#[must_use]
pub fn score_guess(secret: &str, guess: &str) -> Score {
    let correct_position = secret
        .chars()
        .zip(guess.chars())
        .filter(|(s, g)| s == g)
        .count();

    let letters: BTreeSet<char> = guess.chars().collect();
    let shared: usize = letters
        .iter()
        .map(|&c| count_of(guess, c).min(count_of(secret, c)))
        .sum();

    Score {
        correct_position,
        correct_letter: shared - correct_position,
    }
}

fn count_of(word: &str, letter: char) -> usize {
    word.chars().filter(|&c| c == letter).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(secret: &str, guess: &str) -> (usize, usize) {
        let s = score_guess(secret, guess);
        (s.correct_position, s.correct_letter)
    }

    #[test]
    fn exact_match_is_all_bulls() {
        assert_eq!(score("oval", "oval"), (4, 0));
        assert!(score_guess("oval", "oval").is_win());
    }

    #[test]
    fn anagram_is_all_cows() {
        assert_eq!(score("oval", "lavo"), (0, 4));
    }

    #[test]
    fn repeated_guess_letter_counts_once() {
        // 'a' appears twice in the guess but once in the secret.
        assert_eq!(score("oval", "lava"), (0, 3));
    }

    #[test]
    fn mixed_bulls_and_cows() {
        assert_eq!(score("bird", "bind"), (3, 0));
        assert_eq!(score("bird", "drib"), (0, 4));
        assert_eq!(score("lion", "loin"), (2, 2));
        assert_eq!(score("form", "from"), (2, 2));
        assert_eq!(score("oval", "zinc"), (0, 0));
    }

    #[test]
    fn repeated_secret_letters() {
        assert_eq!(score("noon", "nope"), (2, 0));
        assert_eq!(score("noon", "onto"), (0, 3));
    }

    #[test]
    fn totals_never_exceed_word_length() {
        let words = ["oval", "lava", "bird", "noon", "lion", "form", "from", "zinc"];
        for secret in words {
            for guess in words {
                let s = score_guess(secret, guess);
                assert!(s.correct_position <= WORD_LENGTH);
                assert!(s.correct_position + s.correct_letter <= WORD_LENGTH);
            }
        }
    }
}
