use crate::logic::corpus::WordCorpus;
use crate::logic::scoring::{score_guess, Score};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;
use thiserror::Error;

pub const WORD_LENGTH: usize = 4;
pub const MAX_GUESSES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[serde(rename = "playing")]
    Playing,
    #[serde(rename = "win")]
    Won,
    #[serde(rename = "lose")]
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Rejections of a submitted guess. The display strings are what the player sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Invalid game ID")]
    InvalidSession,
    #[error("Invalid guess")]
    InvalidGuess,
    #[error("Word already guessed")]
    DuplicateGuess,
    #[error("Repeating letters not allowed")]
    RepeatingLetters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub score: Score,
    pub status: GameStatus,
    pub guess_number: usize,
    /// Only revealed once the game is lost.
    pub target_word: Option<String>,
}

#[must_use]
pub fn has_distinct_letters(word: &str) -> bool {
    let mut seen = HashSet::new();
    word.chars().all(|c| seen.insert(c))
}

#[derive(Debug, Clone)]
pub struct GameSession {
    secret: String,
    history: Vec<String>,
    status: GameStatus,
    last_activity: Instant,
}

impl GameSession {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            history: Vec::new(),
            status: GameStatus::Playing,
            last_activity: Instant::now(),
        }
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Accepted guesses in submission order, lowercased.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn last_activity(&self) -> Instant {
        self.last_activity
    }

    /// Runs the guess checks in order and returns the normalized guess.
    ///
    /// # Errors
    ///
    /// The first failing check decides the [`GuessError`].
    pub fn validate_guess(&self, corpus: &WordCorpus, raw: &str) -> Result<String, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::InvalidSession);
        }

        let guess = raw.to_lowercase();
        if guess.chars().count() != WORD_LENGTH || !corpus.is_member(&guess) {
            return Err(GuessError::InvalidGuess);
        }

        // History only ever holds lowercased words.
        if self.history.contains(&guess) {
            return Err(GuessError::DuplicateGuess);
        }

        if !has_distinct_letters(&guess) {
            return Err(GuessError::RepeatingLetters);
        }

        Ok(guess)
    }

    /// Scores a guess and advances the game. Rejected guesses leave the
    /// session untouched.
    ///
    /// # Errors
    ///
    /// See [`GameSession::validate_guess`].
    pub fn submit_guess(
        &mut self,
        corpus: &WordCorpus,
        raw: &str,
    ) -> Result<GuessOutcome, GuessError> {
        let guess = self.validate_guess(corpus, raw)?;
        let score = score_guess(&self.secret, &guess);

        self.history.push(guess);
        self.last_activity = Instant::now();
        self.status = if score.is_win() {
            GameStatus::Won
        } else if self.history.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };

        Ok(GuessOutcome {
            score,
            status: self.status,
            guess_number: self.history.len(),
            target_word: (self.status == GameStatus::Lost).then(|| self.secret.clone()),
        })
    }
}
