use cowbull_core::{GameStatus, GuessError, GuessOutcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewGameResponse {
    pub game_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuessRequest {
    pub game_id: String,
    pub guess: String,
}

/// Reply to a guess. Rejections are ordinary replies with `valid: false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum GuessResponse {
    Accepted {
        valid: True,
        correct_position: usize,
        correct_letter: usize,
        status: GameStatus,
        target_word: Option<String>,
        guess_number: usize,
    },
    Rejected {
        valid: False,
        message: String,
    },
}

impl GuessResponse {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl From<GuessOutcome> for GuessResponse {
    fn from(outcome: GuessOutcome) -> Self {
        Self::Accepted {
            valid: True,
            correct_position: outcome.score.correct_position,
            correct_letter: outcome.score.correct_letter,
            status: outcome.status,
            target_word: outcome.target_word,
            guess_number: outcome.guess_number,
        }
    }
}

impl From<GuessError> for GuessResponse {
    fn from(err: GuessError) -> Self {
        Self::Rejected {
            valid: False,
            message: err.to_string(),
        }
    }
}

impl From<Result<GuessOutcome, GuessError>> for GuessResponse {
    fn from(result: Result<GuessOutcome, GuessError>) -> Self {
        result.map_or_else(Self::from, Self::from)
    }
}

/// `true` on the wire; lets the untagged enum pick the right variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "bool", into = "bool")]
pub struct True;

/// `false` on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "bool", into = "bool")]
pub struct False;

impl TryFrom<bool> for True {
    type Error = &'static str;

    fn try_from(value: bool) -> Result<Self, Self::Error> {
        if value {
            Ok(Self)
        } else {
            Err("expected true")
        }
    }
}

impl From<True> for bool {
    fn from(_: True) -> Self {
        true
    }
}

impl TryFrom<bool> for False {
    type Error = &'static str;

    fn try_from(value: bool) -> Result<Self, Self::Error> {
        if value {
            Err("expected false")
        } else {
            Ok(Self)
        }
    }
}

impl From<False> for bool {
    fn from(_: False) -> Self {
        false
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub active_games: usize,
}
