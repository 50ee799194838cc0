pub mod logic;

pub use logic::corpus::{CorpusError, ScoreRange, SecretPool, SelectionMode, WordCorpus};
pub use logic::game::{GameSession, GameStatus, GuessError, GuessOutcome, MAX_GUESSES, WORD_LENGTH};
pub use logic::scoring::{score_guess, Score};
