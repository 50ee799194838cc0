use crate::game_manager::AppState;
use cowbull_core::{GuessError, GuessOutcome};
use dashmap::mapref::entry::Entry;

impl AppState {
    /// Applies one guess to a game.
    ///
    /// The whole check, append and finish sequence runs under the map entry's
    /// lock, so concurrent guesses on one game are serialized and a finished
    /// game is removed before anyone else can see it.
    pub fn submit_guess(&self, game_id: &str, raw: &str) -> Result<GuessOutcome, GuessError> {
        let Entry::Occupied(mut entry) = self.games.entry(game_id.to_owned()) else {
            tracing::debug!(game_id = %game_id, "Guess for unknown game");
            return Err(GuessError::InvalidSession);
        };

        let result = entry.get_mut().submit_guess(&self.corpus, raw);
        match &result {
            Ok(outcome) if outcome.status.is_terminal() => {
                entry.remove();
                tracing::info!(
                    game_id = %game_id,
                    status = ?outcome.status,
                    guesses = outcome.guess_number,
                    "Game finished, session removed"
                );
            }
            Ok(outcome) => {
                tracing::debug!(
                    game_id = %game_id,
                    guess_number = outcome.guess_number,
                    correct_position = outcome.score.correct_position,
                    correct_letter = outcome.score.correct_letter,
                    "Guess accepted"
                );
            }
            Err(err) => {
                tracing::debug!(game_id = %game_id, error = %err, "Guess rejected");
            }
        }
        result
    }
}
