use crate::config::Config;
use cowbull_core::{CorpusError, GameSession, ScoreRange, SecretPool, SelectionMode, WordCorpus};
use dashmap::DashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex, PoisonError};

pub mod guess_handler;
pub mod lifecycle;

/// Shared server state: the vocabulary and every game still in progress.
///
/// A game lives in `games` from `start_game` until the guess that wins or
/// loses it. Idle games are only dropped when a session TTL is configured.
#[derive(Debug)]
pub struct AppState {
    pub corpus: Arc<WordCorpus>,
    pub games: DashMap<String, GameSession>,
    secrets: SecretPool,
    rng: Mutex<StdRng>,
}

impl AppState {
    /// Fails if no corpus word falls in `range`, which leaves the server
    /// unable to start any game.
    pub fn new(
        corpus: Arc<WordCorpus>,
        range: ScoreRange,
        mode: SelectionMode,
    ) -> Result<Self, CorpusError> {
        Self::with_rng(corpus, range, mode, StdRng::from_entropy())
    }

    pub fn with_rng(
        corpus: Arc<WordCorpus>,
        range: ScoreRange,
        mode: SelectionMode,
        rng: StdRng,
    ) -> Result<Self, CorpusError> {
        let secrets = corpus.secret_pool(range, mode)?;
        tracing::info!(
            candidates = secrets.len(),
            vocabulary = corpus.len(),
            "Secret word pool ready"
        );
        Ok(Self {
            corpus,
            games: DashMap::new(),
            secrets,
            rng: Mutex::new(rng),
        })
    }

    pub fn from_config(corpus: Arc<WordCorpus>, config: &Config) -> Result<Self, CorpusError> {
        let range = config.secret_range();
        let mode = config.selection_mode();
        match config.seed {
            Some(seed) => Self::with_rng(corpus, range, mode, StdRng::seed_from_u64(seed)),
            None => Self::new(corpus, range, mode),
        }
    }

    pub fn active_games(&self) -> usize {
        self.games.len()
    }

    fn draw_secret(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.secrets.pick(&mut *rng).to_owned()
    }
}
