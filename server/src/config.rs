use clap::Parser;
use cowbull_core::{CorpusError, ScoreRange, SelectionMode, WordCorpus};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Server settings, read from the command line with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "cowbull-server", version, about = "Cows and Bulls word game server")]
pub struct Config {
    #[arg(long, env = "COWBULL_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    #[arg(long, env = "COWBULL_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Word list with one `word score` entry per line. Uses the built-in list if unset.
    #[arg(long, env = "COWBULL_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Words scoring below this are not accepted as guesses.
    #[arg(long, env = "COWBULL_VOCAB_MIN_SCORE")]
    pub vocab_min_score: Option<f64>,

    #[arg(long, env = "COWBULL_SECRET_MIN_SCORE")]
    pub secret_min_score: Option<f64>,

    #[arg(long, env = "COWBULL_SECRET_MAX_SCORE")]
    pub secret_max_score: Option<f64>,

    /// Pick secret words proportionally to their score.
    #[arg(long, env = "COWBULL_WEIGHTED")]
    pub weighted: bool,

    /// Drop games idle for longer than this. Games are kept forever if unset.
    #[arg(long, env = "COWBULL_SESSION_TTL_SECS")]
    pub session_ttl_secs: Option<u64>,

    #[arg(
        long,
        env = "COWBULL_SWEEP_INTERVAL_SECS",
        default_value_t = 300,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub sweep_interval_secs: u64,

    /// Directory of front-end files served for non-API paths.
    #[arg(long, env = "COWBULL_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Seed for secret word selection, for reproducible games.
    #[arg(long, env = "COWBULL_SEED")]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            corpus: None,
            vocab_min_score: None,
            secret_min_score: None,
            secret_max_score: None,
            weighted: false,
            session_ttl_secs: None,
            sweep_interval_secs: 300,
            static_dir: None,
            seed: None,
        }
    }
}

impl Config {
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub const fn secret_range(&self) -> ScoreRange {
        ScoreRange::new(self.secret_min_score, self.secret_max_score)
    }

    pub const fn selection_mode(&self) -> SelectionMode {
        if self.weighted {
            SelectionMode::Weighted
        } else {
            SelectionMode::Uniform
        }
    }

    pub fn session_ttl(&self) -> Option<Duration> {
        self.session_ttl_secs.map(Duration::from_secs)
    }

    pub const fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    pub fn load_corpus(&self) -> Result<WordCorpus, CorpusError> {
        let corpus = match &self.corpus {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading word corpus");
                WordCorpus::from_file(path)?
            }
            None => {
                tracing::info!("Using built-in word corpus");
                WordCorpus::embedded()?
            }
        };
        Ok(match self.vocab_min_score {
            Some(min) => corpus.with_vocabulary_floor(min),
            None => corpus,
        })
    }
}
