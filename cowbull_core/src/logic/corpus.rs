use crate::logic::game::{has_distinct_letters, WORD_LENGTH};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Word list compiled into the binary, used when no corpus file is configured.
pub const EMBEDDED_CORPUS: &str = include_str!("../../resources/words.txt");

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
    #[error("corpus line {line}: invalid score {value:?}")]
    Parse { line: usize, value: String },
    #[error("no corpus word has a score in [{min}, {max}]")]
    EmptyCandidateSet { min: f64, max: f64 },
}

/// Inclusive score bounds. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ScoreRange {
    #[must_use]
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn contains(&self, score: f64) -> bool {
        !self.min.is_some_and(|min| score < min) && !self.max.is_some_and(|max| score > max)
    }

    fn bounds(&self) -> (f64, f64) {
        (
            self.min.unwrap_or(f64::NEG_INFINITY),
            self.max.unwrap_or(f64::INFINITY),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Every candidate is equally likely.
    #[default]
    Uniform,
    /// Candidates are drawn proportionally to their score.
    Weighted,
}

/// Checks the rules every corpus word loaded from text must satisfy:
/// four lowercase ASCII letters, no letter repeated, and not a plural.
#[must_use]
pub fn is_admissible_word(word: &str) -> bool {
    word.len() == WORD_LENGTH
        && word.bytes().all(|b| b.is_ascii_lowercase())
        && has_distinct_letters(word)
        && !word.ends_with('s')
}

/// Immutable mapping from vocabulary word to commonality score.
#[derive(Debug, Clone, Default)]
pub struct WordCorpus {
    scores: HashMap<String, f64>,
}

impl WordCorpus {
    /// Builds a corpus from `(word, score)` pairs as given. Words are lowercased
    /// but not otherwise filtered.
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let scores = entries
            .into_iter()
            .map(|(word, score)| (word.as_ref().to_lowercase(), score))
            .collect();
        Self { scores }
    }

    /// Parses a word list. Each non-blank line holds `word` or `word score`;
    /// lines starting with `#` are comments. Words failing
    /// [`is_admissible_word`] are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Io`] if reading fails and [`CorpusError::Parse`]
    /// if a score is not a finite number.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CorpusError> {
        let mut scores = HashMap::new();
        let mut skipped = 0_usize;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let score = match fields.next() {
                Some(raw) => parse_score(raw).ok_or_else(|| CorpusError::Parse {
                    line: index + 1,
                    value: raw.to_owned(),
                })?,
                None => 0.0,
            };

            let word = word.to_lowercase();
            if !is_admissible_word(&word) {
                log::debug!("Skipping inadmissible corpus word {word:?}");
                skipped += 1;
                continue;
            }
            scores.insert(word, score);
        }

        if skipped > 0 {
            log::warn!("Skipped {skipped} inadmissible corpus entries");
        }
        log::info!("Loaded corpus with {} words", scores.len());
        Ok(Self { scores })
    }

    /// # Errors
    ///
    /// See [`WordCorpus::from_reader`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// # Errors
    ///
    /// Only fails if the compiled-in list is malformed.
    pub fn embedded() -> Result<Self, CorpusError> {
        Self::from_reader(EMBEDDED_CORPUS.as_bytes())
    }

    /// Drops every word scoring below `min`.
    #[must_use]
    pub fn with_vocabulary_floor(mut self, min: f64) -> Self {
        let before = self.scores.len();
        self.scores.retain(|_, score| *score >= min);
        log::info!(
            "Vocabulary floor {min} kept {} of {before} words",
            self.scores.len()
        );
        self
    }

    #[must_use]
    pub fn is_member(&self, word: &str) -> bool {
        self.scores.contains_key(word.to_lowercase().as_str())
    }

    #[must_use]
    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word.to_lowercase().as_str()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }

    /// Collects the words whose score lies in `range` into a pool that can be
    /// drawn from repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::EmptyCandidateSet`] if no word is in range.
    pub fn secret_pool(
        &self,
        range: ScoreRange,
        mode: SelectionMode,
    ) -> Result<SecretPool, CorpusError> {
        let mut candidates: Vec<(&str, f64)> = self
            .scores
            .iter()
            .filter(|(_, score)| range.contains(**score))
            .map(|(word, score)| (word.as_str(), *score))
            .collect();

        if candidates.is_empty() {
            let (min, max) = range.bounds();
            return Err(CorpusError::EmptyCandidateSet { min, max });
        }

        // Stable order so a seeded rng always draws the same word.
        candidates.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let weights = match mode {
            SelectionMode::Uniform => None,
            SelectionMode::Weighted => {
                match WeightedIndex::new(candidates.iter().map(|(_, score)| score.max(0.0))) {
                    Ok(index) => Some(index),
                    Err(err) => {
                        log::warn!("Weighted selection unavailable ({err}), using uniform");
                        None
                    }
                }
            }
        };

        log::info!(
            "Secret pool holds {} of {} words ({mode:?})",
            candidates.len(),
            self.scores.len()
        );

        Ok(SecretPool {
            words: candidates
                .into_iter()
                .map(|(word, _)| word.to_owned())
                .collect(),
            weights,
        })
    }

    /// Draws one word with a score in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::EmptyCandidateSet`] if no word is in range.
    pub fn select_secret_word<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        range: ScoreRange,
        mode: SelectionMode,
    ) -> Result<String, CorpusError> {
        let pool = self.secret_pool(range, mode)?;
        Ok(pool.pick(rng).to_owned())
    }
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|score| score.is_finite())
}

/// Non-empty set of secret-word candidates.
#[derive(Debug, Clone)]
pub struct SecretPool {
    words: Vec<String>,
    weights: Option<WeightedIndex<f64>>,
}

impl SecretPool {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    // `words` is never empty and both samplers stay inside 0..len.
    #[allow(clippy::indexing_slicing)]
    #[must_use]
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        debug_assert!(!self.is_empty());
        let index = match &self.weights {
            Some(weights) => weights.sample(rng),
            None => rng.gen_range(0..self.words.len()),
        };
        &self.words[index]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> WordCorpus {
        WordCorpus::from_entries([("oval", 3.7), ("bird", 4.7), ("that", 7.1), ("lion", 4.3)])
    }

    #[test]
    fn admissible_words() {
        assert!(is_admissible_word("oval"));
        assert!(!is_admissible_word("oval!"));
        assert!(!is_admissible_word("Oval"));
        assert!(!is_admissible_word("noon"));
        assert!(!is_admissible_word("cats"));
        assert!(!is_admissible_word("ov4l"));
        assert!(!is_admissible_word("ovál"));
    }

    #[test]
    fn reader_parses_scores_comments_and_bare_words() {
        let text = "# header\n\noval 3.71\nBIRD 4.69\nlion\n";
        let corpus = WordCorpus::from_reader(text.as_bytes()).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.score("oval"), Some(3.71));
        assert_eq!(corpus.score("bird"), Some(4.69));
        assert_eq!(corpus.score("lion"), Some(0.0));
    }

    #[test]
    fn reader_skips_inadmissible_words() {
        let text = "oval 3.7\nlava 4.0\ncats 5.0\nhello 5.0\nab1c 2.0\n";
        let corpus = WordCorpus::from_reader(text.as_bytes()).unwrap();
        assert_eq!(corpus.len(), 1);
        assert!(corpus.is_member("oval"));
        assert!(!corpus.is_member("lava"));
    }

    #[test]
    fn reader_rejects_bad_scores() {
        let err = WordCorpus::from_reader("oval 3.7\nbird lots\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CorpusError::Parse { line: 2, ref value } if value == "lots"));

        let err = WordCorpus::from_reader("oval NaN\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CorpusError::Parse { line: 1, .. }));
    }

    #[test]
    fn embedded_list_is_clean() {
        let corpus = WordCorpus::embedded().unwrap();
        assert!(corpus.len() > 300);
        assert!(corpus.words().all(is_admissible_word));
        assert!(corpus.is_member("oval"));
    }

    #[test]
    fn membership_is_case_insensitive() {
        let corpus = sample();
        assert!(corpus.is_member("OVAL"));
        assert!(corpus.is_member("Bird"));
        assert!(!corpus.is_member("ovals"));
        assert!(!corpus.is_member(""));
    }

    #[test]
    fn vocabulary_floor_drops_rare_words() {
        let corpus = sample().with_vocabulary_floor(4.0);
        assert!(!corpus.is_member("oval"));
        assert!(corpus.is_member("lion"));
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn secret_word_respects_inclusive_range() {
        let corpus = sample();
        let mut rng = StdRng::seed_from_u64(7);
        let range = ScoreRange::new(Some(4.3), Some(4.7));
        for _ in 0..50 {
            let word = corpus
                .select_secret_word(&mut rng, range, SelectionMode::Uniform)
                .unwrap();
            assert!(word == "bird" || word == "lion", "unexpected {word}");
        }
    }

    #[test]
    fn empty_range_is_an_error() {
        let corpus = sample();
        let mut rng = StdRng::seed_from_u64(7);
        let err = corpus
            .select_secret_word(
                &mut rng,
                ScoreRange::new(Some(8.0), None),
                SelectionMode::Uniform,
            )
            .unwrap_err();
        assert!(matches!(err, CorpusError::EmptyCandidateSet { min, max }
            if (min - 8.0).abs() < f64::EPSILON && max.is_infinite()));
    }

    #[test]
    fn uniform_selection_reaches_every_candidate() {
        let pool = sample()
            .secret_pool(ScoreRange::unbounded(), SelectionMode::Uniform)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..400 {
            seen.insert(pool.pick(&mut rng).to_owned());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn weighted_selection_skips_zero_weight_words() {
        let corpus = WordCorpus::from_entries([("oval", 0.0), ("bird", 5.0)]);
        let pool = corpus
            .secret_pool(ScoreRange::unbounded(), SelectionMode::Weighted)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(pool.pick(&mut rng), "bird");
        }
    }

    #[test]
    fn weighted_selection_falls_back_when_all_weights_zero() {
        let corpus = WordCorpus::from_entries([("oval", 0.0), ("bird", 0.0)]);
        let pool = corpus
            .secret_pool(ScoreRange::unbounded(), SelectionMode::Weighted)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let word = pool.pick(&mut rng);
        assert!(["oval", "bird"].contains(&word));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn seeded_selection_is_deterministic() {
        let corpus = WordCorpus::embedded().unwrap();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            corpus
                .select_secret_word(&mut rng, ScoreRange::unbounded(), SelectionMode::Uniform)
                .unwrap()
        };
        assert_eq!(draw(99), draw(99));
    }
}
