//! Checking words and ranking corrections.
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use self::worker::SpellerWorker;
use crate::constants::{ACCEPTANCE_THRESHOLD, DEFAULT_N_BEST};
use crate::lexicon::{Lexicon, LexiconStats};
use crate::speller::suggestion::Suggestion;

pub mod suggestion;
pub mod worker;

/// Suggestion settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellerConfig {
    /// maximum number of suggestions; `None` returns every candidate
    pub n_best: Option<usize>,
    /// candidates must be strictly closer than this
    pub max_distance: usize,
}

impl SpellerConfig {
    /// 5 suggestions, distances below 3
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            n_best: Some(DEFAULT_N_BEST),
            max_distance: ACCEPTANCE_THRESHOLD,
        }
    }
}

impl Default for SpellerConfig {
    fn default() -> Self {
        SpellerConfig::default()
    }
}

/// Ranks the words of `lexicon` closest to `word`, returning at most
/// `max_results` of them, nearest first.
///
/// The word is not required to be misspelled; a known word ranks itself
/// first with distance 0.
pub fn suggest(word: &str, lexicon: &Lexicon, max_results: usize) -> Vec<Suggestion> {
    let config = SpellerConfig {
        n_best: Some(max_results),
        ..SpellerConfig::default()
    };

    SpellerWorker::new(lexicon, word, config).suggest()
}

/// Spell checking against a shared lexicon.
pub trait Speller {
    /// whether the word is in the lexicon
    fn is_correct(self: Arc<Self>, word: &str) -> bool;
    /// suggestions with the default configuration
    fn suggest(self: Arc<Self>, word: &str) -> Vec<Suggestion>;
    /// suggestions with the given configuration
    fn suggest_with_config(self: Arc<Self>, word: &str, config: &SpellerConfig) -> Vec<Suggestion>;
    /// adds a session word; false if it was blank or already known
    fn add_word(self: Arc<Self>, word: &str) -> bool;
    /// summary counts of the lexicon
    fn stats(self: Arc<Self>) -> LexiconStats;
}

/// A [`Speller`] that can be shared between threads.
///
/// Queries share a read lock. [`Speller::add_word`] takes the write lock, so
/// checking for and inserting a word happen atomically.
#[derive(Debug)]
pub struct LexiconSpeller {
    lexicon: RwLock<Lexicon>,
}

impl LexiconSpeller {
    /// Wraps a lexicon for shared use.
    pub fn new(lexicon: Lexicon) -> Arc<LexiconSpeller> {
        Arc::new(LexiconSpeller {
            lexicon: RwLock::new(lexicon),
        })
    }

    /// Suggestions that stop early once `cancel` is set.
    pub fn suggest_cancellable(
        self: Arc<Self>,
        word: &str,
        config: &SpellerConfig,
        cancel: &AtomicBool,
    ) -> Vec<Suggestion> {
        let lexicon = self.lexicon.read();
        SpellerWorker::new(&lexicon, word, config.clone()).suggest_cancellable(cancel)
    }

    /// Runs `f` against the lexicon under the read lock.
    pub fn with_lexicon<R>(&self, f: impl FnOnce(&Lexicon) -> R) -> R {
        f(&self.lexicon.read())
    }
}

impl Speller for LexiconSpeller {
    #[allow(clippy::wrong_self_convention)]
    fn is_correct(self: Arc<Self>, word: &str) -> bool {
        self.lexicon.read().is_valid(word)
    }

    #[inline]
    fn suggest(self: Arc<Self>, word: &str) -> Vec<Suggestion> {
        self.suggest_with_config(word, &SpellerConfig::default())
    }

    fn suggest_with_config(self: Arc<Self>, word: &str, config: &SpellerConfig) -> Vec<Suggestion> {
        let lexicon = self.lexicon.read();
        SpellerWorker::new(&lexicon, word, config.clone()).suggest()
    }

    fn add_word(self: Arc<Self>, word: &str) -> bool {
        self.lexicon.write().add_word(word)
    }

    fn stats(self: Arc<Self>) -> LexiconStats {
        self.lexicon.read().stats()
    }
}
