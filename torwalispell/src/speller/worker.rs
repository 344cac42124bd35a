//! Scanning a lexicon for words close to a misspelling.
use smol_str::SmolStr;
use std::sync::atomic::{AtomicBool, Ordering};

use super::SpellerConfig;
use crate::distance::bounded_levenshtein_chars;
use crate::lexicon::Lexicon;
use crate::normalize::normalize;
use crate::speller::suggestion::Suggestion;

/// Ranks every lexicon entry against one input word.
pub struct SpellerWorker<'a> {
    lexicon: &'a Lexicon,
    input: SmolStr,
    config: SpellerConfig,
}

impl<'a> SpellerWorker<'a> {
    /// Prepares a scan of `lexicon` for `word`. The word is normalized here.
    pub fn new(lexicon: &'a Lexicon, word: &str, config: SpellerConfig) -> SpellerWorker<'a> {
        SpellerWorker {
            lexicon,
            input: normalize(word),
            config,
        }
    }

    /// the normalized input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the closest words, nearest first.
    pub fn suggest(&self) -> Vec<Suggestion> {
        self.scan(None)
    }

    /// Like [`SpellerWorker::suggest`], but stops between candidates once
    /// `cancel` is set and returns the ranking of what was scanned so far.
    pub fn suggest_cancellable(&self, cancel: &AtomicBool) -> Vec<Suggestion> {
        self.scan(Some(cancel))
    }

    fn scan(&self, cancel: Option<&AtomicBool>) -> Vec<Suggestion> {
        log::trace!("Beginning suggest");

        if self.input.is_empty() || self.config.n_best == Some(0) {
            return vec![];
        }

        let bound = match self.config.max_distance.checked_sub(1) {
            Some(v) => v,
            None => return vec![],
        };

        let input: Vec<char> = self.input.chars().collect();
        let mut candidates: Vec<(usize, usize)> = vec![];
        let mut candidate: Vec<char> = Vec::with_capacity(input.len() + bound + 1);

        for (index, entry) in self.lexicon.entries().iter().enumerate() {
            if let Some(cancel) = cancel {
                if cancel.load(Ordering::Relaxed) {
                    log::debug!(
                        "Suggest for {:?} cancelled after {} of {} words",
                        self.input,
                        index,
                        self.lexicon.len()
                    );
                    break;
                }
            }

            candidate.clear();
            candidate.extend(entry.canonical().chars());
            if let Some(distance) = bounded_levenshtein_chars(&input, &candidate, bound) {
                candidates.push((index, distance));
            }
        }

        self.generate_sorted_suggestions(candidates)
    }

    fn generate_sorted_suggestions(&self, mut candidates: Vec<(usize, usize)>) -> Vec<Suggestion> {
        // Stable, so equal distances keep lexicon order.
        candidates.sort_by_key(|&(_, distance)| distance);

        if let Some(n) = self.config.n_best {
            candidates.truncate(n);
        }

        let entries = self.lexicon.entries();
        candidates
            .into_iter()
            .map(|(index, distance)| Suggestion::new(entries[index].display().into(), distance))
            .collect()
    }
}
