//! The set of recognized words and the words added during a session.
use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::BYTE_ORDER_MARK;
use crate::normalize::normalize;

/// Where a lexicon entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryOrigin {
    /// Part of the word source the lexicon was initialized with
    Bundled,
    /// Added with [`Lexicon::add_word`]; lost when the lexicon is dropped
    Session,
}

/// A recognized word in both its comparison and presentation forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    canonical: SmolStr,
    display: SmolStr,
    origin: EntryOrigin,
}

impl LexiconEntry {
    /// the normalized form used for every comparison
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// the form shown to the user, as it was first supplied (trimmed)
    pub fn display(&self) -> &str {
        &self.display
    }

    /// whether the entry came from the word source or the session
    pub fn origin(&self) -> EntryOrigin {
        self.origin
    }
}

/// Summary counts, as reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconStats {
    /// number of distinct words
    pub total_words: usize,
    /// number of those words added during this session
    pub session_words: usize,
    /// whether a word source was supplied at initialization
    pub loaded: bool,
}

/// Word list with exact, normalization-aware membership.
///
/// Entries keep insertion order, so [`Lexicon::words`] and
/// [`Lexicon::entries`] iterate identically between calls unless a word is
/// added in between. The lexicon never shrinks.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    index: HashMap<SmolStr, usize>,
    entries: Vec<LexiconEntry>,
    loaded: bool,
}

impl Lexicon {
    /// Creates an empty lexicon that was not loaded from any word source.
    pub fn new() -> Lexicon {
        Lexicon::default()
    }

    /// Builds a lexicon from an optional word source.
    ///
    /// Every word is normalized and duplicates are dropped, keeping the first
    /// display form. Words that normalize to nothing are skipped. `None`
    /// yields an empty lexicon with [`Lexicon::is_loaded`] returning false.
    pub fn initialize<I, S>(source: Option<I>) -> Lexicon
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();

        let source = match source {
            Some(v) => v,
            None => {
                log::debug!("No word source given, starting with an empty lexicon");
                return lexicon;
            }
        };

        let mut skipped = 0usize;
        for raw in source {
            if !lexicon.insert(raw.as_ref(), EntryOrigin::Bundled) {
                skipped += 1;
            }
        }

        lexicon.loaded = true;
        log::debug!(
            "Lexicon initialized with {} words ({} empty or duplicate entries skipped)",
            lexicon.len(),
            skipped
        );

        lexicon
    }

    /// Builds a lexicon from a word source.
    pub fn from_words<I, S>(words: I) -> Lexicon
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Lexicon::initialize(Some(words))
    }

    /// Reads a word list file and builds a lexicon from it.
    ///
    /// A missing or unreadable file is not fatal: the failure is logged and
    /// an empty, not-loaded lexicon is returned so that words can still be
    /// added during the session.
    pub fn load(path: &Path) -> Lexicon {
        match crate::wordlist::load(path) {
            Ok(words) => Lexicon::from_words(words),
            Err(e) => {
                log::warn!("Could not load word list: {}", e);
                Lexicon::initialize(None::<Vec<String>>)
            }
        }
    }

    fn insert(&mut self, raw: &str, origin: EntryOrigin) -> bool {
        let canonical = normalize(raw);

        if canonical.is_empty() || self.index.contains_key(&canonical) {
            return false;
        }

        // Joiners shape the displayed word; a byte order mark never does.
        let display: String = raw.chars().filter(|&c| c != BYTE_ORDER_MARK).collect();

        self.index.insert(canonical.clone(), self.entries.len());
        self.entries.push(LexiconEntry {
            canonical,
            display: SmolStr::new(display.trim()),
            origin,
        });

        true
    }

    /// Returns true if the normalized form of `word` is in the lexicon.
    pub fn is_valid(&self, word: &str) -> bool {
        let word = normalize(word);
        !word.is_empty() && self.index.contains_key(&word)
    }

    /// Adds a word for the rest of the session.
    ///
    /// Returns false without changing anything if the word normalizes to
    /// nothing or is already known.
    pub fn add_word(&mut self, word: &str) -> bool {
        let added = self.insert(word, EntryOrigin::Session);
        if added {
            log::debug!("Added session word {:?}", word.trim());
        }
        added
    }

    /// Looks up the entry for a word, if it is known.
    pub fn entry(&self, word: &str) -> Option<&LexiconEntry> {
        self.index
            .get(&normalize(word))
            .map(|&i| &self.entries[i])
    }

    /// number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// whether the lexicon has no words
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// whether a word source was supplied at initialization
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Display forms of all words, in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.display())
    }

    /// All entries, in the same order as [`Lexicon::words`].
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Display forms of the words added during this session.
    pub fn session_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(|e| e.origin == EntryOrigin::Session)
            .map(|e| e.display())
    }

    /// Summary counts for the host.
    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            total_words: self.len(),
            session_words: self.session_words().count(),
            loaded: self.loaded,
        }
    }
}
