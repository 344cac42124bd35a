//! Reading word sources from disk.
//!
//! The lexicon itself only ever sees an in-memory sequence of words; this
//! module turns the files the word list is shipped in into that sequence.
use std::path::Path;

pub mod error;

use self::error::WordlistError;
use crate::constants::BYTE_ORDER_MARK;

/// Shape of a word source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordlistFormat {
    /// One word per line; blank lines and `#` comments are ignored
    Text,
    /// A JSON array of strings
    Json,
    /// A script file assigning an array literal, e.g.
    /// `const torwaliWordlist = ["...", "..."];`
    Script,
}

impl WordlistFormat {
    /// Picks a format from the file extension, falling back to [`WordlistFormat::Text`].
    pub fn from_path(path: &Path) -> WordlistFormat {
        match path.extension().and_then(|x| x.to_str()) {
            Some("json") => WordlistFormat::Json,
            Some("js") => WordlistFormat::Script,
            _ => WordlistFormat::Text,
        }
    }
}

/// Reads the words from a file, choosing the format by extension.
pub fn load(path: &Path) -> Result<Vec<String>, WordlistError> {
    let contents = std::fs::read_to_string(path).map_err(|source| WordlistError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Editors on Windows like to start files with a byte order mark.
    let contents = contents.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&contents);

    let words = parse(contents, WordlistFormat::from_path(path))?;
    log::debug!("Read {} entries from {}", words.len(), path.display());

    Ok(words)
}

/// Parses the words out of a word source.
///
/// Entries are returned as written; normalization and deduplication happen
/// when the lexicon is built.
pub fn parse(contents: &str, format: WordlistFormat) -> Result<Vec<String>, WordlistError> {
    match format {
        WordlistFormat::Text => Ok(parse_text(contents)),
        WordlistFormat::Json => Ok(serde_json::from_str(contents)?),
        WordlistFormat::Script => {
            let start = contents.find('[').ok_or(WordlistError::MissingArray)?;
            let end = contents.rfind(']').ok_or(WordlistError::MissingArray)?;
            if end < start {
                return Err(WordlistError::MissingArray);
            }

            Ok(serde_json::from_str(&contents[start..=end])?)
        }
    }
}

fn parse_text(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|x| x.trim())
        .filter(|x| !x.is_empty() && !x.starts_with('#'))
        .map(|x| x.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            WordlistFormat::from_path(Path::new("words.json")),
            WordlistFormat::Json
        );
        assert_eq!(
            WordlistFormat::from_path(Path::new("wordlist-data.js")),
            WordlistFormat::Script
        );
        assert_eq!(
            WordlistFormat::from_path(Path::new("words.txt")),
            WordlistFormat::Text
        );
        assert_eq!(
            WordlistFormat::from_path(Path::new("words")),
            WordlistFormat::Text
        );
    }

    #[test]
    fn text() {
        let words = parse("# Torwali\nپاری\n\n  گوتر  \n", WordlistFormat::Text).unwrap();
        assert_eq!(words, vec!["پاری", "گوتر"]);
    }

    #[test]
    fn json() {
        let words = parse(r#"["پاری", "گوتر"]"#, WordlistFormat::Json).unwrap();
        assert_eq!(words, vec!["پاری", "گوتر"]);

        match parse(r#"{"words": []}"#, WordlistFormat::Json) {
            Err(WordlistError::Json(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn script() {
        let src = "// Torwali word list\nconst torwaliWordlist = [\n  \"پاری\",\n  \"گوتر\"\n];\n";
        let words = parse(src, WordlistFormat::Script).unwrap();
        assert_eq!(words, vec!["پاری", "گوتر"]);
    }

    #[test]
    fn script_without_array() {
        match parse("const torwaliWordlist = null;", WordlistFormat::Script) {
            Err(WordlistError::MissingArray) => {}
            other => panic!("unexpected: {:?}", other),
        }

        match parse("] nothing [", WordlistFormat::Script) {
            Err(WordlistError::MissingArray) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"["پاری", "گوتر", "پاري"]"#).unwrap();
        file.flush().unwrap();

        let words = load(file.path()).unwrap();
        assert_eq!(words.len(), 3);

        let lexicon = crate::lexicon::Lexicon::load(file.path());
        assert!(lexicon.is_loaded());
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn json_file_with_byte_order_mark() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "\u{FEFF}[\"پاری\", \"گوتر\"]").unwrap();
        file.flush().unwrap();

        assert_eq!(load(file.path()).unwrap(), vec!["پاری", "گوتر"]);

        let lexicon = crate::lexicon::Lexicon::load(file.path());
        assert!(lexicon.is_loaded());
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn text_file_with_byte_order_mark() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "\u{FEFF}گوتر\nپاری\n").unwrap();
        file.flush().unwrap();

        assert_eq!(load(file.path()).unwrap(), vec!["گوتر", "پاری"]);

        let lexicon = crate::lexicon::Lexicon::load(file.path());
        let suggestions = crate::speller::suggest("گوتار", &lexicon, 5);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value(), "گوتر");
    }

    #[test]
    fn corrupt_file_falls_back_to_empty() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "[\"پاری\",").unwrap();
        file.flush().unwrap();

        assert!(load(file.path()).is_err());

        let mut lexicon = crate::lexicon::Lexicon::load(file.path());
        assert!(!lexicon.is_loaded());
        assert_eq!(lexicon.len(), 0);
        assert!(lexicon.add_word("پاری"));
    }

    #[test]
    fn missing_file() {
        match load(Path::new("/nonexistent/words.txt")) {
            Err(WordlistError::Io { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/words.txt"))
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
