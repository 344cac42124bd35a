//! Word source errors.
use std::io::Error;
use std::path::PathBuf;

/// Errors that can occur when reading a word source.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WordlistError {
    /// Error opening or reading the word list file
    #[error("I/O error reading '{}'", .path.display())]
    Io {
        /// the file that could not be read
        path: PathBuf,
        /// underlying error
        #[source]
        source: Error,
    },

    /// Word list is not a JSON array of strings
    #[error("Failed to parse word list JSON")]
    Json(#[from] serde_json::Error),

    /// Script data file has no array literal in it
    #[error("No word array found in script data file")]
    MissingArray,
}
