//! Error types shared across the game: dictionary loading, guess validation
//! and session failures.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while loading or persisting the word list.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Source word list could not be read.
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    /// Filtered word list could not be written.
    #[error("failed to write filtered dictionary {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    /// No entry of the source survived filtering.
    #[error("dictionary {} contains no valid five-letter words", .path.display())]
    Empty { path: PathBuf },
}

/// Reasons a submitted guess is rejected. None of them consume a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess a five-letter word. Your word has {len} letter(s).")]
    WrongLength { len: usize },
    #[error("{word} is not a valid word according to our dictionary.")]
    NotInDictionary { word: String },
    #[error("the session is already over")]
    SessionOver,
}

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error("{answer} is not a five-letter lowercase word")]
    InvalidAnswer { answer: String },
    #[error("cannot draw an answer from an empty dictionary")]
    EmptyDictionary,
    #[error("input closed before the game finished")]
    InputClosed,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}
