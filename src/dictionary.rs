//! Word list loading and filtering.
//!
//! The source list is reduced to lowercase five-letter words over `a`-`z`
//! and the result is written back out so the accepted vocabulary can be
//! inspected after a run.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::common::DictionaryError;
use crate::config::WORD_LENGTH;

/// Returns `true` if `word` is exactly five ASCII lowercase letters.
///
/// Rejects acronyms and proper nouns (any uppercase letter) as well as
/// accented or otherwise non-ASCII letters.
pub fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Filtered, immutable word list.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl Dictionary {
    /// Keep the valid entries of `words`, preserving source order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| is_valid_word(w))
            .collect();
        let lookup = words.iter().cloned().collect();
        Self { words, lookup }
    }

    /// Read `source`, filter it, and write the filtered list to `output`.
    ///
    /// `output` is overwritten; its parent directory is created if needed.
    pub fn load(source: &Path, output: &Path) -> Result<Self, DictionaryError> {
        let raw = fs::read_to_string(source).map_err(|e| DictionaryError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;
        let total = raw.lines().count();
        let dictionary = Self::from_words(raw.lines());
        info!(
            "loaded {} of {} entries from {}",
            dictionary.len(),
            total,
            source.display()
        );
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty {
                path: source.to_path_buf(),
            });
        }
        dictionary.persist(output)?;
        Ok(dictionary)
    }

    fn persist(&self, output: &Path) -> Result<(), DictionaryError> {
        let write_err = |e| DictionaryError::Write {
            path: output.to_path_buf(),
            source: e,
        };
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(output, self.words.join("\n")).map_err(write_err)?;
        debug!("wrote filtered dictionary to {}", output.display());
        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Words in source order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
