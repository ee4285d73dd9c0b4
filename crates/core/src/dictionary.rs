//! Dictionary module - the word list rounds are drawn from
//!
//! Entries are trimmed and lowercased. Blank lines are skipped, and entries that
//! could never be played (non-letters, or longer than the board can hold) are
//! dropped with a warning. A list with nothing left is an error: the game
//! cannot start without a word.

use std::fs;
use std::path::Path;

use crate::error::DictionaryError;
use crate::types::MAX_WORD_LEN;

/// Word list embedded in the binary.
const BUILTIN_WORDS: &str = include_str!("../assets/words.txt");

/// Ordered, immutable list of playable lowercase words.
///
/// Never empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from any sequence of words.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = Vec::new();
        let mut skipped = 0usize;

        for entry in words {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            match normalize(entry) {
                Some(word) => accepted.push(word),
                None => {
                    skipped += 1;
                    log::warn!("skipping unplayable dictionary entry {:?}", entry);
                }
            }
        }

        if accepted.is_empty() {
            return Err(DictionaryError::Empty);
        }
        if skipped > 0 {
            log::debug!("dictionary: {} words kept, {} skipped", accepted.len(), skipped);
        }

        Ok(Self { words: accepted })
    }

    /// Parse line-delimited text, one word per line.
    pub fn parse(text: &str) -> Result<Self, DictionaryError> {
        Self::from_words(text.lines())
    }

    /// Load a line-delimited word list from disk.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let text = fs::read_to_string(path).map_err(|e| DictionaryError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let dictionary = Self::parse(&text)?;
        log::info!(
            "loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// The word list shipped with the game.
    pub fn builtin() -> Result<Self, DictionaryError> {
        Self::parse(BUILTIN_WORDS)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Index of the first occurrence of `word`.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }
}

fn normalize(entry: &str) -> Option<String> {
    if entry.len() > MAX_WORD_LEN || !entry.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(entry.to_ascii_lowercase())
}
