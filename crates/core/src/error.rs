use std::path::PathBuf;

use crate::types::Position;

/// Errors that can occur while loading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("dictionary contains no usable words")]
    Empty,
}

/// Errors that can occur when building a round by hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("round word is empty")]
    EmptyWord,

    #[error("word has {len} letters but the board holds at most {max}")]
    WordTooLong { len: usize, max: usize },

    #[error("word contains {ch:?}; only ASCII letters are allowed")]
    InvalidCharacter { ch: char },

    #[error("word has {letters} letters but {positions} positions were given")]
    LengthMismatch { letters: usize, positions: usize },

    #[error("position {0} is off the board")]
    OutOfBounds(Position),

    #[error("position {0} is used more than once")]
    DuplicatePosition(Position),

    #[error("position {0} is the hint button")]
    HintButtonCollision(Position),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_error_display() {
        let err = DictionaryError::Read {
            path: PathBuf::from("words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read dictionary from words.txt: not found"
        );
        assert_eq!(
            DictionaryError::Empty.to_string(),
            "dictionary contains no usable words"
        );
    }

    #[test]
    fn test_round_error_display() {
        let err = RoundError::LengthMismatch {
            letters: 4,
            positions: 3,
        };
        assert_eq!(err.to_string(), "word has 4 letters but 3 positions were given");

        let err = RoundError::HintButtonCollision(Position::new(14, 10));
        assert_eq!(err.to_string(), "position (14, 10) is the hint button");

        let err = RoundError::InvalidCharacter { ch: '1' };
        assert_eq!(
            err.to_string(),
            "word contains '1'; only ASCII letters are allowed"
        );
    }
}
