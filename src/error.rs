//! Error types for trie construction and the wordlist loader.

use thiserror::Error;

/// Result type for trie and wordlist operations
pub type Result<T> = std::result::Result<T, TrieError>;

#[derive(Error, Debug)]
pub enum TrieError {
    /// A word contained a character the fixed-size trie's alphabet does not
    /// declare. The offending word is rejected as a whole.
    #[error("character {0:?} is not in the declared alphabet")]
    AlphabetViolation(char),

    /// Dictionary, query, or result file error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stats serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
