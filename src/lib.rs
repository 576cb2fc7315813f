//! Membership queries against a word dictionary through a trie index,
//! in three node layouts: variable-size child lists, fixed alphabet-wide
//! slot arrays, and per-node hash maps. Tries are built once and then
//! queried read-only; all traversal is iterative.

pub mod alphabet;
pub mod error;
pub mod wordlist;
