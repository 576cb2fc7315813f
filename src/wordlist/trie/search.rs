use rayon::prelude::*;

use crate::wordlist::index::Index;

/// Evaluates each query word against a built trie, preserving query
/// order in the result sequence.
pub fn query_all<T, S>(trie: &T, words: &[S]) -> Vec<bool>
where
    T: Index,
    S: AsRef<str>,
{
    words.iter().map(|word| trie.contains(word.as_ref())).collect()
}

/// Same answers as [`query_all`], fanned out over the rayon pool.
/// Queries only read the trie, so they need no coordination; `collect`
/// keeps them in query order.
pub fn query_all_parallel<T, S>(trie: &T, words: &[S]) -> Vec<bool>
where
    T: Index + Sync,
    S: AsRef<str> + Sync,
{
    words
        .par_iter()
        .map(|word| trie.contains(word.as_ref()))
        .collect()
}
