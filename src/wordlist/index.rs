use crate::error::Result;

/// Capability contract shared by the trie variants: populate by
/// insertion, then answer exact-membership queries. A word counts as a
/// member only if it was inserted itself; being a prefix of a member is
/// not enough.
pub trait Index {
    /// Inserts `word`, returning whether it was newly added. The fixed
    /// variant rejects words with undeclared characters.
    fn insert(&mut self, word: &str) -> Result<bool>;

    fn contains(&self, word: &str) -> bool;

    /// Number of allocated nodes, root included.
    fn node_count(&self) -> usize;

    /// Inserts a batch of words. A rejected word is counted and skipped;
    /// it never aborts the rest of the batch.
    fn insert_all<'a, I>(&mut self, words: I) -> InsertOutcome
    where
        I: IntoIterator<Item = &'a str>,
        Self: Sized,
    {
        let mut outcome = InsertOutcome::default();
        for word in words {
            match self.insert(word) {
                Ok(true) => outcome.added += 1,
                Ok(false) => outcome.duplicates += 1,
                Err(_) => outcome.rejected += 1,
            }
        }
        outcome
    }
}

/// Tally of one batch insertion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    pub added: usize,
    pub duplicates: usize,
    pub rejected: usize,
}
