use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::wordlist::index::Index;
use crate::wordlist::trie::arena::{NodeArena, NodeId};

#[derive(Debug)]
struct FixedNode {
    children: Box<[Option<NodeId>]>,
    is_terminal: bool,
}

impl FixedNode {
    fn empty(slots: usize) -> FixedNode {
        FixedNode {
            children: vec![None; slots].into_boxed_slice(),
            is_terminal: false,
        }
    }
}

/// Trie whose nodes carry one child slot per alphabet character, indexed
/// directly through the declared [`Alphabet`]. Lookup is a single array
/// access; every node pays for the full alphabet width.
///
/// Inserting a word with an undeclared character is an error and leaves
/// the trie unchanged. Querying one simply answers `false`, since such a
/// word can never have been inserted.
#[derive(Debug)]
pub struct FixedTrie {
    alphabet: Alphabet,
    arena: NodeArena<FixedNode>,
}

impl FixedTrie {
    pub fn new(alphabet: Alphabet) -> FixedTrie {
        let root = FixedNode::empty(alphabet.len());
        FixedTrie {
            alphabet,
            arena: NodeArena::with_root(root),
        }
    }

    pub fn alphanumeric() -> FixedTrie {
        FixedTrie::new(Alphabet::alphanumeric())
    }

    fn get_or_create_child(&mut self, node: NodeId, idx: usize) -> NodeId {
        if let Some(child) = self.arena.get(node).children[idx] {
            return child;
        }
        let child = self.arena.alloc(FixedNode::empty(self.alphabet.len()));
        self.arena.get_mut(node).children[idx] = Some(child);
        child
    }
}

impl Index for FixedTrie {
    fn insert(&mut self, word: &str) -> Result<bool> {
        // map the whole word first so a rejected word leaves no partial chain
        let slots = word
            .chars()
            .map(|c| self.alphabet.require_idx(c))
            .collect::<Result<Vec<usize>>>()?;

        let mut current = NodeId::ROOT;
        for idx in slots {
            current = self.get_or_create_child(current, idx);
        }
        let end = self.arena.get_mut(current);
        let added = !end.is_terminal;
        end.is_terminal = true;
        Ok(added)
    }

    fn contains(&self, word: &str) -> bool {
        let mut current = NodeId::ROOT;
        for c in word.chars() {
            let child = self
                .alphabet
                .get_idx(c)
                .and_then(|idx| self.arena.get(current).children[idx]);
            match child {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.arena.get(current).is_terminal
    }

    fn node_count(&self) -> usize {
        self.arena.len()
    }
}
