use std::collections::HashMap;

use crate::error::Result;
use crate::wordlist::index::Index;
use crate::wordlist::trie::arena::{NodeArena, NodeId};

#[derive(Debug, Default)]
struct HashNode {
    children: HashMap<char, NodeId>,
    is_terminal: bool,
}

/// Trie whose nodes map characters to children through a hash map:
/// expected O(1) child lookup without the fixed variant's per-node
/// alphabet-width allocation.
#[derive(Debug)]
pub struct HashTrie {
    arena: NodeArena<HashNode>,
}

impl HashTrie {
    pub fn new() -> HashTrie {
        HashTrie {
            arena: NodeArena::with_root(HashNode::default()),
        }
    }

    fn get_or_create_child(&mut self, node: NodeId, c: char) -> NodeId {
        if let Some(&child) = self.arena.get(node).children.get(&c) {
            return child;
        }
        let child = self.arena.alloc(HashNode::default());
        self.arena.get_mut(node).children.insert(c, child);
        child
    }
}

impl Default for HashTrie {
    fn default() -> HashTrie {
        HashTrie::new()
    }
}

impl Index for HashTrie {
    fn insert(&mut self, word: &str) -> Result<bool> {
        let mut current = NodeId::ROOT;
        for c in word.chars() {
            current = self.get_or_create_child(current, c);
        }
        let end = self.arena.get_mut(current);
        let added = !end.is_terminal;
        end.is_terminal = true;
        Ok(added)
    }

    fn contains(&self, word: &str) -> bool {
        let mut current = NodeId::ROOT;
        for c in word.chars() {
            match self.arena.get(current).children.get(&c) {
                Some(&child) => current = child,
                None => return false,
            }
        }
        self.arena.get(current).is_terminal
    }

    fn node_count(&self) -> usize {
        self.arena.len()
    }
}
