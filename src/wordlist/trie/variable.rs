use crate::error::Result;
use crate::wordlist::index::Index;
use crate::wordlist::trie::arena::{NodeArena, NodeId};

#[derive(Debug, Default)]
struct VariableNode {
    children: Vec<(char, NodeId)>,
    is_terminal: bool,
}

impl VariableNode {
    fn get_child(&self, c: char) -> Option<NodeId> {
        self.children
            .iter()
            .find(|&&(letter, _)| letter == c)
            .map(|&(_, child)| child)
    }
}

/// Trie whose nodes keep their outgoing edges in a small unsorted list.
/// Child lookup scans the local branching, which stays cheap for sparse
/// dictionaries and puts no bound on the alphabet.
#[derive(Debug)]
pub struct VariableTrie {
    arena: NodeArena<VariableNode>,
}

impl VariableTrie {
    pub fn new() -> VariableTrie {
        VariableTrie {
            arena: NodeArena::with_root(VariableNode::default()),
        }
    }

    fn get_or_create_child(&mut self, node: NodeId, c: char) -> NodeId {
        if let Some(child) = self.arena.get(node).get_child(c) {
            return child;
        }
        let child = self.arena.alloc(VariableNode::default());
        self.arena.get_mut(node).children.push((c, child));
        child
    }
}

impl Default for VariableTrie {
    fn default() -> VariableTrie {
        VariableTrie::new()
    }
}

impl Index for VariableTrie {
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
            match self.arena.get(current).get_child(c) {
                Some(child) => current = child,
                None => return false,
            }
        }
        self.arena.get(current).is_terminal
    }

    fn node_count(&self) -> usize {
        self.arena.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::index::Index;
    use crate::wordlist::trie::variable::VariableTrie;

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let mut trie = VariableTrie::new();
        trie.insert_all(words.iter().copied());
        words.iter().for_each(|word| assert!(trie.contains(word)));
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let bad_words = vec!["HE", "H", "LOL", "BANANA"];
        let mut trie = VariableTrie::new();
        trie.insert_all(words.iter().copied());
        bad_words.iter().for_each(|word| assert!(!trie.contains(word)));
    }

    #[test]
    fn prefixes_are_not_members() {
        let mut trie = VariableTrie::new();
        trie.insert("car").unwrap();
        assert!(trie.contains("car"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("cart"));
    }

    #[test]
    fn reinsertion_is_idempotent() {
        let mut trie = VariableTrie::new();
        assert!(trie.insert("cat").unwrap());
        let nodes = trie.node_count();
        assert!(!trie.insert("cat").unwrap());
        assert_eq!(trie.node_count(), nodes);
        assert!(trie.contains("cat"));
    }

    #[test]
    fn empty_word_marks_the_root() {
        let mut trie = VariableTrie::new();
        assert!(!trie.contains(""));
        assert!(trie.insert("").unwrap());
        assert!(trie.contains(""));
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let mut trie = VariableTrie::new();
        trie.insert("cat").unwrap();
        trie.insert("car").unwrap();
        // root + c-a-t + r
        assert_eq!(trie.node_count(), 5);
    }
}
