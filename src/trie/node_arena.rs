//! A flat arena of trie nodes addressed by [`NodeId`].
//!
//! Nodes are appended and never removed, so an id stays valid for the
//! lifetime of the arena. Dropping the arena drops every node once.

use std::ops::{Index, IndexMut};

use super::children::{NodeId, TrieNode};
use super::symbol::Nucleotide;

/// Owns every node of one trie. Slot `i` holds the node with id `i`.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl NodeArena {
    /// Creates an arena holding only the root.
    pub fn new() -> Self {
        NodeArena {
            nodes: vec![TrieNode::root()],
        }
    }

    /// Appends a fresh node reached over `symbol` and returns its id.
    pub fn alloc(&mut self, symbol: Nucleotide) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(TrieNode::new(id, symbol));
        id
    }

    /// Returns the number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns all nodes in id order.
    pub fn as_slice(&self) -> &[TrieNode] {
        &self.nodes
    }
}

impl Index<NodeId> for NodeArena {
    type Output = TrieNode;

    #[inline]
    fn index(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.index()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_with_root() {
        let arena = NodeArena::new();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[NodeId::ROOT].id(), NodeId::ROOT);
    }

    #[test]
    fn ids_are_assigned_in_order() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Nucleotide::A);
        let t = arena.alloc(Nucleotide::T);
        assert_eq!(a.index(), 1);
        assert_eq!(t.index(), 2);
        assert_eq!(arena[t].symbol(), Some(Nucleotide::T));
        for (i, node) in arena.as_slice().iter().enumerate() {
            assert_eq!(node.id().index(), i);
        }
    }
}
