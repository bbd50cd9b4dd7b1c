use std::fmt;

use super::builder::IntoPattern;
use super::children::{NodeId, TrieNode};
use super::node_arena::NodeArena;

/// A pattern trie that owns all of its nodes.
///
/// Built once with [`build_trie`](super::builder::build_trie) or a
/// [`Builder`](super::builder::Builder) and read-only afterwards. Nodes are addressed
/// by [`NodeId`]; the root is always [`NodeId::ROOT`].
///
/// # Examples
///
/// ```
/// use dnatrie::trie::builder::build_trie;
/// use dnatrie::trie::Nucleotide;
///
/// let trie = build_trie(["AT", "AG"]);
/// let a = trie.root().get(Nucleotide::A).unwrap();
/// assert_eq!(trie.node(a).child_count(), 2);
/// assert!(trie.contains("AG"));
/// assert!(!trie.contains("A"));
/// ```
#[derive(Clone)]
pub struct Trie {
    arena: NodeArena,
}

impl Trie {
    pub(crate) fn from_arena(arena: NodeArena) -> Self {
        Trie { arena }
    }

    /// Returns a reference to the root node.
    #[inline]
    pub fn root(&self) -> &TrieNode {
        &self.arena[NodeId::ROOT]
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.arena[id]
    }

    /// Returns all nodes in id order, root first.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &TrieNode> + '_ {
        self.arena.as_slice().iter()
    }

    /// Returns the number of nodes in the trie, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// True if the trie holds no pattern.
    pub fn is_empty(&self) -> bool {
        self.root().is_leaf()
    }

    /// Returns `true` if the given pattern was inserted into the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use dnatrie::trie::builder::build_trie;
    ///
    /// let trie = build_trie(["GATTACA"]);
    /// assert!(trie.contains("GATTACA"));
    /// assert!(!trie.contains("GATT"));
    /// ```
    pub fn contains(&self, pattern: impl IntoPattern) -> bool {
        let pattern = pattern.collect_pattern();
        pattern
            .iter()
            .try_fold(self.root(), |node, &symbol| {
                node.get(symbol).map(|child| self.node(child))
            })
            .is_some_and(TrieNode::is_terminal)
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("node_count", &self.node_count())
            .finish()
    }
}
