use std::fmt;
use std::iter::FusedIterator;

use super::symbol::{Nucleotide, ALPHABET_SIZE};

/// Identifier of a node within its trie.
///
/// Ids are handed out in creation order, so the id is also the node's position
/// in the trie's arena. The root is always [`NodeId::ROOT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Id of the root node.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the numeric value of this id.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The child slots of a [`TrieNode`], one per [`Nucleotide`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Children([Option<NodeId>; ALPHABET_SIZE]);

impl Children {
    /// Returns the child reached over the edge labeled `symbol`, if any.
    #[inline]
    pub fn get(&self, symbol: Nucleotide) -> Option<NodeId> {
        self.0[symbol.index()]
    }

    /// Attaches `child` under `symbol`.
    ///
    /// The slot must be empty: a node never has two children for one symbol.
    pub(crate) fn insert(&mut self, symbol: Nucleotide, child: NodeId) {
        let slot = &mut self.0[symbol.index()];
        debug_assert!(slot.is_none(), "insert: {symbol} edge already exists");
        *slot = Some(child);
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// True if no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Returns an iterator over the occupied slots in `A, C, G, T` order.
    #[inline]
    pub fn iter(&self) -> ChildIter<'_> {
        ChildIter {
            slots: &self.0,
            index: 0,
        }
    }
}

/// An iterator over the `(symbol, child)` pairs of a node, in slot order.
#[derive(Clone)]
pub struct ChildIter<'t> {
    slots: &'t [Option<NodeId>; ALPHABET_SIZE],
    index: usize,
}

impl Iterator for ChildIter<'_> {
    type Item = (Nucleotide, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.index < ALPHABET_SIZE {
            let symbol = Nucleotide::ALL[self.index];
            let child = self.slots[self.index];
            self.index += 1;
            if let Some(child) = child {
                return Some((symbol, child));
            }
        }
        None
    }

    /// The remaining count is cheap to compute over four slots.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slots[self.index..].iter().flatten().count();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}

impl FusedIterator for ChildIter<'_> {}

/// A node in the pattern trie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieNode {
    id: NodeId,
    symbol: Option<Nucleotide>,
    children: Children,
    terminal: bool,
}

impl TrieNode {
    /// Creates the root node: id 0, no incoming symbol, not terminal.
    pub(crate) fn root() -> Self {
        TrieNode {
            id: NodeId::ROOT,
            symbol: None,
            children: Children::default(),
            terminal: false,
        }
    }

    /// Creates a non-terminal node reached over an edge labeled `symbol`.
    pub(crate) fn new(id: NodeId, symbol: Nucleotide) -> Self {
        TrieNode {
            id,
            symbol: Some(symbol),
            children: Children::default(),
            terminal: false,
        }
    }

    /// The id of this node. Ids only order diagnostic output.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The label of the edge leading into this node, or `None` for the root.
    #[inline]
    pub fn symbol(&self) -> Option<Nucleotide> {
        self.symbol
    }

    /// Returns the child that `symbol`'s edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, symbol: Nucleotide) -> Option<NodeId> {
        self.children.get(symbol)
    }

    /// True if a pattern ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn set_terminal(&mut self) {
        self.terminal = true;
    }

    /// True if this node has no outgoing edges.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Attaches a child under `symbol`.
    pub(crate) fn insert(&mut self, symbol: Nucleotide, child: NodeId) {
        self.children.insert(symbol, child);
    }

    /// Returns an iterator over all children of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        self.children.iter()
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}
