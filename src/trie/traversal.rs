//! Depth-first traversals of a [`Trie`] and its edge list, for inspection.
//!
//! Both orders visit children in slot order `A, C, G, T` and every node exactly
//! once. An edge is listed while visiting its parent, so leaves contribute no
//! lines of their own.

use std::fmt;
use std::io;
use std::iter::FusedIterator;

use super::children::{NodeId, TrieNode};
use super::owned::Trie;
use super::symbol::Nucleotide;

/// Depth-first visiting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// A node is visited before its children.
    PreOrder,
    /// A node is visited after all of its children.
    PostOrder,
}

/// A labeled parent-to-child edge. Displays as `parent->child:symbol`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// The node the edge leaves.
    pub parent: NodeId,
    /// The node the edge enters.
    pub child: NodeId,
    /// The edge label.
    pub symbol: Nucleotide,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}:{}", self.parent, self.child, self.symbol)
    }
}

impl TrieNode {
    /// Returns the outgoing edges of this node in slot order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let parent = self.id();
        self.children()
            .map(move |(symbol, child)| Edge { parent, child, symbol })
    }
}

/// Pre-order iterator, created by [`Trie::traverse`].
#[derive(Clone, Debug)]
pub struct PreOrder<'t> {
    trie: &'t Trie,
    stack: Vec<NodeId>,
}

impl<'t> Iterator for PreOrder<'t> {
    type Item = &'t TrieNode;

    fn next(&mut self) -> Option<&'t TrieNode> {
        let node = self.trie.node(self.stack.pop()?);
        // Reversed so that the A child comes off the stack first.
        let start = self.stack.len();
        self.stack.extend(node.children().map(|(_, child)| child));
        self.stack[start..].reverse();
        Some(node)
    }
}

/// Post-order iterator, created by [`Trie::traverse`].
#[derive(Clone, Debug)]
pub struct PostOrder<'t> {
    trie: &'t Trie,
    // (node, children already pushed)
    stack: Vec<(NodeId, bool)>,
}

impl<'t> Iterator for PostOrder<'t> {
    type Item = &'t TrieNode;

    fn next(&mut self) -> Option<&'t TrieNode> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            let node = self.trie.node(id);
            if expanded || node.is_leaf() {
                return Some(node);
            }
            self.stack.push((id, true));
            let start = self.stack.len();
            self.stack
                .extend(node.children().map(|(_, child)| (child, false)));
            self.stack[start..].reverse();
        }
    }
}

/// A traversal in either [`Order`].
#[derive(Clone, Debug)]
pub enum Traversal<'t> {
    /// See [`Order::PreOrder`].
    Pre(PreOrder<'t>),
    /// See [`Order::PostOrder`].
    Post(PostOrder<'t>),
}

impl<'t> Iterator for Traversal<'t> {
    type Item = &'t TrieNode;

    #[inline]
    fn next(&mut self) -> Option<&'t TrieNode> {
        match self {
            Traversal::Pre(it) => it.next(),
            Traversal::Post(it) => it.next(),
        }
    }
}

impl FusedIterator for Traversal<'_> {}

impl Trie {
    /// Returns an iterator visiting every node once in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dnatrie::trie::builder::build_trie;
    /// use dnatrie::trie::Order;
    ///
    /// let trie = build_trie(["AT", "C"]);
    /// let pre: Vec<_> = trie.traverse(Order::PreOrder).map(|n| n.id().index()).collect();
    /// let post: Vec<_> = trie.traverse(Order::PostOrder).map(|n| n.id().index()).collect();
    /// assert_eq!(pre, [0, 1, 2, 3]);
    /// assert_eq!(post, [2, 1, 3, 0]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traversal<'_> {
        match order {
            Order::PreOrder => Traversal::Pre(PreOrder {
                trie: self,
                stack: vec![NodeId::ROOT],
            }),
            Order::PostOrder => Traversal::Post(PostOrder {
                trie: self,
                stack: vec![(NodeId::ROOT, false)],
            }),
        }
    }

    /// Returns every edge of the trie, grouped by parent in the given order.
    pub fn edges(&self, order: Order) -> impl Iterator<Item = Edge> + '_ {
        self.traverse(order).flat_map(TrieNode::edges)
    }

    /// Writes the edge list, one `parent->child:symbol` line per edge.
    pub fn write_edges<W: io::Write>(&self, order: Order, out: &mut W) -> io::Result<()> {
        for edge in self.edges(order) {
            writeln!(out, "{edge}")?;
        }
        Ok(())
    }
}
