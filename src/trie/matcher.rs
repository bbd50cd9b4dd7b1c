//! Per-position prefix matching against a built [`Trie`].
//!
//! Every text offset gets its own walk from the root. A walk stops at the first
//! terminal node on its path, so when one pattern is a prefix of another only the
//! shorter one is reported. There are no failure links: each walk costs at most
//! the length of the longest pattern.

use std::iter::FusedIterator;

use super::owned::Trie;
use super::symbol::Nucleotide;

impl Trie {
    /// Returns the length of the pattern found at `text[start..]`, or `None`.
    ///
    /// The walk follows text symbols from the root and succeeds at the first
    /// terminal node it reaches. It fails when the text runs out or the current
    /// node has no edge for the next symbol. A `start` at or past the end of `text`
    /// fails immediately.
    ///
    /// # Panics
    ///
    /// Panics if the walk reaches a byte outside `A`, `C`, `G`, `T`. Bytes past the
    /// point where the walk stops are never inspected.
    ///
    /// # Examples
    ///
    /// ```
    /// use dnatrie::trie::builder::build_trie;
    ///
    /// let trie = build_trie(["AC", "A"]);
    /// assert_eq!(trie.prefix_match_len(b"AC", 0), Some(1));
    /// assert_eq!(trie.prefix_match_len(b"AC", 1), None);
    /// ```
    pub fn prefix_match_len(&self, text: &[u8], start: usize) -> Option<usize> {
        let mut node = self.root();
        let mut position = start;
        loop {
            if node.is_terminal() {
                return Some(position - start);
            }
            let &byte = text.get(position)?;
            let child = node.get(Nucleotide::from_byte(byte))?;
            node = self.node(child);
            position += 1;
        }
    }

    /// Returns `true` if some pattern occurs at `text[start..]`.
    ///
    /// See [`Trie::prefix_match_len`] for the walk and its panics.
    #[inline]
    pub fn prefix_walk(&self, text: &[u8], start: usize) -> bool {
        self.prefix_match_len(text, start).is_some()
    }

    /// Returns an iterator over every offset of `text` where some pattern starts.
    ///
    /// Offsets are produced lazily in increasing order.
    pub fn matches<'t>(&'t self, text: &'t [u8]) -> Matches<'t> {
        Matches {
            trie: self,
            text,
            position: 0,
        }
    }

    /// Returns every offset of `text` where some pattern starts, in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dnatrie::trie::builder::build_trie;
    ///
    /// let trie = build_trie(["A"]);
    /// assert_eq!(trie.solve(b"AAAA"), vec![0, 1, 2, 3]);
    /// assert!(trie.solve(b"").is_empty());
    /// ```
    pub fn solve(&self, text: &[u8]) -> Vec<usize> {
        let offsets: Vec<usize> = self.matches(text).collect();
        tracing::debug!(
            text_len = text.len(),
            matches = offsets.len(),
            "scanned text"
        );
        offsets
    }
}

/// Finds every offset of `text` where a pattern of `trie` starts.
///
/// Equivalent to [`Trie::solve`].
pub fn solve(text: &[u8], trie: &Trie) -> Vec<usize> {
    trie.solve(text)
}

/// Iterator over matching offsets, created by [`Trie::matches`].
#[derive(Clone, Debug)]
pub struct Matches<'t> {
    trie: &'t Trie,
    text: &'t [u8],
    position: usize,
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.position < self.text.len() {
            let start = self.position;
            self.position += 1;
            if let Some(len) = self.trie.prefix_match_len(self.text, start) {
                tracing::trace!(offset = start, len, "pattern match");
                return Some(start);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.text.len().saturating_sub(self.position)))
    }
}

impl FusedIterator for Matches<'_> {}
