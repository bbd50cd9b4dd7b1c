use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use mark_last::MarkLastIterator;
use smallvec::SmallVec;
use thiserror::Error;

use super::children::NodeId;
use super::node_arena::NodeArena;
use super::owned::Trie;
use super::symbol::{Nucleotide, SymbolError};

/// Trait for types that can be inserted into a trie as a pattern.
///
/// Implemented for string and symbol sequence types so that [`Builder::add_pattern`]
/// and [`build_trie`] accept them directly without manual conversion.
///
/// Conversions from text (`&str`, `String`, `&[u8]`) panic on any byte that is not
/// one of `A`, `C`, `G`, `T`.
pub trait IntoPattern {
    /// Collects this pattern into a symbol buffer.
    fn collect_pattern(self) -> SmallVec<[Nucleotide; 32]>;
}

// Text types → Nucleotide

impl IntoPattern for &str {
    fn collect_pattern(self) -> SmallVec<[Nucleotide; 32]> {
        self.as_bytes().collect_pattern()
    }
}

impl IntoPattern for &&str {
    fn collect_pattern(self) -> SmallVec<[Nucleotide; 32]> {
        self.as_bytes().collect_pattern()
    }
}

impl IntoPattern for String {
    fn collect_pattern(self) -> SmallVec<[Nucleotide; 32]> {
        self.as_bytes().collect_pattern()
    }
}

impl IntoPattern for &String {
    fn collect_pattern(self) -> SmallVec<[Nucleotide; 32]> {
        self.as_bytes().collect_pattern()
    }
}

impl IntoPattern for &[u8] {
    fn collect_pattern(self) -> SmallVec<[Nucleotide; 32]> {
        self.iter().copied().map(Nucleotide::from_byte).collect()
    }
}

// Symbol sequences

impl IntoPattern for &[Nucleotide] {
    fn collect_pattern(self) -> SmallVec<[Nucleotide; 32]> {
        SmallVec::from_slice(self)
    }
}

impl IntoPattern for Vec<Nucleotide> {
    fn collect_pattern(self) -> SmallVec<[Nucleotide; 32]> {
        self.into_iter().collect()
    }
}

impl IntoPattern for &Vec<Nucleotide> {
    fn collect_pattern(self) -> SmallVec<[Nucleotide; 32]> {
        SmallVec::from_slice(self)
    }
}

impl<const N: usize> IntoPattern for [Nucleotide; N] {
    fn collect_pattern(self) -> SmallVec<[Nucleotide; 32]> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoPattern for &[Nucleotide; N] {
    fn collect_pattern(self) -> SmallVec<[Nucleotide; 32]> {
        SmallVec::from_slice(self)
    }
}

/// A builder for constructing a pattern trie incrementally.
///
/// Patterns may be added in any order. Nodes are shared exactly where patterns
/// share a prefix, so the trie never holds more than one node per pattern symbol
/// plus the root.
#[derive(Debug)]
pub struct Builder {
    arena: NodeArena,
    patterns: usize,
}

impl Builder {
    /// Creates a builder holding an empty trie (just the root).
    pub fn new() -> Self {
        Builder {
            arena: NodeArena::new(),
            patterns: 0,
        }
    }

    /// Adds a pattern to the trie being constructed.
    ///
    /// The pattern can be any type that implements [`IntoPattern`], including `&str`,
    /// `String`, `&[u8]` or a slice of [`Nucleotide`].
    ///
    /// Returns `true` if the pattern was not in the trie yet. Adding a pattern twice
    /// leaves the trie unchanged. An empty pattern is ignored and returns `false`.
    ///
    /// # Panics
    ///
    /// Panics if a text pattern contains a byte outside `A`, `C`, `G`, `T`.
    pub fn add_pattern(&mut self, pattern: impl IntoPattern) -> bool {
        let pattern = pattern.collect_pattern();
        self.add_pattern_slice(&pattern)
    }

    fn add_pattern_slice(&mut self, pattern: &[Nucleotide]) -> bool {
        if pattern.is_empty() {
            tracing::debug!("ignoring empty pattern");
            return false;
        }
        self.patterns += 1;

        let mut current = NodeId::ROOT;
        let mut added = false;
        for (last, symbol) in pattern.iter().copied().mark_last() {
            current = self.child_or_insert(current, symbol);
            if last {
                let node = &mut self.arena[current];
                added = !node.is_terminal();
                node.set_terminal();
            }
        }
        added
    }

    fn child_or_insert(&mut self, parent: NodeId, symbol: Nucleotide) -> NodeId {
        match self.arena[parent].get(symbol) {
            Some(child) => child,
            None => {
                let child = self.arena.alloc(symbol);
                self.arena[parent].insert(symbol, child);
                child
            }
        }
    }

    /// Returns the number of nodes created so far, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Finalizes construction and returns the read-only trie.
    pub fn build(self) -> Trie {
        tracing::debug!(
            patterns = self.patterns,
            nodes = self.arena.len(),
            "built pattern trie"
        );
        Trie::from_arena(self.arena)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading patterns from a file.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// The pattern file could not be read.
    #[error("failed to read patterns: {0}")]
    Io(#[from] io::Error),

    /// A line held a symbol outside the nucleotide alphabet.
    #[error("line {line}: {source}")]
    Symbol {
        /// 1-based line number.
        line: usize,
        /// The offending symbol.
        source: SymbolError,
    },
}

/// Builds a trie from an iterator of patterns.
///
/// Each pattern must implement [`IntoPattern`], allowing this function to accept
/// `&str`, `String`, byte slices, or symbol sequences.
///
/// # Examples
///
/// ```
/// use dnatrie::trie::builder::build_trie;
///
/// let trie = build_trie(["AT", "AG"]);
/// assert_eq!(trie.solve(b"AATG"), vec![1]);
/// ```
pub fn build_trie<P: IntoPattern>(patterns: impl IntoIterator<Item = P>) -> Trie {
    let mut builder = Builder::new();
    for pattern in patterns {
        builder.add_pattern(pattern);
    }
    builder.build()
}

/// Builds a trie from a pattern file.
///
/// Reads one pattern per line. Lines starting with '#' are treated as comments and
/// ignored, as are empty lines. Unlike [`build_trie`], an invalid symbol is reported
/// as [`BuilderError::Symbol`] instead of panicking.
///
/// # Examples
///
/// ```no_run
/// use dnatrie::trie::builder::build_trie_from_file;
///
/// let trie = build_trie_from_file("patterns.txt").unwrap();
/// ```
pub fn build_trie_from_file(path: impl AsRef<Path>) -> Result<Trie, BuilderError> {
    let mut builder = Builder::new();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    // Reuse one line buffer instead of allocating a new string for every line.
    let mut buf = String::with_capacity(80);
    let mut line = 0;
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line += 1;
        let pattern = buf.trim();
        if pattern.is_empty() || is_comment(pattern) {
            continue;
        }
        let symbols = pattern
            .chars()
            .map(Nucleotide::try_from)
            .collect::<Result<SmallVec<[Nucleotide; 32]>, _>>()
            .map_err(|source| BuilderError::Symbol { line, source })?;
        builder.add_pattern(symbols.as_slice());
    }
    Ok(builder.build())
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use itertools::Itertools;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn empty_pattern_set_gives_lone_root() {
        let trie = build_trie::<&str>([]);
        assert_eq!(trie.node_count(), 1);
        assert!(trie.root().is_leaf());
        assert!(!trie.root().is_terminal());
    }

    #[test]
    fn single_pattern_is_a_chain() {
        let trie = build_trie(["ACGT"]);
        assert_eq!(trie.node_count(), "ACGT".len() + 1);
        assert!(trie.contains("ACGT"));
        assert!(!trie.contains("ACG"));
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie = build_trie(["AT", "AG"]);
        // root, A, T, G
        assert_eq!(trie.node_count(), 4);
        let a = trie.root().get(Nucleotide::A).unwrap();
        let a = trie.node(a);
        assert_eq!(a.child_count(), 2);
        assert!(!a.is_terminal());
        for symbol in [Nucleotide::T, Nucleotide::G] {
            assert!(trie.node(a.get(symbol).unwrap()).is_terminal());
        }
    }

    #[test]
    fn ids_follow_insertion_order() {
        let trie = build_trie(["AT", "AG"]);
        let a = trie.root().get(Nucleotide::A).unwrap();
        assert_eq!(a.index(), 1);
        let a = trie.node(a);
        assert_eq!(a.get(Nucleotide::T).unwrap().index(), 2);
        assert_eq!(a.get(Nucleotide::G).unwrap().index(), 3);
    }

    #[test]
    fn prefix_pattern_marks_inner_node() {
        let trie = build_trie(["AC", "A"]);
        assert_eq!(trie.node_count(), 3);
        assert!(trie.contains("A"));
        assert!(trie.contains("AC"));
    }

    #[test]
    fn add_pattern_reports_duplicates() {
        let mut builder = Builder::new();
        assert!(builder.add_pattern("GATTACA"));
        let nodes = builder.node_count();
        assert!(!builder.add_pattern("GATTACA"));
        assert_eq!(builder.node_count(), nodes);
        assert!(builder.add_pattern("GAT"));
        assert_eq!(builder.node_count(), nodes);
    }

    #[test]
    fn empty_pattern_is_ignored() {
        let mut builder = Builder::new();
        assert!(!builder.add_pattern(""));
        let trie = builder.build();
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.root().is_terminal());
    }

    #[test]
    #[should_panic(expected = "invalid nucleotide 'N'")]
    fn out_of_alphabet_pattern_fails_fast() {
        build_trie(["ACNT"]);
    }

    #[test]
    fn pattern_order_does_not_change_matches() {
        const PATTERNS: [&str; 5] = ["AT", "AG", "CA", "A", "GGT"];
        let text = b"CATAGGTACAGT";
        let expected = build_trie(PATTERNS).solve(text);
        for patterns in PATTERNS.iter().permutations(PATTERNS.len()) {
            let trie = build_trie(patterns);
            assert_eq!(trie.solve(text), expected);
            assert_eq!(trie.node_count(), 9);
        }
    }

    #[test]
    fn symbol_sequences_are_patterns() {
        use Nucleotide::*;
        let mut builder = Builder::new();
        builder.add_pattern([G, A]);
        builder.add_pattern(vec![T, T]);
        builder.add_pattern(&[C][..]);
        builder.add_pattern(b"AAA".as_slice());
        builder.add_pattern(String::from("CG"));
        let trie = builder.build();
        for pattern in ["GA", "TT", "C", "AAA", "CG"] {
            assert!(trie.contains(pattern), "{pattern}");
        }
    }

    #[test]
    fn patterns_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# primers").unwrap();
        writeln!(file, "AT").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  AG  ").unwrap();
        let trie = build_trie_from_file(file.path()).unwrap();
        assert!(trie.contains("AT"));
        assert!(trie.contains("AG"));
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn bad_symbol_in_file_names_the_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "AT").unwrap();
        writeln!(file, "AxG").unwrap();
        let err = build_trie_from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            BuilderError::Symbol {
                line: 2,
                source: SymbolError::Char('x')
            }
        ));
        assert_eq!(err.to_string(), "line 2: invalid nucleotide 'x', expected one of A, C, G, T");
    }

    #[test]
    fn non_ascii_symbol_in_file_is_named_whole() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "GÅT").unwrap();
        let err = build_trie_from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            BuilderError::Symbol {
                line: 1,
                source: SymbolError::Char('Å')
            }
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let res = build_trie_from_file(dir.path().join("absent.txt"));
        assert!(matches!(res, Err(BuilderError::Io(_))));
    }

    #[test]
    fn comment_that_starts_with_pound() {
        assert!(is_comment("# adapters"));
    }

    #[test]
    fn comment_with_whitespace_before_pound() {
        assert!(is_comment("        # indented"));
    }

    #[test]
    fn non_comment() {
        assert!(!is_comment("GATTACA"));
    }
}
