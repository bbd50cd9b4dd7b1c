/// Trie builder for constructing a pattern trie from a pattern set.
pub mod builder;
/// Trie node and child slot types.
pub mod children;
/// Per-position prefix matching over a text.
pub mod matcher;
/// Internal flat node arena.
pub(crate) mod node_arena;
/// The trie that owns its nodes.
pub mod owned;
/// The fixed nucleotide alphabet.
pub mod symbol;
/// Pre-order and post-order traversal and edge listing.
pub mod traversal;

pub use builder::{build_trie, Builder, BuilderError, IntoPattern};
pub use children::{NodeId, TrieNode};
pub use matcher::{solve, Matches};
pub use owned::Trie;
pub use symbol::{Nucleotide, SymbolError};
pub use traversal::{Edge, Order};
