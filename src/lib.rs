//! # dnatrie
//!
//! Multiple pattern matching over DNA text with a shared prefix
//! [trie](https://en.wikipedia.org/wiki/Trie).
//!
//! All patterns are merged into one trie over the alphabet `A`, `C`, `G`, `T`, so
//! finding which text offsets start a pattern takes one walk from the root per
//! offset instead of one scan per pattern.
//!
//! ## Features
//!
//! - **Fixed alphabet**: four child slots per node, keyed by [`Nucleotide`](trie::Nucleotide)
//! - **Arena-owned**: nodes live in one vector owned by the [`Trie`](trie::Trie) and are
//!   addressed by [`NodeId`](trie::NodeId)
//! - **First terminal wins**: a walk reports the shortest pattern on its path
//! - **Inspectable**: pre-order and post-order edge listings
//!
//! ## Quick Start
//!
//! ```
//! use dnatrie::trie::build_trie;
//!
//! let trie = build_trie(["AT", "AG"]);
//! assert_eq!(trie.solve(b"AATG"), vec![1]);
//! assert!(trie.prefix_walk(b"AATG", 1));
//! assert!(!trie.prefix_walk(b"AATG", 0));
//! ```
//!
//! Patterns can be added one at a time:
//!
//! ```
//! use dnatrie::trie::Builder;
//!
//! let mut builder = Builder::new();
//! assert!(builder.add_pattern("GATTACA"));
//! assert!(!builder.add_pattern("GATTACA"));
//! let trie = builder.build();
//! assert_eq!(trie.node_count(), 8);
//! ```
//!
//! Text and text patterns must only contain the four uppercase letters; any other
//! byte panics when it is reached. Validate untrusted input first, for example with
//! [`input::ProblemInput::parse`].

#![warn(missing_docs)]

/// Parsing of the console problem format.
pub mod input;
/// Pattern trie: alphabet, nodes, builder, matcher and traversals.
pub mod trie;
