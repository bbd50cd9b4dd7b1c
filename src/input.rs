//! Parsing of the whitespace-separated problem input.
//!
//! The input is the text, then a pattern count `n`, then `n` patterns. Every
//! token is checked against the nucleotide alphabet here so that bad console
//! input is reported as an [`InputError`] rather than a panic inside the trie.

use std::io::{self, Read};
use std::num::ParseIntError;

use thiserror::Error;

use crate::trie::{Nucleotide, SymbolError};

/// A text to scan and the patterns to look for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemInput {
    /// The text, validated to contain only `A`, `C`, `G`, `T`.
    pub text: String,
    /// The patterns in input order, each validated and non-empty.
    pub patterns: Vec<String>,
}

/// Errors in the problem input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input held no tokens at all.
    #[error("missing text")]
    MissingText,

    /// The pattern count was absent.
    #[error("missing pattern count")]
    MissingCount,

    /// The pattern count was not a non-negative integer.
    #[error("invalid pattern count {token:?}: {source}")]
    InvalidCount {
        /// The offending token.
        token: String,
        /// Why it did not parse.
        source: ParseIntError,
    },

    /// Fewer patterns followed than the count announced.
    #[error("expected {expected} patterns, found {found}")]
    MissingPattern {
        /// The announced count.
        expected: usize,
        /// Patterns actually present.
        found: usize,
    },

    /// The text held a symbol outside the alphabet.
    #[error("text position {position}: {source}")]
    Text {
        /// 0-based byte offset in the text.
        position: usize,
        /// The offending symbol.
        source: SymbolError,
    },

    /// A pattern held a symbol outside the alphabet.
    #[error("pattern {index} ({pattern}): {source}")]
    Pattern {
        /// 1-based pattern number.
        index: usize,
        /// The pattern as given.
        pattern: String,
        /// The offending symbol.
        source: SymbolError,
    },

    /// The input could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl ProblemInput {
    /// Parses the full problem: text, count, patterns. Tokens after the last
    /// announced pattern are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use dnatrie::input::ProblemInput;
    ///
    /// let input = ProblemInput::parse("AATG\n2\nAT AG\n").unwrap();
    /// assert_eq!(input.text, "AATG");
    /// assert_eq!(input.patterns, ["AT", "AG"]);
    /// ```
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let mut tokens = input.split_whitespace();
        let text = parse_text_token(tokens.next())?;

        let count = tokens.next().ok_or(InputError::MissingCount)?;
        let expected: usize = count.parse().map_err(|source| InputError::InvalidCount {
            token: count.to_owned(),
            source,
        })?;

        // The count is untrusted; let the vector grow with the patterns actually present.
        let mut patterns = Vec::new();
        for index in 1..=expected {
            let pattern = tokens.next().ok_or(InputError::MissingPattern {
                expected,
                found: patterns.len(),
            })?;
            check_symbols(pattern).map_err(|(_, source)| InputError::Pattern {
                index,
                pattern: pattern.to_owned(),
                source,
            })?;
            patterns.push(pattern.to_owned());
        }

        Ok(ProblemInput { text, patterns })
    }

    /// Reads and parses the problem from `reader`.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::parse(&buf)
    }
}

/// Parses an input that holds only the text token, as used when the patterns
/// come from a separate file.
pub fn parse_text(input: &str) -> Result<String, InputError> {
    parse_text_token(input.split_whitespace().next())
}

fn parse_text_token(token: Option<&str>) -> Result<String, InputError> {
    let text = token.ok_or(InputError::MissingText)?;
    check_symbols(text).map_err(|(position, source)| InputError::Text { position, source })?;
    Ok(text.to_owned())
}

/// Checks every symbol, returning the position and error of the first bad one.
fn check_symbols(token: &str) -> Result<(), (usize, SymbolError)> {
    for (position, ch) in token.char_indices() {
        Nucleotide::try_from(ch).map_err(|e| (position, e))?;
    }
    Ok(())
}
