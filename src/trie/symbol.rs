use std::fmt;

use thiserror::Error;

/// Number of symbols in the nucleotide alphabet, and so the number of child slots per node.
pub const ALPHABET_SIZE: usize = 4;

/// A symbol of the fixed DNA alphabet used to label trie edges.
///
/// Each variant maps to exactly one child slot (see [`Nucleotide::index`]).
/// Ordering follows the slot order `A < C < G < T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Nucleotide {
    /// Adenine.
    A = 0,
    /// Cytosine.
    C = 1,
    /// Guanine.
    G = 2,
    /// Thymine.
    T = 3,
}

/// A byte or character that is not one of `A`, `C`, `G`, `T`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    /// A character, or an ASCII byte, outside the alphabet.
    #[error("invalid nucleotide {0:?}, expected one of A, C, G, T")]
    Char(char),
    /// A non-ASCII byte, such as one unit of a multi-byte UTF-8 sequence.
    #[error("invalid nucleotide byte {0:#04x}, expected one of A, C, G, T")]
    Byte(u8),
}

impl Nucleotide {
    /// All symbols in slot order.
    pub const ALL: [Nucleotide; ALPHABET_SIZE] =
        [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Returns the child slot of this symbol.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts an ASCII byte to a symbol.
    ///
    /// # Panics
    ///
    /// Panics if `byte` is not one of `b'A'`, `b'C'`, `b'G'`, `b'T'`. Use
    /// [`Nucleotide::try_from`] when the input has not been validated.
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        match Self::try_from(byte) {
            Ok(symbol) => symbol,
            Err(e) => panic!("{e}"),
        }
    }

    /// The ASCII letter of this symbol.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = SymbolError;

    #[inline]
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            b'A' => Ok(Nucleotide::A),
            b'C' => Ok(Nucleotide::C),
            b'G' => Ok(Nucleotide::G),
            b'T' => Ok(Nucleotide::T),
            other if other.is_ascii() => Err(SymbolError::Char(char::from(other))),
            other => Err(SymbolError::Byte(other)),
        }
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = SymbolError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if !ch.is_ascii() {
            return Err(SymbolError::Char(ch));
        }
        Nucleotide::try_from(ch as u8)
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
