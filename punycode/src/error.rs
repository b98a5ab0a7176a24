//! Error types for Punycode conversion.

use thiserror::Error;

/// Errors that can occur while converting a label.
///
/// Input that simply isn't Punycode is not an error: [`crate::decode`]
/// hands it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A character in the encoded tail is outside the 36 symbol alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Character offset within the label, tag included.
        position: usize,
    },

    /// The encoded tail ended in the middle of a variable-length integer.
    #[error("encoded data ended unexpectedly")]
    UnexpectedEnd,

    /// A value is not a Unicode scalar value.
    #[error("code point out of range: U+{0:04X}")]
    OutOfRangeCodePoint(u32),

    /// The literal portion before the delimiter holds a non-ASCII character.
    #[error("non-basic code point in literal portion: {0:?}")]
    NonBasicLiteral(char),

    /// Delta arithmetic exceeded the supported range.
    #[error("overflow during decoding")]
    Overflow,
}

/// Result type alias for Punycode operations.
pub type Result<T> = std::result::Result<T, Error>;
