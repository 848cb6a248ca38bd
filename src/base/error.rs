//! Error types for base construction and conversion.

use thiserror::Error;

/// Errors that can occur when building a [`Base`](crate::Base).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    /// The radix has no implicit alphabet (outside 2..=36), or an explicit
    /// alphabet has fewer than two symbols.
    #[error("invalid radix {0}: a set of digits must be provided for this base")]
    InvalidRadix(u32),

    /// The same symbol appears twice in an explicit alphabet.
    #[error("duplicate digit '{digit}' at positions {first} and {second}")]
    DuplicateDigit { digit: char, first: usize, second: usize },
}

/// Errors that can occur when converting a string to its value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A character of the input has no place in the alphabet.
    #[error("invalid digit '{digit}' at position {position}: the input does not match the base")]
    InvalidDigit { digit: char, position: usize },

    /// The value does not fit in a `u64`. Only the checked operations report this.
    #[error("value does not fit in 64 bits")]
    Overflow,
}
