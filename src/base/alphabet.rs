//! Digit alphabets.
//!
//! A [`DigitAlphabet`] is the ordered set of symbols used to write numbers in
//! a base. The position of a symbol is its value:
//! - implicit alphabets use `0`-`9` then `A`-`Z` (radix 2 to 36)
//! - explicit alphabets take any sequence of distinct `char`s

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use crate::base::ConstructError;

/// Smallest radix with a positional meaning.
pub const MIN_RADIX: u32 = 2;

/// Largest radix that has an implicit alphabet.
pub const MAX_IMPLICIT_RADIX: u32 = 36;

/// Generate the implicit digits for `count` symbols: `0`-`9`, then `A`-`Z`.
///
/// Yields at most 36 symbols.
pub fn implicit_digits(count: usize) -> impl Iterator<Item = char> {
    ('0'..='9').chain('A'..='Z').take(count)
}

/// An ordered, duplicate-free set of digit symbols.
#[derive(Clone)]
pub struct DigitAlphabet {
    /// Symbols indexed by their value.
    digits: Vec<char>,
    /// Reverse lookup: symbol -> value.
    values: HashMap<char, u32>,
}

impl DigitAlphabet {
    /// Build the implicit alphabet for `radix`.
    ///
    /// Fails with [`ConstructError::InvalidRadix`] outside `2..=36`.
    pub fn implicit(radix: u32) -> Result<Self, ConstructError> {
        if !(MIN_RADIX..=MAX_IMPLICIT_RADIX).contains(&radix) {
            return Err(ConstructError::InvalidRadix(radix));
        }
        Self::explicit(implicit_digits(radix as usize))
    }

    /// Build an alphabet from caller-supplied symbols, in value order.
    pub fn explicit<I>(symbols: I) -> Result<Self, ConstructError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut digits = Vec::new();
        let mut values = HashMap::new();

        for (position, digit) in symbols.into_iter().enumerate() {
            let value = u32::try_from(position)
                .map_err(|_| ConstructError::InvalidRadix(u32::MAX))?;
            if let Some(&first) = values.get(&digit) {
                return Err(ConstructError::DuplicateDigit {
                    digit,
                    first: first as usize,
                    second: position,
                });
            }
            values.insert(digit, value);
            digits.push(digit);
        }

        // Radix 0 and 1 have no positional encoding.
        if digits.len() < MIN_RADIX as usize {
            return Err(ConstructError::InvalidRadix(digits.len() as u32));
        }

        Ok(Self { digits, values })
    }

    /// Number of symbols, i.e. the radix.
    #[inline]
    pub fn len(&self) -> u32 {
        self.digits.len() as u32
    }

    /// Always false: a valid alphabet has at least two symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The symbols in value order.
    #[inline]
    pub fn digits(&self) -> &[char] {
        &self.digits
    }

    /// The symbol for zero.
    #[inline]
    pub fn zero(&self) -> char {
        self.digits[0]
    }

    /// Value of a symbol, if it belongs to the alphabet.
    #[inline]
    pub fn value_of(&self, digit: char) -> Option<u32> {
        self.values.get(&digit).copied()
    }

    /// Symbol for a value, if the value is below the radix.
    #[inline]
    pub fn symbol_of(&self, value: u32) -> Option<char> {
        self.digits.get(value as usize).copied()
    }
}

// The lookup map is derived from `digits`, so only the symbols take part.
impl PartialEq for DigitAlphabet {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for DigitAlphabet {}

impl Hash for DigitAlphabet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl fmt::Debug for DigitAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitAlphabet(\"{}\")", self)
    }
}

impl fmt::Display for DigitAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implicit_sizes() {
        for radix in MIN_RADIX..=MAX_IMPLICIT_RADIX {
            let alphabet = DigitAlphabet::implicit(radix).unwrap();
            assert_eq!(alphabet.len(), radix, "alphabet for radix {} has wrong size", radix);
        }
    }

    #[test]
    fn test_implicit_order() {
        let alphabet = DigitAlphabet::implicit(36).unwrap();
        assert_eq!(alphabet.to_string(), "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");

        let hex = DigitAlphabet::implicit(16).unwrap();
        assert_eq!(hex.to_string(), "0123456789ABCDEF");

        // No letters below radix 11
        let octal = DigitAlphabet::implicit(8).unwrap();
        assert_eq!(octal.to_string(), "01234567");
    }

    #[test]
    fn test_implicit_bounds() {
        assert_eq!(DigitAlphabet::implicit(0), Err(ConstructError::InvalidRadix(0)));
        assert_eq!(DigitAlphabet::implicit(1), Err(ConstructError::InvalidRadix(1)));
        assert_eq!(DigitAlphabet::implicit(37), Err(ConstructError::InvalidRadix(37)));
        assert!(DigitAlphabet::implicit(2).is_ok());
        assert!(DigitAlphabet::implicit(36).is_ok());
    }

    #[test]
    fn test_explicit_duplicate() {
        let result = DigitAlphabet::explicit("abcb".chars());
        assert_eq!(
            result,
            Err(ConstructError::DuplicateDigit { digit: 'b', first: 1, second: 3 })
        );
    }

    #[test]
    fn test_explicit_too_short() {
        assert_eq!(DigitAlphabet::explicit("".chars()), Err(ConstructError::InvalidRadix(0)));
        assert_eq!(DigitAlphabet::explicit("x".chars()), Err(ConstructError::InvalidRadix(1)));
    }

    #[test]
    fn test_lookup() {
        let alphabet = DigitAlphabet::explicit("-0+".chars()).unwrap();
        assert_eq!(alphabet.zero(), '-');
        assert_eq!(alphabet.value_of('+'), Some(2));
        assert_eq!(alphabet.value_of('1'), None);
        assert_eq!(alphabet.symbol_of(1), Some('0'));
        assert_eq!(alphabet.symbol_of(3), None);
    }

    #[test]
    fn test_equality_ignores_construction_path() {
        let implicit = DigitAlphabet::implicit(4).unwrap();
        let explicit = DigitAlphabet::explicit("0123".chars()).unwrap();
        assert_eq!(implicit, explicit);
    }
}
