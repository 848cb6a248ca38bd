//! Positional bases.
//!
//! A [`Base`] couples a radix with its [`DigitAlphabet`] and converts between
//! strings written in that base and `u64` values.
//!
//! The plain conversions wrap on overflow, as fixed-width unsigned arithmetic
//! does. Use the `checked_*` forms to detect values that do not fit in 64 bits.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::base::{arith, ConstructError, DecodeError, DigitAlphabet};

/// A numeral base: a radix and the ordered symbols used to write it.
///
/// Immutable once built, so it can be shared freely between threads.
///
/// Serializes as its digit string, e.g. `"0123456789ABCDEF"`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Base {
    alphabet: DigitAlphabet,
}

impl Base {
    /// Create a base from a radix, using the implicit digits `0`-`9`, `A`-`Z`.
    ///
    /// Only radices 2 to 36 have implicit digits; anything else needs
    /// [`Base::from_digits`].
    pub fn new(radix: u32) -> Result<Self, ConstructError> {
        Ok(Self { alphabet: DigitAlphabet::implicit(radix)? })
    }

    /// Create a base from an explicit sequence of digit symbols.
    ///
    /// The radix is the number of symbols. Symbols must be distinct.
    pub fn from_digits<I>(digits: I) -> Result<Self, ConstructError>
    where
        I: IntoIterator<Item = char>,
    {
        Ok(Self { alphabet: DigitAlphabet::explicit(digits)? })
    }

    /// Create a base from the characters of a string, in value order.
    pub fn from_alphabet(digits: &str) -> Result<Self, ConstructError> {
        Self::from_digits(digits.chars())
    }

    /// Shorthand for base 2.
    pub fn binary() -> Self {
        Self::new(2).expect("radix 2 has implicit digits")
    }

    /// Shorthand for base 10.
    pub fn decimal() -> Self {
        Self::new(10).expect("radix 10 has implicit digits")
    }

    /// Shorthand for base 16.
    pub fn hexadecimal() -> Self {
        Self::new(16).expect("radix 16 has implicit digits")
    }

    /// Number of distinct digits.
    #[inline]
    pub fn radix(&self) -> u32 {
        self.alphabet.len()
    }

    /// The digit alphabet.
    #[inline]
    pub fn alphabet(&self) -> &DigitAlphabet {
        &self.alphabet
    }

    /// The digit symbols in value order.
    #[inline]
    pub fn digits(&self) -> &[char] {
        self.alphabet.digits()
    }

    /// The symbol for zero.
    #[inline]
    pub fn zero_digit(&self) -> char {
        self.alphabet.zero()
    }

    /// Value of a single digit symbol.
    #[inline]
    pub fn digit_value(&self, digit: char) -> Option<u32> {
        self.alphabet.value_of(digit)
    }

    /// Symbol for a single digit value.
    #[inline]
    pub fn digit_symbol(&self, value: u32) -> Option<char> {
        self.alphabet.symbol_of(value)
    }

    /// Convert a string in this base to its value.
    ///
    /// The most significant digit comes first. An empty string is zero.
    /// Values past `u64::MAX` wrap around silently; see [`Base::checked_decode`].
    pub fn decode(&self, input: &str) -> Result<u64, DecodeError> {
        let radix = u64::from(self.radix());

        // Horner form: acc * radix + digit is the sum of digit * radix^power,
        // and wraps to the same value modulo 2^64.
        input.chars().enumerate().try_fold(0u64, |acc, (position, digit)| {
            let value = self.lookup(digit, position)?;
            Ok(acc.wrapping_mul(radix).wrapping_add(u64::from(value)))
        })
    }

    /// Convert a string in this base to its value, failing with
    /// [`DecodeError::Overflow`] if it does not fit in a `u64`.
    pub fn checked_decode(&self, input: &str) -> Result<u64, DecodeError> {
        let radix = u64::from(self.radix());

        input.chars().enumerate().try_fold(0u64, |acc, (position, digit)| {
            let value = self.lookup(digit, position)?;
            acc.checked_mul(radix)
                .and_then(|shifted| shifted.checked_add(u64::from(value)))
                .ok_or(DecodeError::Overflow)
        })
    }

    /// Write a value in this base.
    ///
    /// Zero is the zero digit alone; other values have no leading zeros.
    pub fn encode(&self, value: u64) -> String {
        if value == 0 {
            return self.zero_digit().to_string();
        }

        let radix = u64::from(self.radix());

        // Largest place value that is not above the input
        let mut place: u64 = 1;
        let mut width = 1;
        while let Some(next) = place.checked_mul(radix) {
            if next > value {
                break;
            }
            place = next;
            width += 1;
        }

        let mut result = String::with_capacity(width);
        let mut remaining = value;
        loop {
            // place * radix > remaining, so the digit is below the radix
            let digit = remaining / place;
            result.push(self.alphabet.digits()[digit as usize]);
            remaining -= digit * place;

            if place == 1 {
                break;
            }
            place /= radix;
        }

        result
    }

    /// Add two numbers written in this base. Wraps on overflow.
    pub fn add(&self, a: &str, b: &str) -> Result<String, DecodeError> {
        arith::add(self, a, b)
    }

    /// Multiply two numbers written in this base. Wraps on overflow.
    pub fn multiply(&self, a: &str, b: &str) -> Result<String, DecodeError> {
        arith::multiply(self, a, b)
    }

    /// Add two numbers written in this base, failing on overflow.
    pub fn checked_add(&self, a: &str, b: &str) -> Result<String, DecodeError> {
        arith::checked_add(self, a, b)
    }

    /// Multiply two numbers written in this base, failing on overflow.
    pub fn checked_multiply(&self, a: &str, b: &str) -> Result<String, DecodeError> {
        arith::checked_multiply(self, a, b)
    }

    /// Rewrite a number from this base in `target`.
    pub fn convert_to(&self, input: &str, target: &Base) -> Result<String, DecodeError> {
        Ok(target.encode(self.decode(input)?))
    }

    fn lookup(&self, digit: char, position: usize) -> Result<u32, DecodeError> {
        self.alphabet
            .value_of(digit)
            .ok_or(DecodeError::InvalidDigit { digit, position })
    }
}

impl fmt::Debug for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Base({}, \"{}\")", self.radix(), self.alphabet)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base-{} [{}]", self.radix(), self.alphabet)
    }
}

impl TryFrom<String> for Base {
    type Error = ConstructError;

    fn try_from(digits: String) -> Result<Self, Self::Error> {
        Base::from_alphabet(&digits)
    }
}

impl From<Base> for String {
    fn from(base: Base) -> Self {
        base.alphabet.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(Base::decimal().encode(0), "0");
        assert_eq!(Base::hexadecimal().encode(0), "0");

        let custom = Base::from_alphabet("ab").unwrap();
        assert_eq!(custom.encode(0), "a");
    }

    #[test]
    fn test_encode_known_values() {
        let hex = Base::hexadecimal();
        assert_eq!(hex.encode(255), "FF");
        assert_eq!(hex.encode(256), "100");
        assert_eq!(hex.encode(100), "64");
        assert_eq!(hex.encode(u64::MAX), "FFFFFFFFFFFFFFFF");

        let binary = Base::binary();
        assert_eq!(binary.encode(1), "1");
        assert_eq!(binary.encode(2), "10");
        assert_eq!(binary.encode(10), "1010");

        // Interior zeros must be kept
        assert_eq!(Base::decimal().encode(1_000_203), "1000203");
    }

    #[test]
    fn test_encode_exact_powers() {
        let base = Base::new(7).unwrap();
        let mut power: u64 = 1;
        for exponent in 0..22 {
            let expected = format!("1{}", "0".repeat(exponent));
            assert_eq!(base.encode(power), expected, "7^{} encoded wrongly", exponent);
            power *= 7;
        }
    }

    #[test]
    fn test_decode_known_values() {
        let hex = Base::hexadecimal();
        assert_eq!(hex.decode("FF").unwrap(), 255);
        assert_eq!(hex.decode("100").unwrap(), 256);
        assert_eq!(hex.decode("0064").unwrap(), 100);
        assert_eq!(hex.decode("").unwrap(), 0);

        let base36 = Base::new(36).unwrap();
        assert_eq!(base36.decode("Z").unwrap(), 35);
        assert_eq!(base36.decode("10").unwrap(), 36);
    }

    #[test]
    fn test_decode_invalid_digit() {
        let hex = Base::hexadecimal();
        assert_eq!(
            hex.decode("G"),
            Err(DecodeError::InvalidDigit { digit: 'G', position: 0 })
        );

        // Implicit digits are upper case only
        assert_eq!(
            hex.decode("1f"),
            Err(DecodeError::InvalidDigit { digit: 'f', position: 1 })
        );
    }

    #[test]
    fn test_decode_wraps() {
        let hex = Base::hexadecimal();
        // 2^64 wraps to zero
        assert_eq!(hex.decode("10000000000000000").unwrap(), 0);
        assert_eq!(hex.decode("10000000000000001").unwrap(), 1);
    }

    #[test]
    fn test_checked_decode() {
        let hex = Base::hexadecimal();
        assert_eq!(hex.checked_decode("FFFFFFFFFFFFFFFF"), Ok(u64::MAX));
        assert_eq!(hex.checked_decode("10000000000000000"), Err(DecodeError::Overflow));
        // Leading zeros never overflow
        assert_eq!(hex.checked_decode("000000000000000000000001"), Ok(1));
    }

    #[test]
    fn test_custom_alphabet_beyond_36() {
        let digits: String = ('0'..='9').chain('A'..='Z').chain('a'..='z').collect();
        let base62 = Base::from_alphabet(&digits).unwrap();
        assert_eq!(base62.radix(), 62);
        assert_eq!(base62.encode(61), "z");
        assert_eq!(base62.encode(62), "10");
        assert_eq!(base62.decode("zz").unwrap(), 62 * 62 - 1);
    }

    #[test]
    fn test_same_radix_bases_are_identical() {
        let a = Base::new(16).unwrap();
        let b = Base::new(16).unwrap();
        assert_eq!(a, b);
        for value in [0u64, 1, 15, 16, 4095, 65_536, u64::MAX] {
            assert_eq!(a.encode(value), b.encode(value));
        }
    }

    #[test]
    fn test_convert_to() {
        let hex = Base::hexadecimal();
        let binary = Base::binary();
        assert_eq!(hex.convert_to("FF", &binary).unwrap(), "11111111");
        assert_eq!(binary.convert_to("1010", &Base::decimal()).unwrap(), "10");
    }

    #[test]
    fn test_display() {
        assert_eq!(Base::new(5).unwrap().to_string(), "base-5 [01234]");
        assert_eq!(format!("{:?}", Base::new(3).unwrap()), "Base(3, \"012\")");
    }

    #[test]
    fn test_serde_roundtrip() {
        let hex = Base::hexadecimal();
        let json = serde_json::to_string(&hex).unwrap();
        assert_eq!(json, "\"0123456789ABCDEF\"");

        let parsed: Base = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, hex);
    }

    #[test]
    fn test_serde_rejects_duplicates() {
        let result: Result<Base, _> = serde_json::from_str("\"0110\"");
        assert!(result.is_err());
    }
}
