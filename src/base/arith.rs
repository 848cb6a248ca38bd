//! Arithmetic on base-encoded numbers.
//!
//! Operands are decoded to `u64`, combined, and encoded back in the same base.
//! The plain forms wrap around on overflow like fixed-width hardware would;
//! the `checked_` forms report [`DecodeError::Overflow`] instead.

use crate::base::{Base, DecodeError};

/// Add two numbers written in `base`, wrapping on overflow.
pub fn add(base: &Base, a: &str, b: &str) -> Result<String, DecodeError> {
    let a = base.decode(a)?;
    let b = base.decode(b)?;
    Ok(base.encode(a.wrapping_add(b)))
}

/// Multiply two numbers written in `base`, wrapping on overflow.
pub fn multiply(base: &Base, a: &str, b: &str) -> Result<String, DecodeError> {
    let a = base.decode(a)?;
    let b = base.decode(b)?;
    Ok(base.encode(a.wrapping_mul(b)))
}

/// Add two numbers written in `base`, failing if an operand or the sum
/// does not fit in a `u64`.
pub fn checked_add(base: &Base, a: &str, b: &str) -> Result<String, DecodeError> {
    let a = base.checked_decode(a)?;
    let b = base.checked_decode(b)?;
    let sum = a.checked_add(b).ok_or(DecodeError::Overflow)?;
    Ok(base.encode(sum))
}

/// Multiply two numbers written in `base`, failing if an operand or the
/// product does not fit in a `u64`.
pub fn checked_multiply(base: &Base, a: &str, b: &str) -> Result<String, DecodeError> {
    let a = base.checked_decode(a)?;
    let b = base.checked_decode(b)?;
    let product = a.checked_mul(b).ok_or(DecodeError::Overflow)?;
    Ok(base.encode(product))
}
