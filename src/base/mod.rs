//! Positional numeral bases.
//!
//! This module provides the core types for writing numbers in any base:
//! - [`DigitAlphabet`] - the ordered digit symbols of a base
//! - [`Base`] - a radix with its alphabet, and string <-> `u64` conversion
//! - [`arith`] - addition and multiplication of base-encoded numbers

mod alphabet;
mod error;
mod radix;
pub mod arith;

pub use alphabet::{implicit_digits, DigitAlphabet, MAX_IMPLICIT_RADIX, MIN_RADIX};
pub use error::{ConstructError, DecodeError};
pub use radix::Base;
