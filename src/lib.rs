//! # radix-conv
//!
//! Positional numeral-base conversion.
//!
//! A [`Base`] is a radix together with its digit symbols: `0`-`9` then `A`-`Z`
//! for radices 2 to 36, or any set of distinct characters supplied by the
//! caller. It converts between strings written in that base and `u64` values,
//! and adds or multiplies base-encoded numbers through those values.
//!
//! ```
//! use radix::Base;
//!
//! let hex = Base::new(16).unwrap();
//! assert_eq!(hex.add("FF", "1").unwrap(), "100");
//! assert_eq!(hex.multiply("A", "A").unwrap(), "64");
//! ```

pub mod base;
pub mod config;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use base::{Base, ConstructError, DecodeError, DigitAlphabet};
pub use config::{BaseConfig, ConfigError, OverflowMode, load_config, save_config};
