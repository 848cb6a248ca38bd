//! Base definition files.
//!
//! A base can be described by a small JSON document instead of command-line
//! flags:
//!
//! ```json
//! { "radix": 16 }
//! { "digits": "-0+", "overflow": "checked" }
//! ```
//!
//! Exactly one of `radix` and `digits` must be given. `overflow` selects
//! wrapping (`"wrap"`, the default) or checked (`"checked"`) arithmetic.

use std::path::Path;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::base::{arith, Base, ConstructError, DecodeError};

/// How arithmetic treats results that do not fit in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowMode {
    /// Wrap around modulo 2^64.
    #[default]
    Wrap,
    /// Report [`DecodeError::Overflow`].
    Checked,
}

impl OverflowMode {
    /// Decode `input` in `base` under this mode.
    pub fn decode(self, base: &Base, input: &str) -> Result<u64, DecodeError> {
        match self {
            OverflowMode::Wrap => base.decode(input),
            OverflowMode::Checked => base.checked_decode(input),
        }
    }

    /// Add two numbers in `base` under this mode.
    pub fn add(self, base: &Base, a: &str, b: &str) -> Result<String, DecodeError> {
        match self {
            OverflowMode::Wrap => arith::add(base, a, b),
            OverflowMode::Checked => arith::checked_add(base, a, b),
        }
    }

    /// Multiply two numbers in `base` under this mode.
    pub fn multiply(self, base: &Base, a: &str, b: &str) -> Result<String, DecodeError> {
        match self {
            OverflowMode::Wrap => arith::multiply(base, a, b),
            OverflowMode::Checked => arith::checked_multiply(base, a, b),
        }
    }
}

/// A base definition as read from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Radix with implicit digits (2 to 36).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radix: Option<u32>,
    /// Explicit digit symbols, in value order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digits: Option<String>,
    /// Arithmetic overflow behavior.
    #[serde(default)]
    pub overflow: OverflowMode,
}

impl BaseConfig {
    /// A definition for an implicit-digit radix.
    pub fn with_radix(radix: u32) -> Self {
        Self { radix: Some(radix), ..Self::default() }
    }

    /// A definition for an explicit alphabet.
    pub fn with_digits(digits: impl Into<String>) -> Self {
        Self { digits: Some(digits.into()), ..Self::default() }
    }

    /// Parse a definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Render the definition as pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build the [`Base`] this definition describes.
    pub fn build(&self) -> Result<Base, ConfigError> {
        match (self.radix, self.digits.as_deref()) {
            (Some(radix), None) => Ok(Base::new(radix)?),
            (None, Some(digits)) => Ok(Base::from_alphabet(digits)?),
            (Some(_), Some(_)) => Err(ConfigError::Ambiguous),
            (None, None) => Err(ConfigError::MissingBase),
        }
    }
}

/// Load a base definition from disk.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BaseConfig, ConfigError> {
    let json = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::Io(e.to_string()))?;
    BaseConfig::from_json(&json)
}

/// Save a base definition to disk.
pub fn save_config<P: AsRef<Path>>(path: P, config: &BaseConfig) -> Result<(), ConfigError> {
    let json = config.to_json()?;
    std::fs::write(path.as_ref(), json + "\n").map_err(|e| ConfigError::Io(e.to_string()))
}

/// Errors that can occur while reading a base definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("invalid base definition: {0}")]
    Parse(String),

    #[error("base definition needs either \"radix\" or \"digits\"")]
    MissingBase,

    #[error("base is defined twice: give only one of radix, digits or a definition file")]
    Ambiguous,

    #[error(transparent)]
    Construct(#[from] ConstructError),
}
