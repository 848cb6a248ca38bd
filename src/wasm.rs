//! WebAssembly bindings for radix-conv.
//!
//! This module provides JavaScript-friendly wrappers around [`Base`].
//! `u64` values cross the boundary as `BigInt`.

use wasm_bindgen::prelude::*;
use crate::{Base, BaseConfig, OverflowMode};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WebAssembly-friendly base wrapper.
#[wasm_bindgen]
pub struct WasmBase {
    base: Base,
    mode: OverflowMode,
}

#[wasm_bindgen]
impl WasmBase {
    /// Create a base with implicit digits (radix 2 to 36).
    #[wasm_bindgen(constructor)]
    pub fn new(radix: u32) -> Result<WasmBase, JsError> {
        let base = Base::new(radix).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { base, mode: OverflowMode::Wrap })
    }

    /// Create a base from explicit digit symbols.
    #[wasm_bindgen(js_name = fromDigits)]
    pub fn from_digits(digits: &str) -> Result<WasmBase, JsError> {
        let base = Base::from_alphabet(digits).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { base, mode: OverflowMode::Wrap })
    }

    /// Create a base from a JSON base definition.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WasmBase, JsError> {
        let config = BaseConfig::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        let base = config.build().map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { base, mode: config.overflow })
    }

    /// Fail on 64-bit overflow instead of wrapping.
    #[wasm_bindgen(js_name = setChecked)]
    pub fn set_checked(&mut self, checked: bool) {
        self.mode = if checked { OverflowMode::Checked } else { OverflowMode::Wrap };
    }

    /// Number of digits.
    #[wasm_bindgen]
    pub fn radix(&self) -> u32 {
        self.base.radix()
    }

    /// Digit symbols as a string.
    #[wasm_bindgen]
    pub fn digits(&self) -> String {
        self.base.digits().iter().collect()
    }

    /// Digit symbols as a JavaScript array of one-character strings.
    #[wasm_bindgen(js_name = digitArray)]
    pub fn digit_array(&self) -> js_sys::Array {
        self.base
            .digits()
            .iter()
            .map(|digit| JsValue::from_str(&digit.to_string()))
            .collect()
    }

    /// Value of a number written in this base.
    #[wasm_bindgen]
    pub fn decode(&self, input: &str) -> Result<u64, JsError> {
        self.mode.decode(&self.base, input).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Write a value in this base.
    #[wasm_bindgen]
    pub fn encode(&self, value: u64) -> String {
        self.base.encode(value)
    }

    /// Add two numbers written in this base.
    #[wasm_bindgen]
    pub fn add(&self, a: &str, b: &str) -> Result<String, JsError> {
        self.mode.add(&self.base, a, b).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Multiply two numbers written in this base.
    #[wasm_bindgen]
    pub fn multiply(&self, a: &str, b: &str) -> Result<String, JsError> {
        self.mode.multiply(&self.base, a, b).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Rewrite a number from this base into `target`.
    #[wasm_bindgen(js_name = convertTo)]
    pub fn convert_to(&self, input: &str, target: &WasmBase) -> Result<String, JsError> {
        let value = self.decode(input)?;
        Ok(target.encode(value))
    }
}

/// Convert between two implicit-digit radices in one call.
#[wasm_bindgen]
pub fn wasm_convert(input: &str, from: u32, to: u32) -> Result<String, JsError> {
    let source = Base::new(from).map_err(|e| JsError::new(&e.to_string()))?;
    let target = Base::new(to).map_err(|e| JsError::new(&e.to_string()))?;
    source.convert_to(input, &target).map_err(|e| JsError::new(&e.to_string()))
}
