//! Input normalization
//!
//! Typed lines usually arrive with dots and spaces between blocks, so every
//! non-digit character is dropped before the length is checked.

use crate::{types::CodeForm, Error, Result};
use tracing::debug;

/// Digit-only payment code with its detected form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCode {
    /// Decimal digits only, 44 or 47 of them
    pub digits: String,

    /// Form implied by the digit count
    pub form: CodeForm,
}

impl NormalizedCode {
    /// Digit values in order, most significant first
    pub fn values(&self) -> Vec<u8> {
        digit_values(&self.digits)
    }
}

/// Strip separators and classify the code by length
pub fn normalize(input: &str) -> Result<NormalizedCode> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    let form = CodeForm::from_digit_count(digits.len()).ok_or_else(|| Error::Length {
        raw: input.to_string(),
        digits: digits.len(),
    })?;

    debug!(
        %form,
        stripped = input.chars().count() - digits.len(),
        "normalized payment code"
    );

    Ok(NormalizedCode { digits, form })
}

/// Convert an ASCII digit string into digit values
///
/// Callers pass strings that already went through [`normalize`]; any other
/// byte is skipped.
pub fn digit_values(digits: &str) -> Vec<u8> {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}
