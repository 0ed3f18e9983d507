//! Core types for payment code decoding

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two serializations a code was supplied in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeForm {
    /// 44-digit machine-scannable barcode
    Bar,
    /// 47-digit typable line
    Line,
}

impl CodeForm {
    /// Digits in a bar code
    pub const BAR_DIGITS: usize = 44;

    /// Digits in a typable line
    pub const LINE_DIGITS: usize = 47;

    /// Classify by digit count; any other length has no form
    pub fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            Self::BAR_DIGITS => Some(CodeForm::Bar),
            Self::LINE_DIGITS => Some(CodeForm::Line),
            _ => None,
        }
    }

    /// Number of digits this form carries
    pub fn digit_count(&self) -> usize {
        match self {
            CodeForm::Bar => Self::BAR_DIGITS,
            CodeForm::Line => Self::LINE_DIGITS,
        }
    }
}

impl fmt::Display for CodeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeForm::Bar => write!(f, "bar"),
            CodeForm::Line => write!(f, "line"),
        }
    }
}

/// Currency of the slip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// Brazilian real (code 9)
    Real,
    /// Any other currency code
    Other(u8),
}

impl Currency {
    /// Code used for the Brazilian real
    pub const REAL_CODE: u8 = 9;

    /// Single-digit code as it appears in the slip
    pub fn code(&self) -> u8 {
        match self {
            Currency::Real => Self::REAL_CODE,
            Currency::Other(code) => *code,
        }
    }
}

impl From<u8> for Currency {
    fn from(code: u8) -> Self {
        if code == Self::REAL_CODE {
            Currency::Real
        } else {
            Currency::Other(code)
        }
    }
}

/// One of the three free-field blocks of the typable line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Free-field digits carried by the block (5 for the first, 10 otherwise)
    pub info: String,

    /// Module-10 check digit; embedded for line input, derived for bar input
    pub check_digit: u8,
}

/// Fixed-position fields shared by both forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    /// Issuing bank (3 digits)
    pub bank_code: String,

    /// Currency code (1 digit)
    pub currency_code: u8,

    /// Overall module-11 check digit
    pub check_digit: u8,

    /// Day offset from the base date, 0 when no due date is encoded
    pub due_date_factor: u16,

    /// Amount in cents
    pub value_factor: u64,

    /// Bank-defined free field (25 digits), passed through opaquely
    pub free_field: String,

    /// Free field split the way the typable line carries it
    pub blocks: [Block; 3],
}

impl FieldSet {
    /// Due-date factor as the 4 digits printed in the slip
    pub fn due_date_factor_digits(&self) -> String {
        format!("{:04}", self.due_date_factor)
    }

    /// Value factor as the 10 digits printed in the slip
    pub fn value_factor_digits(&self) -> String {
        format!("{:010}", self.value_factor)
    }

    /// Currency of the slip
    pub fn currency(&self) -> Currency {
        Currency::from(self.currency_code)
    }
}

/// Decoded view of a payment code, identical for both forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInfo {
    /// Form the code was supplied in
    pub form: CodeForm,

    /// Issuing bank
    pub bank_code: String,

    /// Currency code
    pub currency_code: String,

    /// Due date, `None` when the factor is zero
    pub due_date: Option<NaiveDate>,

    /// Amount with two decimal places
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,

    /// Raw due-date factor
    pub due_date_factor: String,

    /// Raw value factor
    pub value_factor: String,

    /// Bank-defined free field
    pub free_field: String,
}

/// Check digit covered by validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckTarget {
    /// Block 1 (bank, currency, first free-field digits)
    Block1,
    /// Block 2
    Block2,
    /// Block 3
    Block3,
    /// Overall module-11 digit
    General,
}

/// Verdict for a single check digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Which digit was checked
    pub target: CheckTarget,

    /// Digit found in the code
    pub embedded: u8,

    /// Digit recomputed from the covering window
    pub computed: u8,
}

impl CheckResult {
    /// Whether the embedded digit matches
    pub fn is_valid(&self) -> bool {
        self.embedded == self.computed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_from_digit_count() {
        assert_eq!(CodeForm::from_digit_count(44), Some(CodeForm::Bar));
        assert_eq!(CodeForm::from_digit_count(47), Some(CodeForm::Line));
        assert_eq!(CodeForm::from_digit_count(43), None);
        assert_eq!(CodeForm::from_digit_count(48), None);
    }

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::from(9), Currency::Real);
        assert_eq!(Currency::from(0), Currency::Other(0));
        assert_eq!(Currency::Other(3).code(), 3);
        assert_eq!(Currency::Real.code(), 9);
    }
}
