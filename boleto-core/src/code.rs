//! Payment code entity
//!
//! A [`PaymentCode`] is built once from raw input and never changes. Every
//! accessor is a pure function of the normalized digits and the
//! configuration captured at construction.

use crate::checksum::verify;
use crate::config::Config;
use crate::decoder::{bar_from_fields, decode_due_date, decode_value, format_line, line_from_fields};
use crate::normalizer::normalize;
use crate::segmenter::segment;
use crate::types::{CheckResult, CodeForm, CodeInfo, Currency, FieldSet};
use crate::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Decoded boleto payment code, in either bar or line form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCode {
    raw: String,
    digits: String,
    form: CodeForm,
    fields: FieldSet,
    config: Config,
}

impl PaymentCode {
    /// Parse with the default configuration
    pub fn new(raw: &str) -> Result<Self> {
        Self::with_config(raw, &Config::default())
    }

    /// Parse with a caller-supplied configuration
    pub fn with_config(raw: &str, config: &Config) -> Result<Self> {
        let normalized = normalize(raw)?;
        let fields = segment(&normalized.digits, normalized.form);
        sanity_check(&fields);

        Ok(Self {
            raw: raw.to_string(),
            digits: normalized.digits,
            form: normalized.form,
            fields,
            config: config.clone(),
        })
    }

    /// Input exactly as supplied
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized digits (44 or 47)
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Form detected from the digit count
    pub fn form(&self) -> CodeForm {
        self.form
    }

    /// Segmented fields
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Issuing bank code
    pub fn bank_code(&self) -> &str {
        &self.fields.bank_code
    }

    /// Currency of the slip
    pub fn currency(&self) -> Currency {
        self.fields.currency()
    }

    /// Due date, `None` when the slip carries no due date
    pub fn due_date(&self) -> Result<Option<NaiveDate>> {
        decode_due_date(self.fields.due_date_factor, &self.config)
    }

    /// Amount due
    pub fn value(&self) -> Decimal {
        decode_value(self.fields.value_factor)
    }

    /// Decoded fields, same shape for both forms
    ///
    /// Fails only when the due date is outside the configured bound; the
    /// other accessors stay usable in that case.
    pub fn code_info(&self) -> Result<CodeInfo> {
        Ok(CodeInfo {
            form: self.form,
            bank_code: self.fields.bank_code.clone(),
            currency_code: self.fields.currency_code.to_string(),
            due_date: self.due_date()?,
            value: self.value(),
            due_date_factor: self.fields.due_date_factor_digits(),
            value_factor: self.fields.value_factor_digits(),
            free_field: self.fields.free_field.clone(),
        })
    }

    /// 44-digit bar code
    pub fn bar(&self) -> String {
        bar_from_fields(&self.fields)
    }

    /// 47-digit typable line, optionally with separators
    pub fn line(&self, formatted: bool) -> String {
        if formatted {
            format_line(&self.fields)
        } else {
            line_from_fields(&self.fields)
        }
    }

    /// Verdict for every check digit the input carries
    pub fn checks(&self) -> Vec<CheckResult> {
        verify(&self.fields, self.form)
    }

    /// True only when every embedded check digit matches
    pub fn validate(&self) -> bool {
        let checks = self.checks();
        for check in checks.iter().filter(|c| !c.is_valid()) {
            debug!(
                target_digit = ?check.target,
                embedded = check.embedded,
                computed = check.computed,
                "check digit mismatch"
            );
        }
        checks.iter().all(CheckResult::is_valid)
    }
}

/// Flag unusual fields without rejecting them
fn sanity_check(fields: &FieldSet) {
    if fields.currency() != Currency::Real {
        warn!(currency_code = fields.currency_code, "currency code is not the real (9)");
    }
    if fields.bank_code == "000" {
        warn!("bank code is 000");
    }
}

impl FromStr for PaymentCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&serde_json::Value> for PaymentCode {
    type Error = Error;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        let kind = match value {
            Value::String(s) => return Self::new(s),
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Err(Error::Type(kind.to_string()))
    }
}

impl fmt::Display for PaymentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line(true))
    }
}

impl Serialize for PaymentCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.digits)
    }
}

impl<'de> Deserialize<'de> for PaymentCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        PaymentCode::try_from(&value).map_err(serde::de::Error::custom)
    }
}
