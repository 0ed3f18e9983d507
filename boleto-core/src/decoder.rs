//! Field decoding and bar/line layout

use crate::{config::Config, types::FieldSet, Error, Result};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

/// Decimal places carried by the value factor
const VALUE_SCALE: u32 = 2;

/// Decode a due-date factor into a calendar date
///
/// Factor 0 means the slip has no due date. When the configuration sets a
/// plausibility bound, dates past it are rejected instead of returned.
pub fn decode_due_date(factor: u16, config: &Config) -> Result<Option<NaiveDate>> {
    if factor == 0 {
        return Ok(None);
    }

    let date = config
        .base_date
        .checked_add_days(Days::new(u64::from(factor)))
        .ok_or_else(|| Error::Decode {
            field: "due_date",
            reason: format!("factor {} overflows from {}", factor, config.base_date),
        })?;

    if let Some(max) = config.max_due_date {
        if date > max {
            return Err(Error::Decode {
                field: "due_date",
                reason: format!("factor {} decodes to {}, after {}", factor, date, max),
            });
        }
    }

    Ok(Some(date))
}

/// Decode a value factor (cents) into an exact two-place amount
pub fn decode_value(factor: u64) -> Decimal {
    // A 10-digit factor always fits in i64
    Decimal::new(factor as i64, VALUE_SCALE)
}

/// Lay out the fields as a 44-digit bar code
pub fn bar_from_fields(fields: &FieldSet) -> String {
    format!(
        "{}{}{}{}{}{}",
        fields.bank_code,
        fields.currency_code,
        fields.check_digit,
        fields.due_date_factor_digits(),
        fields.value_factor_digits(),
        fields.free_field,
    )
}

/// Lay out the fields as a 47-digit typable line
pub fn line_from_fields(fields: &FieldSet) -> String {
    let [b1, b2, b3] = &fields.blocks;
    format!(
        "{}{}{}{}{}{}{}{}{}{}{}",
        fields.bank_code,
        fields.currency_code,
        b1.info,
        b1.check_digit,
        b2.info,
        b2.check_digit,
        b3.info,
        b3.check_digit,
        fields.check_digit,
        fields.due_date_factor_digits(),
        fields.value_factor_digits(),
    )
}

/// Typable line with the customary separators
///
/// `AAAAA.AAAAA BBBBB.BBBBBB CCCCC.CCCCCC D FFFFVVVVVVVVVV`
pub fn format_line(fields: &FieldSet) -> String {
    let [b1, b2, b3] = &fields.blocks;
    let head = format!("{}{}{}{}", fields.bank_code, fields.currency_code, b1.info, b1.check_digit);
    let second = format!("{}{}", b2.info, b2.check_digit);
    let third = format!("{}{}", b3.info, b3.check_digit);

    format!(
        "{}.{} {}.{} {}.{} {} {}{}",
        &head[..5],
        &head[5..],
        &second[..5],
        &second[5..],
        &third[..5],
        &third[5..],
        fields.check_digit,
        fields.due_date_factor_digits(),
        fields.value_factor_digits(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::segment;
    use crate::types::CodeForm;
    use std::str::FromStr;

    const LINE: &str = "00190500954014481606906809350314337370000000100";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_factor_has_no_date() {
        assert_eq!(decode_due_date(0, &Config::default()).unwrap(), None);
    }

    #[test]
    fn test_due_date_offsets_from_base() {
        let config = Config::default();
        assert_eq!(decode_due_date(1, &config).unwrap(), Some(date(1997, 10, 8)));
        assert_eq!(decode_due_date(1000, &config).unwrap(), Some(date(2000, 7, 3)));
        assert_eq!(decode_due_date(3737, &config).unwrap(), Some(date(2007, 12, 31)));
        assert_eq!(decode_due_date(9999, &config).unwrap(), Some(date(2025, 2, 21)));
    }

    #[test]
    fn test_due_date_past_bound_is_rejected() {
        let config = Config {
            max_due_date: Some(date(2000, 1, 1)),
            ..Config::default()
        };
        assert!(decode_due_date(500, &config).is_ok());
        let err = decode_due_date(1000, &config).unwrap_err();
        assert!(matches!(err, Error::Decode { field: "due_date", .. }));
    }

    #[test]
    fn test_value_scaling_is_exact() {
        assert_eq!(decode_value(150), Decimal::from_str("1.50").unwrap());
        assert_eq!(decode_value(10000), Decimal::from_str("100.00").unwrap());
        assert_eq!(decode_value(150).to_string(), "1.50");
        assert_eq!(decode_value(0).to_string(), "0.00");
        assert_eq!(decode_value(9_999_999_999).to_string(), "99999999.99");
    }

    #[test]
    fn test_layouts() {
        let fields = segment(LINE, CodeForm::Line);
        assert_eq!(line_from_fields(&fields), LINE);
        assert_eq!(bar_from_fields(&fields), "00193373700000001000500940144816060680935031");
        assert_eq!(
            format_line(&fields),
            "00190.50095 40144.816069 06809.350314 3 37370000000100"
        );
    }
}
