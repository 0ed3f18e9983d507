//! Fixed-width field segmentation
//!
//! Bar layout (1-indexed):
//!
//! ```text
//! 1-3 bank | 4 currency | 5 DV | 6-9 due factor | 10-19 value | 20-44 free field
//! ```
//!
//! Line layout:
//!
//! ```text
//! bank currency free[0..5] DV1 | free[5..15] DV2 | free[15..25] DV3 | DV | due factor value
//! ```

use crate::checksum::module10;
use crate::normalizer::digit_values;
use crate::types::{Block, CodeForm, FieldSet};
use std::ops::Range;

/// Free-field ranges carried by each line block
const FREE_FIELD_BLOCKS: [Range<usize>; 3] = [0..5, 5..15, 15..25];

/// Split a normalized digit string into its fields
///
/// `digits` must hold exactly `form.digit_count()` ASCII digits, which
/// [`crate::normalizer::normalize`] guarantees.
pub fn segment(digits: &str, form: CodeForm) -> FieldSet {
    match form {
        CodeForm::Bar => segment_bar(digits),
        CodeForm::Line => segment_line(digits),
    }
}

fn segment_bar(bar: &str) -> FieldSet {
    let bank_code = &bar[0..3];
    let currency_code = digit_at(bar, 3);
    let free_field = &bar[19..44];

    let blocks = FREE_FIELD_BLOCKS.map(|range| {
        let info = free_field[range.clone()].to_string();
        let mut window = Vec::with_capacity(9);
        if range.start == 0 {
            window.extend(digit_values(bank_code));
            window.push(currency_code);
        }
        window.extend(digit_values(&info));
        Block {
            check_digit: module10(&window),
            info,
        }
    });

    FieldSet {
        bank_code: bank_code.to_string(),
        currency_code,
        check_digit: digit_at(bar, 4),
        due_date_factor: number(&bar[5..9]) as u16,
        value_factor: number(&bar[9..19]),
        free_field: free_field.to_string(),
        blocks,
    }
}

fn segment_line(line: &str) -> FieldSet {
    let blocks = [
        Block {
            info: line[4..9].to_string(),
            check_digit: digit_at(line, 9),
        },
        Block {
            info: line[10..20].to_string(),
            check_digit: digit_at(line, 20),
        },
        Block {
            info: line[21..31].to_string(),
            check_digit: digit_at(line, 31),
        },
    ];

    FieldSet {
        bank_code: line[0..3].to_string(),
        currency_code: digit_at(line, 3),
        check_digit: digit_at(line, 32),
        due_date_factor: number(&line[33..37]) as u16,
        value_factor: number(&line[37..47]),
        free_field: blocks.iter().map(|b| b.info.as_str()).collect(),
        blocks,
    }
}

fn digit_at(digits: &str, index: usize) -> u8 {
    digits.as_bytes()[index] - b'0'
}

fn number(digits: &str) -> u64 {
    digit_values(digits)
        .into_iter()
        .fold(0, |acc, d| acc * 10 + u64::from(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "00190500954014481606906809350314337370000000100";
    const BAR: &str = "00193373700000001000500940144816060680935031";

    #[test]
    fn test_segment_line() {
        let fields = segment(LINE, CodeForm::Line);
        assert_eq!(fields.bank_code, "001");
        assert_eq!(fields.currency_code, 9);
        assert_eq!(fields.check_digit, 3);
        assert_eq!(fields.due_date_factor, 3737);
        assert_eq!(fields.value_factor, 100);
        assert_eq!(fields.free_field, "0500940144816060680935031");
        assert_eq!(fields.blocks[0].info, "05009");
        assert_eq!(fields.blocks[0].check_digit, 5);
        assert_eq!(fields.blocks[1].info, "4014481606");
        assert_eq!(fields.blocks[1].check_digit, 9);
        assert_eq!(fields.blocks[2].info, "0680935031");
        assert_eq!(fields.blocks[2].check_digit, 4);
    }

    #[test]
    fn test_segment_bar_derives_block_digits() {
        let fields = segment(BAR, CodeForm::Bar);
        assert_eq!(fields, segment(LINE, CodeForm::Line));
    }

    #[test]
    fn test_segment_bar_fields() {
        let fields = segment("34191091001219011004141140141141000000120100", CodeForm::Bar);
        assert_eq!(fields.bank_code, "341");
        assert_eq!(fields.currency_code, 9);
        assert_eq!(fields.check_digit, 1);
        assert_eq!(fields.due_date_factor_digits(), "0910");
        assert_eq!(fields.value_factor_digits(), "0121901100");
        assert_eq!(fields.free_field, "4141140141141000000120100");
    }
}
